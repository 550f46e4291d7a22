pub mod alert;
pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod form_controller;
pub mod logger;
pub mod profile_editor;
pub mod view;

pub use alert::{Alert, AlertKind};
pub use app::{App, AppSettings};
pub use error::{AppError, Result};
pub use form_controller::{FormController, FormInput, SubmitOutcome};
pub use profile_editor::{EditPolicy, ProfileEditor};
pub use view::{FormView, ProfileView, View};

#[cfg(test)]
mod tests;
