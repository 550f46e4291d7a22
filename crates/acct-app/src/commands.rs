//! Command dispatch shared by the binary and tests.

use crate::cli::{Commands, ProfileCommands, ProfileEditArgs, SignUpArgs};
use crate::{Alert, App, FormInput, Result as AppResult};

use acct_core::ProfileField;
use acct_session::KeyValueStore;

impl From<SignUpArgs> for FormInput {
    fn from(args: SignUpArgs) -> Self {
        Self {
            username: args.username,
            password: args.password,
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            contact_number: args.contact_number,
            address: args.address,
            profile_picture: args.profile_picture,
        }
    }
}

impl ProfileEditArgs {
    /// Fields given on the command line, in display order.
    pub fn changes(self) -> Vec<(ProfileField, String)> {
        [
            (ProfileField::FirstName, self.first_name),
            (ProfileField::LastName, self.last_name),
            (ProfileField::Email, self.email),
            (ProfileField::ContactNumber, self.contact_number),
            (ProfileField::Address, self.address),
            (ProfileField::ProfilePicture, self.profile_picture),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Runs one command against a started app and returns the text to print.
pub async fn run<S: KeyValueStore>(app: &mut App<S>, command: Commands) -> AppResult<String> {
    match command {
        Commands::Status => Ok(app.view().to_string()),
        Commands::SignIn { username, password } => {
            let alert = app.sign_in(username, password).await?;
            Ok(with_view(alert, app))
        }
        Commands::SignUp(args) => {
            let alert = app.sign_up(args.into()).await?;
            Ok(with_view(alert, app))
        }
        Commands::Profile { action } => match action {
            ProfileCommands::Show => {
                app.profile()?;
                Ok(app.view().to_string())
            }
            ProfileCommands::Edit(args) => {
                app.begin_edit()?;
                for (field, value) in args.changes() {
                    app.edit(field, value)?;
                }
                let alert = app.save_profile().await?;
                Ok(with_view(alert, app))
            }
        },
        Commands::Logout => {
            let alert = app.logout().await?;
            Ok(with_view(alert, app))
        }
    }
}

fn with_view<S: KeyValueStore>(alert: Alert, app: &App<S>) -> String {
    format!("{}\n\n{}", alert, app.view())
}
