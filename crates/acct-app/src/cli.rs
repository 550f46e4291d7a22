use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "acct")]
#[command(about = "Local account registration, sign-in and profile management")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current screen (restores any saved session)
    Status,

    /// Sign in with existing credentials
    SignIn {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Create a new account (does not sign in)
    SignUp(SignUpArgs),

    /// View or edit the signed-in profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Sign out and clear the saved session
    Logout,
}

#[derive(Args)]
pub struct SignUpArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    /// Ten digits
    #[arg(long)]
    pub contact_number: String,

    #[arg(long)]
    pub address: String,

    #[arg(long, default_value = "")]
    pub profile_picture: String,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the cached profile
    Show,

    /// Edit one or more fields and save
    Edit(ProfileEditArgs),
}

#[derive(Args, Default)]
pub struct ProfileEditArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub contact_number: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Empty string clears the picture
    #[arg(long)]
    pub profile_picture: Option<String>,
}
