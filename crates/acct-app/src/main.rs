//! acct - local account screen
//!
//! Every invocation is one application start: the saved session is restored
//! first, then the command runs.
//!
//! # Examples
//!
//! ```bash
//! acct sign-up --username alice --password pw12345 --first-name Alice \
//!     --last-name Liddell --email alice@example.com \
//!     --contact-number 0123456789 --address "1 Rabbit Hole"
//! acct sign-in --username alice --password pw12345
//! acct profile edit --address "2 Looking Glass Lane"
//! acct logout
//! ```

use acct_app::cli::Cli;
use acct_app::{App, AppError, commands, logger};

use acct_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.alert());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting acct v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::open(&config).await?;
    if let Some(alert) = app.start().await? {
        eprintln!("{alert}");
    }

    commands::run(&mut app, cli.command).await
}
