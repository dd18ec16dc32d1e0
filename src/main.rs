use std::env;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use nuv_login::{
    commands::{self, LoginArgs},
    keystore::Keystore,
    prompt::TerminalPasswordReader,
};

#[derive(Debug, Parser)]
#[command(name = "nuv")]
#[command(version, about, long_about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Login(LoginArgs),
}

fn debug_enabled() -> bool {
    env::var("NUV_DEBUG")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if debug_enabled() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Login(args) => {
            let result =
                commands::login::run(args, &TerminalPasswordReader, &Keystore::default())?;
            if let Some(result) = result {
                println!(
                    "Successfully logged in as {} on {}.",
                    result.login, result.api_host
                );
            }
        }
    }

    Ok(())
}
