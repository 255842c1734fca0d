pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "todoctl")]
#[command(about = "todoctl - Operator CLI for the Todo Manager API database")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the schema in DATABASE_URL")]
    Migrate,

    #[command(about = "User account management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match cli.command {
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, config, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_create() {
        let cli = Cli::try_parse_from([
            "todoctl",
            "--json",
            "user",
            "create",
            "--email",
            "admin@a.com",
            "--password",
            "Password1",
            "--admin",
        ])
        .unwrap();

        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::User {
                cmd: commands::user::UserCommands::Create { email, admin, .. },
            } => {
                assert_eq!(email, "admin@a.com");
                assert!(admin);
            }
            _ => panic!("expected user create"),
        }
    }

    #[test]
    fn parses_migrate() {
        let cli = Cli::try_parse_from(["todoctl", "migrate"]).unwrap();
        assert!(matches!(cli.command, Commands::Migrate));
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Text));
    }
}
