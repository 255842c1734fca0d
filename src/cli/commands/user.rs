use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::models::UserRole;
use crate::database::DatabaseManager;
use crate::services::dto::UserRoleChangeRequest;
use crate::services::UserService;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user (password policy enforced)")]
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "Grant the ADMIN role")]
        admin: bool,
    },

    #[command(about = "Change a user's role")]
    Role {
        #[arg(long)]
        id: i64,
        #[arg(long, help = "user or admin")]
        role: String,
    },
}

pub async fn handle(cmd: UserCommands, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;
    let service = UserService::new(pool);

    match cmd {
        UserCommands::Create { email, password, admin } => {
            let role = if admin { UserRole::Admin } else { UserRole::User };
            let user = service.create_user(&email, &password, role).await?;

            output_success(
                &output_format,
                &format!("Created user {} ({})", user.email, user.user_role),
                Some(json!({ "id": user.id, "email": user.email, "user_role": user.user_role })),
            )
        }
        UserCommands::Role { id, role } => {
            service
                .change_user_role(id, UserRoleChangeRequest { role: role.clone() })
                .await?;

            output_success(
                &output_format,
                &format!("User {} is now {}", id, role.to_ascii_uppercase()),
                Some(json!({ "id": id, "user_role": role.to_ascii_uppercase() })),
            )
        }
    }
}
