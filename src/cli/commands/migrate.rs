use anyhow::Context;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;
    DatabaseManager::migrate(&pool).await.context("failed to apply schema")?;

    output_success(
        &output_format,
        "Schema is up to date",
        Some(json!({ "database": config.database.url })),
    )
}
