//! Ping command - Checks MongoDB connectivity from the shell.

use crate::config::Config;
use crate::errors::CommandResult;
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> CommandResult<()> {
    let db = Database::connect(&config).await?;
    db.ping().await?;

    tracing::info!(database = %db.name(), "MongoDB is reachable");
    println!("MongoDB is reachable (database: {})", db.name());

    Ok(())
}
