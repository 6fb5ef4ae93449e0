//! Database connection and initialization.

use bson::doc;
use mongodb::{error::Result as MongoResult, Client};

use crate::config::Config;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    /// Build a client for the configured deployment.
    ///
    /// The driver connects lazily, so this only fails on a malformed URI or
    /// an unresolvable SRV record; use [`Database::ping`] to check the server.
    pub async fn connect(config: &Config) -> MongoResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;

        tracing::info!(database = %config.database_name, "MongoDB client initialized");

        Ok(Self::from_client(client, config.database_name.clone()))
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
        }
    }

    /// Handle to the application database.
    pub fn handle(&self) -> mongodb::Database {
        self.client.database(&self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check connectivity with the server's `ping` command.
    pub async fn ping(&self) -> MongoResult<()> {
        self.handle().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("name", &self.name).finish()
    }
}
