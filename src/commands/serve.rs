//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{CommandError, CommandResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> CommandResult<()> {
    tracing::info!("Starting server...");

    let config = apply_overrides(args, config);

    let db = Arc::new(Database::connect(&config).await?);

    // Services are built once here and shared by every request
    let app_state = AppState::from_database(db);

    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CommandError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(CommandError::Server)?;

    Ok(())
}

/// Command-line flags win over the environment.
fn apply_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}
