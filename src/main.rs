//! Service bootstrap: tracing, environment, reference data, database.
//!
//! The presentation layer (dashboard, CLI, bot) is expected to sit on top of
//! the `carbon_ledger` library; this binary prepares everything it needs.

use carbon_ledger::config;
use carbon_ledger::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Load reference data from config.toml
    let catalog = config::categories::load_default_catalog()
        .inspect_err(|e| error!("Failed to load category catalog: {e}"))?;
    info!(categories = catalog.len(), "Loaded category catalog");

    let sites = config::sites::load_default_sites()
        .inspect_err(|e| error!("Failed to load site configuration: {e}"))?;
    let users = config::users::load_default_users()
        .inspect_err(|e| error!("Failed to load user configuration: {e}"))?;
    info!(sites = sites.len(), users = users.len(), "Loaded reference data");

    // 4. Initialize database and seed sites
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;
    config::sites::seed_sites(&db, &sites).await?;

    info!("carbon-ledger ready");
    Ok(())
}
