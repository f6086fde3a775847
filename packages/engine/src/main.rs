use tracing::info;

use engine::config::AppConfig;

/// Bootstrap entry point: load configuration, connect to the store, sync the
/// schema and ensure the relationship indexes exist. The presentation layer
/// embeds the engine crate directly.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    engine::telemetry::init_tracing(&config.log.level);

    let db = engine::database::init_db(&config.database.url).await?;
    engine::seed::ensure_indexes(&db).await?;

    info!("Event hub store is ready");
    Ok(())
}
