use server::config::ServerConfig;
use server::store::LoanStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env();
    let store = if config.empty {
        LoanStore::default()
    } else {
        LoanStore::seeded()
    };

    let (addr, state) = server::spawn(config.addr, store).await?;
    tracing::info!(%addr, loans = state.store.len().await, "loan server listening, docs at /docs");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    Ok(())
}
