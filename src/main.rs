use cookie_debt::{load_balance, router, AppState, Config, Ledger};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let balance = load_balance(&config.data_path).await.unwrap_or_default();
    info!(
        balance,
        debt_limit = config.limits.debt,
        credit_limit = config.limits.credit,
        "loaded balance from {}",
        config.data_path.display()
    );

    let state = AppState::new(config.data_path, Ledger::with_balance(balance, config.limits))
        .with_payment_url(config.payment_url);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
