use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gatehouse_backend_lib::{config::Settings, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so it can drive the log filter
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = settings.bind_addr;
    let state = Arc::new(AppState::new(settings)?);

    // When a database is configured, make sure the schema exists before
    // serving. An unconfigured database stays lazily fatal instead.
    if let Ok(store) = state.db.store() {
        store.ensure_schema().await?;
    }

    let app = router::create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
