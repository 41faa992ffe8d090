use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::config::AppConfig;
use folio::data::DataDir;
use folio::models::StatusBadge;
use folio::theme::JsonFileStore;
use folio::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio=info,tower_http=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting folio v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState {
        data: DataDir::new(&config.data_dir),
        theme: Arc::new(JsonFileStore::new(&config.theme_file)),
        status: StatusBadge::default(),
    };
    let app = build_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
