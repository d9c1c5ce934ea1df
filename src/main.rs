use std::sync::Arc;

use quotes_adapter::{
    build_app,
    config::Config,
    logging,
    source::{FileDocumentProvider, QUOTES_FILE_PATH},
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let provider = Arc::new(FileDocumentProvider::new(QUOTES_FILE_PATH));
    let state = AppState::new(provider);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_socket()).await?;

    info!(
        bind_port = config.bind_port,
        quotes_file = QUOTES_FILE_PATH,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
