use dioxus_logger::tracing::{self, Level};

use moodboard::server::{
    config::Config, error::AppError, router, service::file_storage::FileStorageService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let upload_dir = startup::prepare_upload_dir(&config.upload_dir).await?;

    let app = router::router(&upload_dir, config.max_upload_bytes)
        .with_state(AppState::new(db, FileStorageService::new(upload_dir)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
