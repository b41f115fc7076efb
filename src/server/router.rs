use std::path::Path;

use axum::{extract::DefaultBodyLimit, http::Method, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::moodboard::*,
    service::file_storage::UPLOAD_URL_PREFIX,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Moodboard API"),
    tags((name = "moodboard", description = "Moodboards and their images"))
)]
struct ApiDoc;

/// Builds the application router
///
/// The `/api` routes get the CORS policy and the upload body limit. Stored files are
/// served from `upload_dir` under `/uploads`, outside of the CORS policy.
pub fn router(upload_dir: &Path, max_upload_bytes: usize) -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_moodboards, create_moodboard))
        .routes(routes!(get_moodboard_by_id))
        .routes(routes!(upload_cover_image))
        .routes(routes!(add_image))
        .split_for_parts();

    let api_router = api_router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors_layer());

    Router::new()
        .merge(api_router)
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
