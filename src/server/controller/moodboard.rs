use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        moodboard::{CreateMoodboardDto, ImageDto, MoodboardDto, UploadFileDto},
    },
    server::{
        error::AppError, service::moodboard::MoodboardService, state::AppState,
        util::multipart::read_file_field,
    },
};

/// Tag for grouping moodboard endpoints in OpenAPI documentation
pub static MOODBOARD_TAG: &str = "moodboard";

fn moodboard_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Moodboard with id {} not found", id))
}

/// Get all moodboards.
///
/// Returns every moodboard ordered by ID, each with its images in insertion order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of moodboards
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/moodboards",
    tag = MOODBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved moodboards", body = Vec<MoodboardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moodboards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MoodboardService::new(&state.db, &state.storage);

    let moodboards = service.get_all().await?;

    let dtos: Vec<MoodboardDto> = moodboards.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new moodboard.
///
/// Creates a moodboard with the provided title and optional description. The new
/// moodboard has no cover image and no images.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Moodboard title and description, or the reason the body was rejected
///
/// # Returns
/// - `200 OK` - Successfully created moodboard
/// - `400 Bad Request` - Malformed body, or title missing or blank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/moodboards",
    tag = MOODBOARD_TAG,
    request_body = CreateMoodboardDto,
    responses(
        (status = 200, description = "Successfully created moodboard", body = MoodboardDto),
        (status = 400, description = "Malformed body, or title missing or blank", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_moodboard(
    State(state): State<AppState>,
    payload: Result<Json<CreateMoodboardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = MoodboardService::new(&state.db, &state.storage);

    let moodboard = service.create(payload.into()).await?;

    Ok((StatusCode::OK, Json(moodboard.into_dto())))
}

/// Get a moodboard by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Moodboard ID to fetch
///
/// # Returns
/// - `200 OK` - Moodboard with its images
/// - `404 Not Found` - Moodboard doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/moodboards/{id}",
    tag = MOODBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Moodboard ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved moodboard", body = MoodboardDto),
        (status = 404, description = "Moodboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moodboard_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MoodboardService::new(&state.db, &state.storage);

    let moodboard = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| moodboard_not_found(id))?;

    Ok((StatusCode::OK, Json(moodboard.into_dto())))
}

/// Upload a cover image for a moodboard.
///
/// Stores the file sent in the multipart field `file` and sets it as the moodboard's
/// cover image. Any previous cover image file is left on disk.
///
/// # Arguments
/// - `state` - Application state containing the database connection and file storage
/// - `id` - Moodboard ID to update
/// - `multipart` - Multipart body with a `file` field
///
/// # Returns
/// - `200 OK` - Updated moodboard
/// - `400 Bad Request` - Malformed body or missing `file` field
/// - `404 Not Found` - Moodboard doesn't exist
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/moodboards/{id}/uploadCoverImage",
    tag = MOODBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Moodboard ID")
    ),
    request_body(content = UploadFileDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully uploaded cover image", body = MoodboardDto),
        (status = 400, description = "Missing file", body = ErrorDto),
        (status = 404, description = "Moodboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_cover_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_file_field(multipart).await?;

    let service = MoodboardService::new(&state.db, &state.storage);

    let moodboard = service
        .upload_cover_image(id, upload)
        .await?
        .ok_or_else(|| moodboard_not_found(id))?;

    Ok((StatusCode::OK, Json(moodboard.into_dto())))
}

/// Add an image to a moodboard.
///
/// Stores the file sent in the multipart field `file` and creates an image owned by
/// the moodboard.
///
/// # Arguments
/// - `state` - Application state containing the database connection and file storage
/// - `id` - Moodboard ID the image is added to
/// - `multipart` - Multipart body with a `file` field
///
/// # Returns
/// - `200 OK` - Created image
/// - `400 Bad Request` - Malformed body or missing `file` field
/// - `404 Not Found` - Moodboard doesn't exist
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/moodboards/{id}/images",
    tag = MOODBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Moodboard ID")
    ),
    request_body(content = UploadFileDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully added image", body = ImageDto),
        (status = 400, description = "Missing file", body = ErrorDto),
        (status = 404, description = "Moodboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_file_field(multipart).await?;

    let service = MoodboardService::new(&state.db, &state.storage);

    let image = service
        .add_image(id, upload)
        .await?
        .ok_or_else(|| moodboard_not_found(id))?;

    Ok((StatusCode::OK, Json(image.into_dto())))
}
