use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A moodboard together with every image it owns.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodboardDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub images: Vec<ImageDto>,
}

/// An image owned by a moodboard. Never carries its parent.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: i32,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodboardDto {
    /// Required, rejected when missing or blank.
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Multipart form accepted by the upload endpoints.
#[derive(Deserialize, ToSchema)]
pub struct UploadFileDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
