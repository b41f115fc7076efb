use axum::extract::Multipart;

use crate::server::{error::AppError, model::upload::FileUpload};

/// Name of the multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// Reads the `file` field out of a multipart body
///
/// Other fields are skipped. A file part sent without a file name is accepted with
/// an empty name, and is then stored without an extension.
///
/// # Arguments
/// - `multipart` - The multipart body extracted by axum
///
/// # Returns
/// - `Ok(FileUpload)` - The file name and content of the `file` field
/// - `Err(AppError::BadRequest)` - Body is malformed or has no `file` field
pub async fn read_file_field(mut multipart: Multipart) -> Result<FileUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
        let bytes = field.bytes().await?;

        return Ok(FileUpload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field `{}`",
        FILE_FIELD
    )))
}
