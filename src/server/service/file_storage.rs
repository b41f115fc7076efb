//! Local file storage for uploaded images.
//!
//! This module provides the `FileStorageService` which writes uploaded content into the
//! configured upload directory under a freshly generated name. Names are a random UUID
//! followed by the original file's extension, so two uploads never overwrite each other
//! regardless of what the client called the file. The router serves the directory under
//! `/uploads`, which is the prefix of every URL handed out by `public_url`.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use dioxus_logger::tracing;
use uuid::Uuid;

use crate::server::error::{storage::StorageError, AppError};

/// URL prefix under which stored files are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Longest extension carried over from the original file name.
const MAX_EXTENSION_LEN: usize = 16;

/// Writes uploaded files into a single directory.
///
/// Cheap to clone; clones share the same directory path. The service keeps no
/// record of what it wrote: a file stored for a database write that later fails is
/// left on disk.
#[derive(Clone, Debug)]
pub struct FileStorageService {
    upload_dir: Arc<PathBuf>,
}

impl FileStorageService {
    /// Creates a new FileStorageService rooted at `upload_dir`.
    ///
    /// The directory is expected to exist, see `startup::prepare_upload_dir`.
    ///
    /// # Arguments
    /// - `upload_dir` - Directory uploaded files are written to
    ///
    /// # Returns
    /// - `FileStorageService` - New service instance
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: Arc::new(upload_dir.into()),
        }
    }

    /// Stores uploaded content under a newly generated unique file name.
    ///
    /// # Arguments
    /// - `bytes` - File content
    /// - `original_filename` - Client supplied name; only its extension is kept
    ///
    /// # Returns
    /// - `Ok(String)` - The generated file name, relative to the upload directory
    /// - `Err(AppError::StorageErr(Write))` - The file could not be written
    pub async fn store_file(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<String, AppError> {
        let file_name = Self::generate_file_name(original_filename);
        let path = self.upload_dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Stored {} bytes at {}", bytes.len(), path.display());

        Ok(file_name)
    }

    /// Builds the public URL of a stored file.
    ///
    /// # Arguments
    /// - `file_name` - Name returned by `store_file`
    ///
    /// # Returns
    /// - `String` - URL of the form `/uploads/<file_name>`
    pub fn public_url(file_name: &str) -> String {
        format!("{}/{}", UPLOAD_URL_PREFIX, file_name)
    }

    /// Generates a unique file name keeping the original extension.
    ///
    /// The extension is lowercased and dropped when it is empty, too long, or contains
    /// anything but ASCII alphanumerics, so client names can never inject path
    /// separators.
    fn generate_file_name(original_filename: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();

        match Self::sanitized_extension(original_filename) {
            Some(extension) => format!("{}.{}", token, extension),
            None => token,
        }
    }

    fn sanitized_extension(original_filename: &str) -> Option<String> {
        let extension = Path::new(original_filename).extension()?.to_str()?;

        let valid = !extension.is_empty()
            && extension.len() <= MAX_EXTENSION_LEN
            && extension.chars().all(|c| c.is_ascii_alphanumeric());

        valid.then(|| extension.to_ascii_lowercase())
    }
}
