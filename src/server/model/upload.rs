/// A file received through a multipart upload, held in memory.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Name supplied by the client; only its extension is kept.
    pub file_name: String,
    pub bytes: Vec<u8>,
}
