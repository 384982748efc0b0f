use crate::error::UploadError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tokio::fs;

/// Reads a whole file and returns its contents as standard base64 text.
///
/// # Errors
///
/// - `UploadError::IoError` if the file does not exist or cannot be read.
pub async fn encode_file<P: AsRef<Path>>(path: P) -> Result<String, UploadError> {
    let bytes = fs::read(path.as_ref()).await?;
    tracing::debug!(path = %path.as_ref().display(), bytes = bytes.len(), "read file");
    Ok(STANDARD.encode(bytes))
}

/// Returns the name a file is uploaded under: the last component of its path.
///
/// Paths without a final component (such as `..`) are returned unchanged.
pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
