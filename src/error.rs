#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to parse API response: {0}")]
    ResponseParseFailed(#[from] serde_json::Error),
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("X-Token cannot be sent as a header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl UploadError {
    /// Whether the error happened while talking to the server.
    ///
    /// Every network-level failure falls in this class; the caller reports it
    /// and carries on. All other variants are fatal.
    pub fn is_transport(&self) -> bool {
        matches!(self, UploadError::RequestFailed(_))
    }
}
