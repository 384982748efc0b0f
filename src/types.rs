use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// The kinds of entry the files manager accepts.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// A directory that other entries can name as their parent.
    Folder,
    /// An opaque file.
    File,
    /// An image; the server queues thumbnail generation for these.
    Image,
}

/// The JSON body of a `POST /files` request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// The name the entry is stored under, usually the file's basename.
    pub name: String,
    /// The entry kind.
    #[serde(rename = "type")]
    pub type_: FileType,
    /// Whether the entry is readable without a token.
    pub is_public: bool,
    /// The file contents, base64-encoded.
    pub data: String,
    /// The destination folder, passed through as given.
    pub parent_id: String,
}

impl UploadRequest {
    /// Builds a public image upload.
    pub fn image(
        name: impl Into<String>,
        data: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_: FileType::Image,
            is_public: true,
            data: data.into(),
            parent_id: parent_id.into(),
        }
    }
}

/// What the server said about an upload that reached it.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The server answered `200 OK`.
    Uploaded {
        /// The response body.
        body: Value,
    },
    /// The server answered with any other status.
    Rejected {
        /// The status code returned.
        status: StatusCode,
        /// The error body, typically `{"error": "..."}`.
        body: Value,
    },
}

impl UploadOutcome {
    /// Whether the server accepted the upload with `200 OK`.
    pub fn is_uploaded(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}
