use crate::encoder::{encode_file, file_name};
use crate::error::UploadError;
use crate::types::{UploadOutcome, UploadRequest};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::env;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

const DEFAULT_API_URL: &str = "http://0.0.0.0:5000/";

/// Environment variable that overrides the default `http://0.0.0.0:5000/` base URL.
pub const API_URL_ENV: &str = "FILES_API_URL";

/// The client for the files manager API.
///
/// Every request it sends carries the `X-Token` header it was built with.
#[derive(Clone)]
pub struct FilesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl FilesClient {
    /// Creates a client for the default local endpoint, unless
    /// `FILES_API_URL` is set, in which case that base URL is used instead.
    ///
    /// # Errors
    ///
    /// - `UploadError::InvalidToken` if the token cannot be sent as a header value.
    /// - `UploadError::UrlParseFailed` if `FILES_API_URL` is not a valid URL.
    /// - `UploadError::RequestFailed` if the internal HTTP client fails to build.
    pub fn new(token: &str) -> Result<Self, UploadError> {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new_with_url(token, &base_url)
    }

    /// Creates a client with a custom base URL.
    ///
    /// This is useful for testing or for pointing at a deployed service.
    /// A missing trailing slash is added so that `files` resolves beneath
    /// the given path rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// - `UploadError::InvalidToken` if the token cannot be sent as a header value.
    /// - `UploadError::UrlParseFailed` if `base_url` is invalid.
    /// - `UploadError::RequestFailed` if the internal HTTP client fails to build.
    pub fn new_with_url(token: &str, base_url: &str) -> Result<Self, UploadError> {
        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-token"), token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one upload request.
    ///
    /// Only `200 OK` counts as [`UploadOutcome::Uploaded`]; every other status,
    /// including other 2xx codes, is reported as [`UploadOutcome::Rejected`].
    /// There is no retry.
    ///
    /// # Errors
    ///
    /// - `UploadError::RequestFailed` for any network-level failure.
    /// - `UploadError::ResponseParseFailed` if the response body is not JSON.
    pub async fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome, UploadError> {
        let url = self.base_url.join("files")?;
        debug!(%url, name = %request.name, parent_id = %request.parent_id, "sending upload");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "upload request failed"))?;

        let status = response.status();
        info!(%status, "upload answered");

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if status == StatusCode::OK {
            Ok(UploadOutcome::Uploaded { body })
        } else {
            Ok(UploadOutcome::Rejected { status, body })
        }
    }

    /// Reads a local image and uploads it as a public image under `parent_id`.
    ///
    /// The file is read in full before anything is sent, so a missing file
    /// fails without touching the network.
    ///
    /// # Arguments
    ///
    /// * `image_path` - The path to the local image file to upload.
    /// * `parent_id` - The destination folder, passed through unvalidated.
    ///
    /// # Errors
    ///
    /// - `UploadError::IoError` if the file cannot be read.
    /// - Any error of [`FilesClient::upload`].
    pub async fn upload_image<P: AsRef<Path>>(
        &self,
        image_path: P,
        parent_id: &str,
    ) -> Result<UploadOutcome, UploadError> {
        let image_path = image_path.as_ref();
        let data = encode_file(image_path).await?;
        let request = UploadRequest::image(file_name(image_path), data, parent_id);
        self.upload(&request).await
    }
}
