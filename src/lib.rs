//! Upload a local image to a files manager API.
//!
//! The file is read whole, base64-encoded and sent as one JSON `POST /files`
//! request authenticated by an `X-Token` header.
//!
//! ## Example
//!
//! ```no_run
//! # use image_upload::{report, FilesClient};
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = FilesClient::new("my-token")?;
//! let outcome = client.upload_image("photos/cat.png", "5f1e7d35c7ba06511e683b21").await?;
//! report::write_outcome(&mut std::io::stdout(), &outcome)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod encoder;
pub mod error;
pub mod report;
pub mod types;

pub use client::FilesClient;
pub use encoder::{encode_file, file_name};
pub use error::UploadError;
pub use types::{FileType, UploadOutcome, UploadRequest};
