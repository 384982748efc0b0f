//! Human-readable rendering of upload results.
//!
//! Everything here writes to a caller-supplied writer; the binary passes
//! standard output.

use crate::error::UploadError;
use crate::types::UploadOutcome;
use std::error::Error;
use std::io::{self, Write};

pub const SUCCESS_MESSAGE: &str = "Image uploaded successfully.";

/// Writes the report for a request the server answered.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &UploadOutcome) -> io::Result<()> {
    match outcome {
        UploadOutcome::Uploaded { body } => {
            writeln!(out, "{}", SUCCESS_MESSAGE)?;
            writeln!(out, "Response: {}", body)
        }
        UploadOutcome::Rejected { status, body } => {
            writeln!(
                out,
                "Failed to upload image. Status code: {}",
                status.as_u16()
            )?;
            writeln!(out, "Error: {}", body)
        }
    }
}

/// Writes the report for a request that never got an answer.
///
/// The whole source chain is printed, so the underlying cause (a refused
/// connection, a failed DNS lookup) shows up after the request URL.
pub fn write_transport_error<W: Write>(out: &mut W, error: &UploadError) -> io::Result<()> {
    write!(out, "An error occurred while making the request: {}", error)?;
    let mut source = error.source();
    while let Some(cause) = source {
        write!(out, ": {}", cause)?;
        source = cause.source();
    }
    writeln!(out)
}
