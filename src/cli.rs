use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: image_upload <file_path> <X-Token> <parent_id>";

/// Command-line arguments: three positional values, anything after them ignored.
///
/// Values may start with `-` (a parent id of `-1`, a token like `-abc`);
/// only `--help`, `--version` and their short forms are read as flags.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "image_upload",
    version,
    about = "Upload a local image to the files manager API"
)]
pub struct Args {
    /// Path to the image file to upload
    #[arg(allow_hyphen_values = true)]
    pub file_path: PathBuf,

    /// Authentication token sent as the X-Token header
    #[arg(value_name = "X-Token", allow_hyphen_values = true)]
    pub token: String,

    /// Identifier of the destination folder
    #[arg(allow_hyphen_values = true)]
    pub parent_id: String,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}

/// How argument parsing ended when it did not produce [`Args`].
#[derive(Debug)]
pub enum ArgsError {
    /// Fewer than three positional values; print [`USAGE`] and exit 1.
    Usage,
    /// `--help` or `--version`; clap prints and exits itself.
    Info(clap::Error),
}

/// Parses arguments, folding every argument mistake into [`ArgsError::Usage`].
///
/// Extra values after the parent id are collected into [`Args::extra`] and
/// otherwise ignored.
pub fn parse_args<I, T>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Info(e),
        _ => ArgsError::Usage,
    })
}
