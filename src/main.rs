use anyhow::Context;
use image_upload::cli::{parse_args, ArgsError, USAGE};
use image_upload::{report, FilesClient};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the upload report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(ArgsError::Info(e)) => e.exit(),
        Err(ArgsError::Usage) => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    let client = FilesClient::new(&args.token)?;

    let result = client.upload_image(&args.file_path, &args.parent_id).await;

    let mut stdout = io::stdout().lock();
    match result {
        Ok(outcome) => report::write_outcome(&mut stdout, &outcome)?,
        Err(e) if e.is_transport() => report::write_transport_error(&mut stdout, &e)?,
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to upload {}", args.file_path.display())
            })
        }
    }

    Ok(())
}
