mod common;

use image_upload::report::{write_outcome, write_transport_error, SUCCESS_MESSAGE};
use image_upload::{FilesClient, UploadOutcome, UploadRequest};
use reqwest::StatusCode;
use serde_json::json;
use std::error::Error;
use std::io;

fn render(outcome: &UploadOutcome) -> String {
    let mut out = Vec::new();
    write_outcome(&mut out, outcome).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_uploaded_prints_success_then_body() {
    let text = render(&UploadOutcome::Uploaded {
        body: json!({ "id": "abc" }),
    });

    assert_eq!(text, "Image uploaded successfully.\nResponse: {\"id\":\"abc\"}\n");
}

#[test]
fn test_rejected_prints_status_and_error_without_success() {
    let text = render(&UploadOutcome::Rejected {
        status: StatusCode::BAD_REQUEST,
        body: json!({ "error": "Missing name" }),
    });

    assert_eq!(
        text,
        "Failed to upload image. Status code: 400\nError: {\"error\":\"Missing name\"}\n"
    );
    assert!(!text.contains(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_transport_error_report_names_underlying_cause() {
    let client = FilesClient::new_with_url("secret-token", &common::closed_url()).unwrap();
    let err = client
        .upload(&UploadRequest::image("cat.png", "aGk=", "0"))
        .await
        .unwrap_err();

    let mut out = Vec::new();
    write_transport_error(&mut out, &err).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("An error occurred while making the request: "));

    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause);
        source = cause.source();
    }
    assert!(!causes.is_empty());
    for cause in &causes {
        assert!(text.contains(&format!(": {}", cause)), "missing cause {cause} in {text}");
    }

    let refused = causes
        .iter()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .find(|io_err| io_err.kind() == io::ErrorKind::ConnectionRefused)
        .expect("connection refused in source chain");
    assert!(text.trim_end().ends_with(&refused.to_string()));
}
