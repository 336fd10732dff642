mod helpers;

use axum::http::Method;
use axum_test::multipart::{MultipartForm, Part};
use helpers::{
    sample_resource, setup_test_app, setup_test_app_with, setup_test_app_with_config, test_config,
    FakeMediaApi,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn video_form(contents: &'static [u8], file_name: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from_static(contents))
        .file_name(file_name.to_string())
        .mime_type("video/mp4");
    MultipartForm::new().add_part("video", part)
}

#[tokio::test]
async fn list_wraps_vendor_payload() {
    let app = setup_test_app();

    let response = app.server.get("/api/videos").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Success",
            "result": { "resources": [sample_resource()] }
        })
    );
    assert_eq!(app.media.list_calls(), 1);
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_route() {
    let app = setup_test_app();

    let response = app.server.get("/api/videos/").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(app.media.list_calls(), 1);
}

#[tokio::test]
async fn list_vendor_failure_is_normalized_to_400() {
    let app = setup_test_app_with(FakeMediaApi::rejecting(401, "Invalid api_key test-key"));

    let response = app.server.get("/api/videos").await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Error",
            "error": { "message": "Invalid api_key test-key", "http_code": 401 }
        })
    );
}

#[tokio::test]
async fn upload_forwards_saved_file_and_cleans_up() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/api/videos")
        .multipart(video_form(b"fake mp4 bytes", "clip.mp4"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Success");
    assert_eq!(body["result"], sample_resource());

    let uploads = app.media.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].contents, b"fake mp4 bytes".to_vec());
    assert_eq!(
        uploads[0].path.extension().and_then(|e| e.to_str()),
        Some("mp4")
    );
    assert!(
        !uploads[0].path.exists(),
        "temporary upload should be removed after the vendor call"
    );
}

#[tokio::test]
async fn upload_vendor_failure_is_normalized_to_400() {
    let app = setup_test_app_with(FakeMediaApi::rejecting(400, "Invalid transformation"));

    let response = app
        .server
        .post("/api/videos")
        .multipart(video_form(b"fake mp4 bytes", "clip.mp4"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Error");
    assert_eq!(body["error"]["message"], "Invalid transformation");
    assert_eq!(body["error"]["http_code"], 400);

    let uploads = app.media.uploads();
    assert_eq!(uploads.len(), 1);
    assert!(!uploads[0].path.exists());
}

#[tokio::test]
async fn upload_without_video_field_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("title", "no file here");

    let response = app.server.post("/api/videos").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Error");
    assert_eq!(
        body["error"]["message"],
        "Invalid form data: No 'video' file provided"
    );
    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn upload_with_non_multipart_body_is_rejected() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/api/videos")
        .json(&json!({ "video": "clip.mp4" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Error");
    assert!(body["error"]["message"].is_string());
    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn upload_with_two_video_fields_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_part(
            "video",
            Part::bytes(bytes::Bytes::from_static(b"one")).file_name("a.mp4"),
        )
        .add_part(
            "video",
            Part::bytes(bytes::Bytes::from_static(b"two")).file_name("b.mp4"),
        );

    let response = app.server.post("/api/videos").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn delete_sends_single_id_batch() {
    let app = setup_test_app();

    let response = app
        .server
        .delete("/api/videos")
        .add_query_param("id", "boomerang-videos/abc123")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Success",
            "result": {
                "deleted": { "boomerang-videos/abc123": "deleted" },
                "partial": false
            }
        })
    );
    assert_eq!(
        app.media.deletes(),
        vec![vec!["boomerang-videos/abc123".to_string()]]
    );
}

#[tokio::test]
async fn delete_without_id_never_reaches_vendor() {
    let app = setup_test_app();

    let response = app.server.delete("/api/videos").await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Error",
            "error": { "message": "id param is required" }
        })
    );
    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn delete_with_empty_id_never_reaches_vendor() {
    let app = setup_test_app();

    let response = app
        .server
        .delete("/api/videos")
        .add_query_param("id", "")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn delete_vendor_failure_is_normalized_to_400() {
    let app = setup_test_app_with(FakeMediaApi::rejecting(404, "Resource not found"));

    let response = app
        .server
        .delete("/api/videos")
        .add_query_param("id", "boomerang-videos/missing")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Resource not found");
    assert_eq!(body["error"]["http_code"], 404);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = setup_test_app();

    for method in [Method::PUT, Method::PATCH] {
        let response = app.server.method(method.clone(), "/api/videos").await;
        assert_eq!(response.status_code(), 405, "{} should be rejected", method);
        let body: Value = response.json();
        assert_eq!(body, json!({ "message": "Method not allowed" }));
    }

    let head = app.server.method(Method::HEAD, "/api/videos").await;
    assert_eq!(head.status_code(), 405);

    assert_eq!(app.media.total_calls(), 0);
}

#[tokio::test]
async fn upload_over_configured_limit_never_reaches_vendor() {
    let mut config = test_config();
    config.server.max_upload_size_bytes = 1024;
    let app = setup_test_app_with_config(config, FakeMediaApi::default());

    static LARGE: [u8; 4096] = [0u8; 4096];
    let response = app
        .server
        .post("/api/videos")
        .multipart(video_form(&LARGE, "clip.mp4"))
        .await;

    // 413 when the length is declared up front, 400 when the limit trips mid-stream.
    let status = response.status_code().as_u16();
    assert!(status == 413 || status == 400, "unexpected status {}", status);
    assert_eq!(app.media.total_calls(), 0);
}
