//! Test helpers: build AppState and router for integration tests around an
//! in-memory media backend.
//!
//! Run from workspace root: `cargo test -p boomerang-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use boomerang_api::setup::routes;
use boomerang_api::AppState;
use boomerang_core::{
    Config, DeleteResult, MediaConfig, MediaError, MediaResource, ResourceList, ServerConfig,
};
use boomerang_media::MediaApi;
use bytes::Bytes;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// What the fake saw when `upload_and_transform` was called.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

#[derive(Debug, Default)]
struct Calls {
    lists: usize,
    uploads: Vec<RecordedUpload>,
    deletes: Vec<Vec<String>>,
}

/// Records every call. When `rejection` is set, every operation fails the way
/// a vendor 4xx would.
#[derive(Default)]
pub struct FakeMediaApi {
    calls: Mutex<Calls>,
    rejection: Option<(u16, String)>,
}

impl FakeMediaApi {
    pub fn rejecting(status: u16, message: &str) -> Self {
        Self {
            rejection: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), MediaError> {
        match &self.rejection {
            Some((status, message)) => Err(MediaError::Vendor {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.calls.lock().unwrap().lists
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.calls.lock().unwrap().uploads.clone()
    }

    pub fn deletes(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().deletes.clone()
    }

    pub fn total_calls(&self) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.lists + calls.uploads.len() + calls.deletes.len()
    }
}

pub fn sample_resource() -> serde_json::Value {
    json!({
        "asset_id": "0f3c0a7d9f1e",
        "public_id": "boomerang-videos/abc123",
        "format": "mp4",
        "resource_type": "video",
        "bytes": 48213,
        "secure_url": "https://res.cloudinary.com/demo/video/upload/v1/boomerang-videos/abc123.mp4"
    })
}

#[async_trait]
impl MediaApi for FakeMediaApi {
    async fn list_uploads(&self) -> Result<ResourceList, MediaError> {
        self.calls.lock().unwrap().lists += 1;
        self.check()?;
        Ok(serde_json::from_value(json!({ "resources": [sample_resource()] }))?)
    }

    async fn upload_and_transform(&self, path: &Path) -> Result<MediaResource, MediaError> {
        let contents = std::fs::read(path)?;
        self.calls.lock().unwrap().uploads.push(RecordedUpload {
            path: path.to_path_buf(),
            contents,
        });
        self.check()?;
        Ok(serde_json::from_value(sample_resource())?)
    }

    async fn delete_uploads(&self, ids: &[String]) -> Result<DeleteResult, MediaError> {
        self.calls.lock().unwrap().deletes.push(ids.to_vec());
        self.check()?;
        let deleted: serde_json::Map<String, serde_json::Value> = ids
            .iter()
            .map(|id| (id.clone(), json!("deleted")))
            .collect();
        Ok(serde_json::from_value(json!({ "deleted": deleted, "partial": false }))?)
    }

    async fn download(&self, _url: &str) -> Result<Bytes, MediaError> {
        self.check()?;
        Ok(Bytes::from_static(b"video"))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            server_port: 3000,
            cors_origins: vec!["*".to_string()],
            max_upload_size_bytes: 10 * 1024 * 1024,
            environment: "test".to_string(),
        },
        media: MediaConfig {
            cloud_name: "demo".to_string(),
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Test application: server plus the fake it talks to.
pub struct TestApp {
    pub server: TestServer,
    pub media: Arc<FakeMediaApi>,
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(FakeMediaApi::default())
}

pub fn setup_test_app_with(media: FakeMediaApi) -> TestApp {
    setup_test_app_with_config(test_config(), media)
}

pub fn setup_test_app_with_config(config: Config, media: FakeMediaApi) -> TestApp {
    let media = Arc::new(media);
    let state = Arc::new(AppState::new(config, media.clone()));
    let app = routes::setup_routes(state).expect("Failed to build routes");
    let server = TestServer::new(app).expect("Failed to create test server");
    TestApp { server, media }
}
