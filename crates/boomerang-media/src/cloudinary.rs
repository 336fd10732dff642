//! HTTP implementation of [`MediaApi`] against the Cloudinary upload and admin APIs.
//!
//! Uploads are signed with the API secret; admin calls (list, delete) use HTTP basic
//! auth. The base URL comes from [`MediaConfig`] so tests can point it at a mock server.

use async_trait::async_trait;
use boomerang_core::constants::{
    ALLOWED_FORMATS, DELIVERY_TYPE, UPLOAD_FOLDER, UPLOAD_RESOURCE_TYPE, VIDEO_RESOURCE_TYPE,
};
use boomerang_core::{
    DeleteResult, MediaConfig, MediaError, MediaResource, ResourceList, Transformation,
};
use bytes::Bytes;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::Path;
use std::time::Duration;

use crate::signing::{sign_params, SIGNATURE_ALGORITHM};
use crate::MediaApi;

const API_VERSION_PATH: &str = "v1_1";

// Vendor error body: {"error": {"message": "..."}}
#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    error: VendorErrorDetail,
}

#[derive(Debug, Deserialize)]
struct VendorErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: MediaConfig,
}

impl Debug for CloudinaryClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CloudinaryClient")
            .field("cloud_name", &self.config.cloud_name)
            .field("api_base", &self.config.api_base)
            .finish()
    }
}

fn transport_error(err: reqwest::Error) -> MediaError {
    MediaError::Transport(err.to_string())
}

fn vendor_message(body: &str) -> String {
    match serde_json::from_str::<VendorErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Turn a non-success vendor response into `MediaError::Vendor`.
async fn check_status(response: Response) -> Result<Response, MediaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(MediaError::Vendor {
        status: status.as_u16(),
        message: vendor_message(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, MediaError> {
    let body = response.bytes().await.map_err(transport_error)?;
    Ok(serde_json::from_slice(&body)?)
}

impl CloudinaryClient {
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MediaError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.api_base, API_VERSION_PATH, self.config.cloud_name, path
        )
    }

    fn admin_resources_endpoint(&self) -> String {
        self.endpoint(&format!("resources/{}/{}", VIDEO_RESOURCE_TYPE, DELIVERY_TYPE))
    }

    /// Signed upload parameters: folder placement, format allowlist and the boomerang recipe.
    fn upload_params(&self, timestamp: i64) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("allowed_formats", ALLOWED_FORMATS.join(",")),
            ("folder", UPLOAD_FOLDER.to_string()),
            ("timestamp", timestamp.to_string()),
            ("transformation", Transformation::boomerang().to_wire()),
        ])
    }

    fn upload_form(&self, file_name: String, data: Vec<u8>, timestamp: i64) -> Form {
        let params = self.upload_params(timestamp);
        let signature = sign_params(&params, &self.config.api_secret);

        let mut form = Form::new().part("file", Part::bytes(data).file_name(file_name));
        for (name, value) in params {
            form = form.text(name, value);
        }

        form.text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM)
    }
}

#[async_trait]
impl MediaApi for CloudinaryClient {
    async fn list_uploads(&self) -> Result<ResourceList, MediaError> {
        let response = self
            .http
            .get(self.admin_resources_endpoint())
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&[("prefix", UPLOAD_FOLDER)])
            .send()
            .await
            .map_err(transport_error)?;

        let list: ResourceList = decode(check_status(response).await?).await?;
        tracing::debug!(count = list.resources.len(), "Listed boomerang uploads");
        Ok(list)
    }

    async fn upload_and_transform(&self, path: &Path) -> Result<MediaResource, MediaError> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video.mp4")
            .to_string();
        tracing::debug!(
            file_name = %file_name,
            size = data.len(),
            "Uploading clip for boomerang transformation"
        );

        let form = self.upload_form(file_name, data, Utc::now().timestamp());
        let response = self
            .http
            .post(self.endpoint(&format!("{}/upload", UPLOAD_RESOURCE_TYPE)))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let resource: MediaResource = decode(check_status(response).await?).await?;
        tracing::info!(public_id = %resource.public_id, "Vendor accepted upload");
        Ok(resource)
    }

    async fn delete_uploads(&self, ids: &[String]) -> Result<DeleteResult, MediaError> {
        if ids.is_empty() {
            return Err(MediaError::validation("at least one id is required"));
        }

        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("public_ids[]", id.as_str())).collect();
        let response = self
            .http
            .delete(self.admin_resources_endpoint())
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let result: DeleteResult = decode(check_status(response).await?).await?;
        tracing::info!(ids = ?ids, "Vendor processed delete request");
        Ok(result)
    }

    async fn download(&self, url: &str) -> Result<Bytes, MediaError> {
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        check_status(response)
            .await?
            .bytes()
            .await
            .map_err(transport_error)
    }
}
