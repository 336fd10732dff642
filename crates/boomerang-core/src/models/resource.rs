//! Vendor payloads.
//!
//! These types name the handful of fields this application reads and carry everything
//! else through `extra`, so a payload re-serializes with the same fields the vendor sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A stored media object as described by the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaResource {
    pub public_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaResource {
    /// Still image shown before playback: the delivery URL with a `.gif` extension.
    pub fn poster_url(&self) -> Option<String> {
        let url = self.secure_url.as_deref()?;
        let (stem, extension) = url.rsplit_once('.')?;
        if extension.contains('/') {
            return None;
        }
        Some(format!("{}.gif", stem))
    }

    /// File name a download of this resource is saved under: `{asset_id}.{format}`.
    pub fn download_file_name(&self) -> String {
        let stem = self.asset_id.clone().unwrap_or_else(|| {
            self.public_id
                .rsplit('/')
                .next()
                .unwrap_or(&self.public_id)
                .to_string()
        });
        let format = self.format.as_deref().unwrap_or("mp4");
        format!("{}.{}", stem, format)
    }
}

/// Result of listing resources under a prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub resources: Vec<MediaResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceList {
    pub fn find(&self, public_id: &str) -> Option<&MediaResource> {
        self.resources.iter().find(|r| r.public_id == public_id)
    }
}

/// Per-id outcome of a batch delete, e.g. `{"boomerang-videos/abc": "deleted"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(default)]
    pub deleted: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
