//! Media client for the vendor API.
//!
//! [`MediaApi`] is the seam the proxy server and the CLI program against;
//! [`CloudinaryClient`] is the HTTP implementation. Every call is single-shot:
//! a failure is returned to the caller as-is, never retried.

pub mod cloudinary;
pub mod signing;

use async_trait::async_trait;
use boomerang_core::{DeleteResult, MediaError, MediaResource, ResourceList};
use bytes::Bytes;
use std::path::Path;

pub use cloudinary::CloudinaryClient;

#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Video resources stored under the boomerang folder.
    async fn list_uploads(&self) -> Result<ResourceList, MediaError>;

    /// Upload a saved clip and have the vendor apply the boomerang recipe.
    async fn upload_and_transform(&self, path: &Path) -> Result<MediaResource, MediaError>;

    /// Delete every id in one batch. `ids` must not be empty.
    async fn delete_uploads(&self, ids: &[String]) -> Result<DeleteResult, MediaError>;

    /// Fetch delivered bytes from a CDN URL.
    async fn download(&self, url: &str) -> Result<Bytes, MediaError>;
}
