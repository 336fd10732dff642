//! Application state shared by every handler.
//!
//! Nothing in here changes after startup; requests never coordinate with each other.

use boomerang_core::Config;
use boomerang_media::MediaApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media: Arc<dyn MediaApi>,
}

impl AppState {
    pub fn new(config: Config, media: Arc<dyn MediaApi>) -> Self {
        Self { config, media }
    }
}
