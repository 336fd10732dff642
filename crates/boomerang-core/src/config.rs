//! Configuration module
//!
//! Configuration is read once at startup (after loading `.env` through dotenvy),
//! validated, and then handed explicitly to the server and the media client.
//! Nothing reads the process environment after that point.

use std::env;
use std::fmt;

use crate::constants::DEFAULT_API_BASE;

// Common constants
const SERVER_PORT: u16 = 3000;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const MEDIA_API_TIMEOUT_SECS: u64 = 120;

/// HTTP server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub max_upload_size_bytes: usize,
    pub environment: String,
}

/// Vendor credentials and endpoint.
#[derive(Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub media: MediaConfig,
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, anyhow::Error> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} must be set", key))
}

fn environment_name(lookup: &impl Fn(&str) -> Option<String>) -> String {
    lookup("ENVIRONMENT")
        .or_else(|| lookup("APP_ENV"))
        .unwrap_or_else(|| "development".to_string())
}

impl MediaConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let config = MediaConfig {
            cloud_name: required(&lookup, "CLOUD_NAME")?,
            api_key: required(&lookup, "API_KEY")?,
            api_secret: required(&lookup, "API_SECRET")?,
            api_base: lookup("CLOUDINARY_API_BASE")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: match lookup("MEDIA_API_TIMEOUT_SECS") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    anyhow::anyhow!("MEDIA_API_TIMEOUT_SECS must be a valid number")
                })?,
                None => MEDIA_API_TIMEOUT_SECS,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cloud_name.contains('/') {
            return Err(anyhow::anyhow!("CLOUD_NAME must not contain '/'"));
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "CLOUDINARY_API_BASE must be an http(s) URL"
            ));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("MEDIA_API_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }
}

impl ServerConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let environment = environment_name(&lookup);

        let cors_origins_str = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = lookup("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|| MAX_UPLOAD_SIZE_MB.to_string())
            .trim()
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))?;
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?;

        let config = ServerConfig {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            max_upload_size_bytes,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        Ok(Config {
            server: ServerConfig::from_lookup(&lookup)?,
            media: MediaConfig::from_lookup(&lookup)?,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.server.validate()?;
        self.media.validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.server.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.server.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.server.cors_origins
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.server.max_upload_size_bytes
    }

    pub fn environment(&self) -> &str {
        &self.server.environment
    }

    pub fn media(&self) -> &MediaConfig {
        &self.media
    }
}
