//! Fixed vendor-side placement and filtering values.

/// Folder (and list prefix) every boomerang clip is stored under.
pub const UPLOAD_FOLDER: &str = "boomerang-videos/";

/// Container formats the vendor is told to accept on upload.
pub const ALLOWED_FORMATS: &[&str] = &["mp4"];

/// Resource type used when uploading; the vendor detects the actual type.
pub const UPLOAD_RESOURCE_TYPE: &str = "auto";

/// Resource type used when listing and deleting.
pub const VIDEO_RESOURCE_TYPE: &str = "video";

/// Delivery type of stored assets.
pub const DELIVERY_TYPE: &str = "upload";

/// Default vendor API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
