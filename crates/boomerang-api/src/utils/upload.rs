//! Multipart handling for the upload route

use axum::extract::Multipart;
use boomerang_core::MediaError;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Form field the gallery posts the clip under.
pub const VIDEO_FIELD: &str = "video";

const TEMP_PREFIX: &str = "boomerang-";
const DEFAULT_EXTENSION: &str = "mp4";

/// Extension of the client-side file name, so the saved copy keeps it.
fn extension_of(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Stream the `video` part of the form into a temporary file.
/// Only one field named "video" is accepted; other fields are ignored.
///
/// The file is removed when the returned handle is dropped.
pub async fn save_video_part(mut multipart: Multipart) -> Result<NamedTempFile, MediaError> {
    let mut saved: Option<NamedTempFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaError::Multipart(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }
        if saved.is_some() {
            return Err(MediaError::Multipart(
                "Multiple video fields are not allowed; send exactly one field named 'video'"
                    .to_string(),
            ));
        }

        let extension = extension_of(field.file_name());
        let temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&format!(".{}", extension))
            .tempfile()?;

        let mut file = tokio::fs::File::create(temp.path()).await?;
        let mut written = 0usize;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| MediaError::Multipart(format!("Failed to read file data: {}", e)))?
        {
            written += chunk.len();
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        tracing::debug!(
            path = %temp.path().display(),
            bytes = written,
            "Saved uploaded video part"
        );
        saved = Some(temp);
    }

    saved.ok_or_else(|| MediaError::Multipart(format!("No '{}' file provided", VIDEO_FIELD)))
}
