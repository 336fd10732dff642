//! The proxy route: `/api/videos`, dispatched on method.
//!
//! Each request is independent. A vendor failure is not retried; it is returned to
//! the caller as a 400 together with every other kind of failure.

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::{method_not_allowed_response, success, MessageResponse};
use crate::state::AppState;
use crate::utils::upload::save_video_part;
use axum::{
    extract::{multipart::MultipartRejection, rejection::QueryRejection, Multipart, Query, State},
    response::Response,
};
use boomerang_core::MediaError;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "Vendor resource list wrapped as {message: \"Success\", result}"),
        (status = 400, description = "Vendor or transport failure", body = ErrorResponse)
    )
)]
pub async fn list_videos(State(state): State<Arc<AppState>>) -> Result<Response, HttpAppError> {
    let result = state.media.list_uploads().await?;
    Ok(success(result))
}

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Field `video`: one .mp4 file"),
    responses(
        (status = 200, description = "Vendor resource descriptor wrapped as {message: \"Success\", result}"),
        (status = 400, description = "Malformed form, missing video, or vendor failure", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    let upload = save_video_part(multipart?).await?;
    // `upload` stays alive until the vendor call finishes; dropping it removes the file.
    let result = state.media.upload_and_transform(upload.path()).await?;
    Ok(success(result))
}

#[utoipa::path(
    delete,
    path = "/api/videos",
    tag = "videos",
    params(
        ("id" = String, Query, description = "Vendor public id, e.g. boomerang-videos/abc123")
    ),
    responses(
        (status = 200, description = "Vendor deletion status wrapped as {message: \"Success\", result}"),
        (status = 400, description = "Missing id or vendor failure", body = ErrorResponse)
    )
)]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Response, HttpAppError> {
    let Query(query) = query?;
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| MediaError::validation("id param is required"))?;

    let result = state.media.delete_uploads(&[id]).await?;
    Ok(success(result))
}

#[utoipa::path(
    put,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 405, description = "Any method other than GET, POST or DELETE", body = MessageResponse)
    )
)]
pub async fn method_not_allowed() -> Response {
    method_not_allowed_response()
}
