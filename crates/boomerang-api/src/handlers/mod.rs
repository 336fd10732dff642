pub mod health;
pub mod pages;
pub mod videos;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const SUCCESS_MESSAGE: &str = "Success";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// `{"message": "Success", "result": <vendor payload>}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub message: &'static str,
    pub result: T,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub fn success<T: Serialize>(result: T) -> Response {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            message: SUCCESS_MESSAGE,
            result,
        }),
    )
        .into_response()
}

pub fn method_not_allowed_response() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse {
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
