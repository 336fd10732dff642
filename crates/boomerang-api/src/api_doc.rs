//! OpenAPI documentation for the proxy route.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boomerang API",
        version = "0.1.0",
        description = "Upload an MP4 clip, have the media vendor trim it to 2 seconds and turn it into a 3x looping boomerang, list processed clips, and delete them. Every vendor payload is returned verbatim under `result`."
    ),
    paths(
        handlers::videos::list_videos,
        handlers::videos::upload_video,
        handlers::videos::delete_video,
        handlers::videos::method_not_allowed,
    ),
    components(schemas(
        error::ErrorResponse,
        error::ErrorBody,
        handlers::MessageResponse,
    )),
    tags(
        (name = "videos", description = "Boomerang clip management")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
