use axum::response::Html;

const GALLERY_HTML: &str = include_str!("../../static/index.html");

/// Upload form and clip gallery.
pub async fn gallery() -> Html<&'static str> {
    Html(GALLERY_HTML)
}
