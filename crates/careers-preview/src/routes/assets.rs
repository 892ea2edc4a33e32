//! Static assets bundled into the binary.

use axum::http::header;
use axum::response::IntoResponse;

use crate::share::SHARE_JS;

/// Placeholder shown when a posting has no photo.
const PLACEHOLDER_SVG: &str = include_str!("../../assets/placeholder.svg");

const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";

/// `GET /static/share.js`
pub async fn share_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        SHARE_JS,
    )
}

/// `GET /static/placeholder.svg`
pub async fn placeholder_svg() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        PLACEHOLDER_SVG,
    )
}
