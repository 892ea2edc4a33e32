//! Job posting page handler.
//!
//! Handles `GET /recrutements/{id}`, or `GET /recrutements/{id}.json` for
//! the typed record.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::{FetchError, PreviewError};
use crate::model::JobId;
use crate::render::{self, PageContext};
use crate::state::AppState;
use crate::view::JobPostingView;

/// Cache-Control for rendered postings: short browser TTL, slightly longer
/// at the CDN so link-preview crawlers don't hammer the CMS.
const READY_CACHE_CONTROL: &str = "public, max-age=60, s-maxage=300, stale-while-revalidate=60";

/// Handle a job posting page request.
///
/// 1. Detects `.json` suffix for JSON API responses
/// 2. Validates the identifier
/// 3. Loads the posting through a [`JobPostingView`]
/// 4. Renders the resulting view state with security/cache headers
pub async fn posting_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, PreviewError> {
    let raw_id = raw_id.trim();

    if let Some(bare) = raw_id.strip_suffix(".json") {
        return super::json::json_handler_inner(&state, bare).await;
    }

    let id = JobId::parse(raw_id)
        .ok_or_else(|| PreviewError::InvalidIdentifier(raw_id.to_string()))?;

    let mut view = JobPostingView::new();
    let ticket = view
        .set_id(id.clone())
        .ok_or_else(|| anyhow::anyhow!("fresh view did not issue a load ticket"))?;

    let result = state.cms.fetch_job_posting(ticket.id()).await;
    let status = result
        .as_ref()
        .err()
        .map_or(StatusCode::OK, FetchError::status_code);
    view.complete(ticket, result);

    let ctx = PageContext {
        base_url: &state.config.base_url,
        site_name: &state.config.site_name,
        listing_path: &state.config.listing_path,
        page_url: page_url(&state.config.base_url, &id),
    };

    let html = render::render_view(view.state(), &state.cms, &ctx).into_string();

    tracing::debug!(id = %id, status = status.as_u16(), "rendered job posting page");

    Ok(build_response(status, html))
}

/// Absolute public URL of a posting page.
pub fn page_url(base_url: &str, id: &JobId) -> String {
    format!("{base_url}/recrutements/{id}")
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(status: StatusCode, html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    if status.is_success() {
        // ETag (xxHash of content)
        let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
        let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
        if let Ok(val) = HeaderValue::from_str(&etag) {
            headers.insert(header::ETAG, val);
        }
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(READY_CACHE_CONTROL),
        );
    } else {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    (status, headers, html).into_response()
}
