//! JSON endpoint for the typed posting record.
//!
//! Serves `GET /recrutements/{id}.json` for programmatic consumers.
//!
//! Format:
//! ```json
//! {
//!   "posting": { "id": "42", "job_title": "...", "contract_type": null, ... },
//!   "image_url": "https://cms.example.com/uploads/medium_x.jpg",
//!   "page_url": "https://www.example.com/recrutements/42"
//! }
//! ```

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::PreviewError;
use crate::model::JobId;
use crate::state::AppState;
use crate::view::resolve_image_url;

/// Inner handler called from the posting handler when `.json` suffix is detected.
pub async fn json_handler_inner(state: &AppState, raw_id: &str) -> Result<Response, PreviewError> {
    let id = JobId::parse(raw_id)
        .ok_or_else(|| PreviewError::InvalidIdentifier(raw_id.to_string()))?;

    let posting = state.cms.fetch_job_posting(&id).await?;
    let image = resolve_image_url(&posting, &state.cms);

    let json_body = serde_json::json!({
        "posting": posting,
        "image_url": image.absolute(&state.config.base_url),
        "page_url": super::posting::page_url(&state.config.base_url, &id),
    });

    let json_string =
        serde_json::to_string_pretty(&json_body).map_err(|e| PreviewError::Internal(e.into()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=60"),
    );

    Ok((StatusCode::OK, headers, json_string).into_response())
}
