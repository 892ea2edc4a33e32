//! Route definitions for the careers service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /static/share.js` - Share/back button script
//! - `GET /static/placeholder.svg` - Placeholder posting image
//! - `GET /recrutements/{id}` - Posting page (or `.json` for the record)

mod assets;
mod health;
pub mod json;
pub mod posting;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/static/share.js", get(assets::share_js))
        .route("/static/placeholder.svg", get(assets::placeholder_svg))
        .route("/recrutements/{id}", get(posting::posting_handler))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Link-preview crawlers must be able to fetch posting pages.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::fixtures;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(backend_url: &str) -> Router {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            backend_url: backend_url.to_string(),
            base_url: "https://www.example.com".to_string(),
            site_name: "Motin SAS".to_string(),
            listing_path: "/recrutements".to_string(),
        };
        router(AppState::new(config).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, header::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn backend_with(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/recrutements/42"))
            .and(query_param("populate", "photo"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn posting_page_ready() {
        let server = backend_with(200, fixtures::posting_json(fixtures::medium_photo())).await;
        let (status, headers, body) = get(app(&server.uri()), "/recrutements/42").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert!(body.contains("Conducteur de travaux"));
        assert!(body.contains(&format!(
            r#"<meta property="og:image" content="{}/uploads/medium_chantier.jpg">"#,
            server.uri()
        )));
        assert!(body.contains(
            r#"<meta property="og:url" content="https://www.example.com/recrutements/42">"#
        ));
    }

    #[tokio::test]
    async fn posting_page_backend_error() {
        let server = backend_with(500, serde_json::json!({ "error": "boom" })).await;
        let (status, headers, body) = get(app(&server.uri()), "/recrutements/42").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
        assert!(body.contains("Error loading job postings"));
        assert!(!body.contains("boom"));
        assert!(!body.contains("posting-content"));
    }

    #[tokio::test]
    async fn posting_page_not_found() {
        let server = backend_with(
            404,
            serde_json::json!({
                "data": null,
                "error": { "status": 404, "name": "NotFoundError", "message": "Not Found" }
            }),
        )
        .await;
        let (status, _, body) = get(app(&server.uri()), "/recrutements/42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Error loading job postings"));
    }

    #[tokio::test]
    async fn posting_page_invalid_identifier() {
        let server = MockServer::start().await;
        let (status, _, body) = get(app(&server.uri()), "/recrutements/a%3Bb").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Error loading job postings"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn posting_json() {
        let server = backend_with(200, fixtures::posting_json(fixtures::no_photo())).await;
        let (status, headers, body) = get(app(&server.uri()), "/recrutements/42.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["posting"]["id"], "42");
        assert_eq!(value["posting"]["job_title"], "Conducteur de travaux");
        assert_eq!(
            value["image_url"],
            "https://www.example.com/static/placeholder.svg"
        );
        assert_eq!(
            value["page_url"],
            "https://www.example.com/recrutements/42"
        );
    }

    #[tokio::test]
    async fn health() {
        let (status, _, body) = get(app("http://cms.invalid"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "careers-preview");
        assert_eq!(value["backend"], "http://cms.invalid");
    }

    #[tokio::test]
    async fn static_assets() {
        let (status, headers, body) = get(app("http://cms.invalid"), "/static/share.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/javascript"));
        assert!(body.contains("navigator.share"));

        let (status, headers, body) =
            get(app("http://cms.invalid"), "/static/placeholder.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
        assert!(body.starts_with("<svg"));
    }

    #[tokio::test]
    async fn robots() {
        let (status, _, body) = get(app("http://cms.invalid"), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Allow: /"));
    }
}
