//! Headless CMS client.
//!
//! One read per page: `GET {backend}/api/recrutements/{id}?populate=photo`.
//! The response is decoded into a [`JobPosting`] before it leaves this module.

use crate::error::FetchError;
use crate::model::{self, JobId, JobPosting};

/// Collection path of job postings on the backend.
const POSTINGS_PATH: &str = "/api/recrutements";

/// Client for the job postings collection of the CMS.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    backend_url: String,
}

impl CmsClient {
    /// Create a client for the backend at `backend_url` (no trailing slash).
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url)
    }

    pub fn with_client(http: reqwest::Client, backend_url: impl Into<String>) -> Self {
        Self {
            http,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// URL of a single posting with its photo relation populated.
    pub fn posting_url(&self, id: &JobId) -> String {
        format!("{}{POSTINGS_PATH}/{id}?populate=photo", self.backend_url)
    }

    /// Fetch and decode one job posting.
    pub async fn fetch_job_posting(&self, id: &JobId) -> Result<JobPosting, FetchError> {
        let url = self.posting_url(id);
        tracing::debug!(id = %id, url = %url, "fetching job posting");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let posting = model::decode_posting(id, &body)?;

        tracing::debug!(id = %id, title = %posting.job_title, "job posting loaded");
        Ok(posting)
    }

    /// Resolve a CMS upload URL to an absolute URL.
    ///
    /// Strapi's local upload provider returns paths like `/uploads/x.jpg`;
    /// cloud providers return absolute URLs, which are kept as-is.
    /// Protocol-relative URLs (`//cdn/x.jpg`) take the backend's scheme.
    pub fn absolute_media_url(&self, url: &str) -> String {
        if url.starts_with("https://") || url.starts_with("http://") {
            url.to_string()
        } else if url.starts_with("//") {
            let scheme = self
                .backend_url
                .split_once("://")
                .map_or("https", |(scheme, _)| scheme);
            format!("{scheme}:{url}")
        } else if url.starts_with('/') {
            format!("{}{url}", self.backend_url)
        } else {
            format!("{}/{url}", self.backend_url)
        }
    }
}
