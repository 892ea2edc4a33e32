//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8081").
    pub bind_addr: String,

    /// Base URL of the headless CMS backend (e.g., "https://cms.motin.fr").
    /// Relative upload URLs returned by the CMS are resolved against it.
    pub backend_url: String,

    /// Public base URL of this service (used in OG tags and canonical URLs).
    pub base_url: String,

    /// Site name shown in OG tags and page titles.
    pub site_name: String,

    /// Path of the job listing page the back action falls back to.
    pub listing_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional (all have defaults for local development):
    /// - `CAREERS_BIND_ADDR`: Server bind address (default: "0.0.0.0:8081")
    /// - `CAREERS_BACKEND_URL`: CMS base URL (default: "http://localhost:1337")
    /// - `CAREERS_BASE_URL`: Public base URL for links/OG tags (default: "http://localhost:8081")
    /// - `CAREERS_SITE_NAME`: Site name (default: "Motin SAS")
    /// - `CAREERS_LISTING_PATH`: Listing page path (default: "/recrutements")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("CAREERS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let backend_url = std::env::var("CAREERS_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:1337".to_string())
            .trim_end_matches('/')
            .to_string();

        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            anyhow::bail!("CAREERS_BACKEND_URL must be an http(s) URL, got '{backend_url}'");
        }

        let base_url = std::env::var("CAREERS_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("CAREERS_SITE_NAME").unwrap_or_else(|_| "Motin SAS".to_string());

        let listing_path = std::env::var("CAREERS_LISTING_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "/recrutements".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            backend_url = %backend_url,
            base_url = %base_url,
            site_name = %site_name,
            listing_path = %listing_path,
            "careers configuration loaded"
        );

        Ok(Self {
            bind_addr,
            backend_url,
            base_url,
            site_name,
            listing_path,
        })
    }
}
