//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cms::CmsClient;
use crate::config::Config;

/// User agent sent to the CMS backend.
const USER_AGENT: &str = concat!("careers-preview/", env!("CARGO_PKG_VERSION"));

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the CMS backend.
    pub cms: CmsClient,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let cms = CmsClient::with_client(http, config.backend_url.clone());

        tracing::info!(backend_url = %cms.backend_url(), "application state initialized");

        Ok(Self {
            cms,
            config: Arc::new(config),
        })
    }
}
