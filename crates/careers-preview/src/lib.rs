//! Careers Preview - server-rendered job posting pages.
//!
//! This crate provides a small HTTP server that renders the detail page of
//! a job posting published in a headless CMS, with Open Graph tags so that
//! shared links get a proper preview card.
//!
//! # Architecture
//!
//! - **Fetch**: one read per page from the CMS (`cms`), decoded into typed
//!   records at the boundary (`model`)
//! - **View**: explicit loading/ready/error state bound to the route
//!   identifier (`view`)
//! - **Render**: HTML with Open Graph tags using maud (`render`)
//! - **Share**: Web Share API with an unsupported-browser fallback (`share`)
//!
//! # URL Pattern
//!
//! ```text
//! GET /recrutements/{id}
//! GET /recrutements/{id}.json
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Raw HTML in markdown bodies is rendered as text
//! - Content-Security-Policy only allows the bundled share script
//! - X-Frame-Options: DENY prevents clickjacking

pub mod cms;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod routes;
pub mod share;
pub mod state;
pub mod view;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
