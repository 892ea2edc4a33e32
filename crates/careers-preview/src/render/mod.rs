//! HTML rendering for job posting pages.
//!
//! One page per [`ViewState`]: the posting itself, a loading indicator, or
//! the fixed error message.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod components;
pub mod markdown;
pub mod posting;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::cms::CmsClient;
use crate::view::{ViewState, resolve_image_url};

/// Per-request values the renderers need besides the posting.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Public base URL of this service.
    pub base_url: &'a str,
    pub site_name: &'a str,
    /// Where the back action leads without browser history.
    pub listing_path: &'a str,
    /// Absolute URL of the page being rendered.
    pub page_url: String,
}

/// Render whatever the view currently holds.
pub fn render_view(state: &ViewState, cms: &CmsClient, ctx: &PageContext<'_>) -> Markup {
    match state {
        ViewState::Loading => loading_page(ctx.site_name),
        ViewState::Ready(record) => {
            let image = resolve_image_url(record, cms);
            posting::render(record, &image, ctx)
        }
        ViewState::Error(message) => error_page(message),
    }
}

/// Loading indicator page.
pub fn loading_page(site_name: &str) -> Markup {
    let head = html! {
        title { (site_name) }
        meta name="robots" content="noindex";
    };
    let body = html! {
        div class="loading-page" {
            div class="spinner" role="progressbar" aria-busy="true" aria-label="Loading" {}
        }
    };
    components::page_shell(head, body, site_name, false)
}

/// Error page showing `message` only.
pub fn error_page(message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Error" }
                meta name="robots" content="noindex";
                style { (PreEscaped(components::ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (message) }
                }
            }
        }
    }
}
