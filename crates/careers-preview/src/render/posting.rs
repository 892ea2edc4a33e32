//! Job posting detail page.
//!
//! Regions, top to bottom: back action, title, photo, attribute rows
//! (contract, location), markdown body, contact panel, share action.

use maud::{Markup, PreEscaped, html};

use super::PageContext;
use super::components::{
    ICON_BACK, ICON_CONTACT, ICON_CONTRACT, ICON_PLACE, ICON_SHARE, OpenGraphData,
    attribute_row, metadata, page_shell,
};
use super::markdown::render_markdown;
use crate::model::JobPosting;
use crate::share::ShareData;
use crate::view::ImageSource;

/// Fixed `<meta name="description">` of posting pages.
const PAGE_DESCRIPTION: &str = "Discover our job offers";

/// Alt text used when the CMS photo has none.
const DEFAULT_IMAGE_ALT: &str = "job posting photo";

/// Render the page `<head>` metadata for a posting.
pub fn render_metadata(posting: &JobPosting, image: &ImageSource, ctx: &PageContext<'_>) -> Markup {
    let title = format!("{} - {}", posting.job_title, ctx.site_name);
    let image_url = image.absolute(ctx.base_url);
    let published = posting.created_at.map(|t| t.to_rfc3339());

    let og = OpenGraphData {
        title: &posting.job_title,
        description: &posting.content,
        og_type: "article",
        image: Some(image_url.as_str()),
        url: &ctx.page_url,
        published_time: published.as_deref(),
    };

    metadata(&title, PAGE_DESCRIPTION, &og, ctx.site_name)
}

/// Render a complete posting page.
pub fn render(posting: &JobPosting, image: &ImageSource, ctx: &PageContext<'_>) -> Markup {
    let share = ShareData::for_posting(posting, &ctx.page_url);
    let alt = posting
        .photo
        .as_ref()
        .and_then(|p| p.alternative_text.as_deref())
        .unwrap_or(DEFAULT_IMAGE_ALT);
    let body_html = render_markdown(&posting.content);

    let body = html! {
        a class="btn back-link" href=(ctx.listing_path) data-back {
            (PreEscaped(ICON_BACK)) "Back"
        }

        div class="layout" {
            article class="posting" {
                h1 class="posting-title" { (posting.job_title) }

                img class="posting-image" src=(image.src()) alt=(alt) loading="lazy";

                @if let Some(contract) = posting.contract_type.as_deref() {
                    (attribute_row("contract", ICON_CONTRACT, "Contract", contract))
                }

                (attribute_row(
                    "location",
                    ICON_PLACE,
                    "Location",
                    posting.job_location.as_deref().unwrap_or_default(),
                ))

                div class="posting-content" {
                    (PreEscaped(body_html))
                }
            }

            aside class="contact-panel" {
                h2 class="contact-title" { "Contact" }
                p class="contact-line" {
                    (PreEscaped(ICON_CONTACT))
                    span {
                        "Contact person: "
                        (posting.contact.as_deref().unwrap_or_default())
                    }
                }
            }
        }

        div class="actions" {
            button class="btn share-btn" type="button"
                data-share-title=(share.title)
                data-share-text=(share.text)
                data-share-url=(share.url) {
                (PreEscaped(ICON_SHARE)) "Share"
            }
        }
    };

    page_shell(render_metadata(posting, image, ctx), body, ctx.site_name, true)
}
