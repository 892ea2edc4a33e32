//! Shared HTML components used across careers pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Two-column layout on wide screens (posting 70%, contact 30%), stacked
/// on small screens. Material icons via inline SVG.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fff;--fg:#111;--fg2:#555;--fg3:#999;--accent:#c71121;--accent-hover:#a00d1a;--label:#d3d3d3;--border:#d3d3d3}
body{font-family:Roboto,-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center}
main{width:100%;max-width:1200px;flex:1;display:flex;flex-direction:column;align-items:center;margin-top:4rem}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
svg.icon{width:24px;height:24px;fill:currentColor;flex-shrink:0}

.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.5rem 1.1rem;background:var(--accent);color:#fff;border:none;border-radius:4px;font-size:.9rem;font-weight:500;text-transform:uppercase;letter-spacing:.03em;cursor:pointer;transition:background .15s}
.btn:hover{background:var(--accent-hover);text-decoration:none}
.btn svg.icon{width:18px;height:18px}
.back-link{align-self:flex-start;margin:2rem 0 0 2rem}

.layout{display:flex;flex-direction:row;align-items:flex-start;width:100%}
.posting{display:flex;flex-direction:column;padding:1.5rem;width:70%}
.contact-panel{display:flex;flex-direction:column;padding:1.5rem;width:30%}

.posting-title{font-size:2.5rem;font-weight:300;line-height:1.2;margin:0 0 1rem 1rem}
.posting-image{width:100%;height:auto;padding:1rem}

.attr-row{display:flex;align-items:center;margin-left:1rem;border:1px solid var(--border)}
.attr-row+.attr-row{border-top:none}
.attr-label{background:var(--label);padding:1rem;display:flex;align-items:center;gap:.4rem;width:150px;flex-shrink:0}
.attr-value{margin-left:1rem}

.posting-content{margin:1rem 0 0 1rem;font-size:1rem;line-height:1.75}
.posting-content h1,.posting-content h2,.posting-content h3,.posting-content h4{font-weight:500;margin:1.5rem 0 .75rem}
.posting-content p{margin:.75rem 0}
.posting-content ul,.posting-content ol{margin:.75rem 0;padding-left:1.5rem}
.posting-content li{margin:.3rem 0}
.posting-content blockquote{border-left:3px solid var(--border);padding:.5rem 0 .5rem 1rem;margin:.75rem 0;color:var(--fg2)}

.contact-title{font-size:1.75rem;font-weight:400;margin-bottom:1rem}
.contact-line{display:flex;align-items:center;gap:.5rem}
.contact-line svg.icon{color:var(--accent)}

.actions{margin:1rem 0 2rem;display:flex;justify-content:center}

.loading-page{display:flex;align-items:center;justify-content:center;min-height:60vh}
.spinner{width:48px;height:48px;border:4px solid var(--label);border-top-color:var(--accent);border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}

.footer{text-align:center;padding:1rem 0;font-size:.8rem;color:var(--fg3);width:100%}

@media(max-width:600px){
.layout{flex-direction:column}
.posting,.contact-panel{width:100%}
.contact-panel{margin-top:1.5rem}
.posting-title{font-size:2rem}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Roboto,-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fff;color:#111;padding:1rem}
.error-page{text-align:center;max-width:600px}
.error-page h1{font-size:2rem;font-weight:400;color:#c71121}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles, scripts only from this origin (`/static/share.js`),
/// images from this origin or any http(s) host.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'self'; img-src 'self' https: http: data:; form-action 'none'; frame-ancestors 'none'; base-uri 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// OG type (e.g., "article", "website").
    pub og_type: &'a str,
    /// Absolute image URL.
    pub image: Option<&'a str>,
    /// Absolute URL of the page itself.
    pub url: &'a str,
    /// RFC 3339 publish time, for `article:published_time`.
    pub published_time: Option<&'a str>,
}

/// Render the `<head>` metadata block: title, description, canonical link,
/// Open Graph and Twitter Card tags.
pub fn metadata(
    title: &str,
    description: &str,
    og: &OpenGraphData<'_>,
    site_name: &str,
) -> Markup {
    let twitter_card = if og.image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };

    html! {
        title { (title) }
        meta name="description" content=(description);
        link rel="canonical" href=(og.url);

        meta property="og:title" content=(og.title);
        meta property="og:description" content=(og.description);
        meta property="og:url" content=(og.url);
        meta property="og:site_name" content=(site_name);
        meta property="og:type" content=(og.og_type);
        @if let Some(image) = og.image {
            meta property="og:image" content=(image);
        }
        @if let Some(published) = og.published_time {
            meta property="article:published_time" content=(published);
        }

        meta name="twitter:card" content=(twitter_card);
        meta name="twitter:title" content=(og.title);
        meta name="twitter:description" content=(og.description);
        @if let Some(image) = og.image {
            meta name="twitter:image" content=(image);
        }
    }
}

/// Render the full HTML page shell.
///
/// `head` is inserted after the charset/viewport tags; pages that need the
/// share script pass `with_script`.
pub fn page_shell(head: Markup, body_content: Markup, site_name: &str, with_script: bool) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (head)
                style { (PreEscaped(PAGE_CSS)) }
                @if with_script {
                    script src="/static/share.js" defer {}
                }
            }
            body {
                main { (body_content) }
                footer class="footer" { (site_name) }
            }
        }
    }
}

/// Render a labelled attribute row ("Contract", "Location", ...).
pub fn attribute_row(class: &str, icon: &str, label: &str, value: &str) -> Markup {
    html! {
        div class={"attr-row " (class)} {
            div class="attr-label" {
                (PreEscaped(icon))
                span { (label) }
            }
            span class="attr-value" { (value) }
        }
    }
}

// -- Material icon SVGs --

/// Back arrow (Material KeyboardBackspace)
pub const ICON_BACK: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M21 11H6.83l3.58-3.59L9 6l-6 6 6 6 1.41-1.41L6.83 13H21z"/></svg>"#;

/// Place marker (Material Place)
pub const ICON_PLACE: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7m0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5"/></svg>"#;

/// Clipboard (Material Assignment)
pub const ICON_CONTRACT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M19 3h-4.18C14.4 1.84 13.3 1 12 1s-2.4.84-2.82 2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2m-7 0c.55 0 1 .45 1 1s-.45 1-1 1-1-.45-1-1 .45-1 1-1m2 14H7v-2h7zm3-4H7v-2h10zm0-4H7V7h10z"/></svg>"#;

/// Contact card with phone (Material ContactPhone)
pub const ICON_CONTACT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M22 3H2C.9 3 0 3.9 0 5v14c0 1.1.9 2 2 2h20c1.1 0 1.99-.9 1.99-2L24 5c0-1.1-.9-2-2-2M8 6c1.66 0 3 1.34 3 3s-1.34 3-3 3-3-1.34-3-3 1.34-3 3-3m6 12H2v-1c0-2 4-3.1 6-3.1s6 1.1 6 3.1zm3.85-4h1.64L21 16l-1.99 1.99c-1.31-.98-2.28-2.38-2.73-3.99-.18-.64-.28-1.31-.28-2s.1-1.36.28-2c.45-1.62 1.42-3.01 2.73-3.99L21 8l-1.51 2h-1.64c-.22.63-.35 1.3-.35 2s.13 1.37.35 2"/></svg>"#;

/// Share (Material Share)
pub const ICON_SHARE: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92s2.92-1.31 2.92-2.92-1.31-2.92-2.92-2.92"/></svg>"#;

/// Schemes allowed in link and image targets, compared case-insensitively.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Check if a URL is safe to use in an `href` attribute.
///
/// A target with a scheme must use one of [`SAFE_SCHEMES`]. Targets without
/// a scheme (`fiche.pdf`, `./postuler`, `?ref=x`, `#apply`) are relative and
/// allowed, except protocol-relative ones (`//host`).
pub fn is_safe_url(url: &str) -> bool {
    if url.is_empty()
        || url.starts_with("//")
        || url.starts_with("/\\")
        || url.starts_with('\\')
    {
        return false;
    }
    // A colon only starts a scheme when no path, query or fragment precedes it.
    match url.find([':', '/', '?', '#']) {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = &url[..i];
            SAFE_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme))
        }
        _ => true,
    }
}
