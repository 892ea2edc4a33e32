//! Share action.
//!
//! Sharing happens in the visitor's browser through the Web Share API.
//! [`share`] is the host-independent form of that algorithm, and
//! [`SHARE_JS`] is the script that runs it in the browser. The rendered
//! page carries the share payload as `data-share-*` attributes on the
//! share button.

use crate::model::JobPosting;

/// Text that accompanies a shared posting.
pub const SHARE_TEXT: &str = "Check out this job posting!";

/// Notification shown when the host cannot share.
pub const SHARE_UNSUPPORTED_MESSAGE: &str = "Your browser does not support the share feature";

/// Payload handed to the native share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn for_posting(posting: &JobPosting, page_url: &str) -> Self {
        Self {
            title: posting.job_title.clone(),
            text: SHARE_TEXT.to_string(),
            url: page_url.to_string(),
        }
    }
}

/// Failure reported by a native share implementation (e.g. user abort).
#[derive(Debug, thiserror::Error)]
#[error("share failed: {0}")]
pub struct ShareError(pub String);

/// Native share capability of a host environment.
pub trait NativeShare {
    fn share(&self, data: &ShareData) -> Result<(), ShareError>;
}

/// Host environment the share action runs in.
pub trait ShareHost {
    /// The native share capability, if the host exposes one.
    fn native_share(&self) -> Option<&dyn NativeShare>;

    /// Show a blocking notification to the user.
    fn notify(&self, message: &str);
}

/// Result of a share attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// Native share failed; logged, not surfaced.
    Failed,
    /// No native share; the user was notified.
    Unsupported,
}

/// Share `data` through the host.
pub fn share(host: &dyn ShareHost, data: &ShareData) -> ShareOutcome {
    match host.native_share() {
        Some(native) => match native.share(data) {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                tracing::warn!(error = %err, url = %data.url, "share failed");
                ShareOutcome::Failed
            }
        },
        None => {
            host.notify(SHARE_UNSUPPORTED_MESSAGE);
            ShareOutcome::Unsupported
        }
    }
}

/// Browser side of the page: share button and back button wiring.
///
/// Served from `/static/share.js` so the page CSP can stay `script-src 'self'`.
pub const SHARE_JS: &str = r#"(function () {
  "use strict";
  var UNSUPPORTED = "Your browser does not support the share feature";

  function share(button) {
    var data = {
      title: button.getAttribute("data-share-title") || document.title,
      text: button.getAttribute("data-share-text") || "",
      url: window.location.href
    };
    if (navigator.share) {
      navigator.share(data).catch(function (err) {
        console.log("share failed", err);
      });
    } else {
      alert(UNSUPPORTED);
    }
  }

  document.addEventListener("DOMContentLoaded", function () {
    var shareButton = document.querySelector("[data-share-title]");
    if (shareButton) {
      shareButton.addEventListener("click", function (event) {
        event.preventDefault();
        share(shareButton);
      });
    }

    var back = document.querySelector("[data-back]");
    if (back && window.history.length > 1) {
      back.addEventListener("click", function (event) {
        event.preventDefault();
        window.history.back();
      });
    }
  });
})();
"#;
