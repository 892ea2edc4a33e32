//! Job posting view state.
//!
//! A view is bound to one route identifier at a time. Changing the
//! identifier starts a new load and invalidates any load still in flight,
//! so a slow response for an old identifier can never overwrite the state
//! of the current one.

use crate::cms::CmsClient;
use crate::error::{FetchError, LOAD_ERROR_MESSAGE};
use crate::model::{JobId, JobPosting};

/// Path of the bundled placeholder image served by this service.
pub const PLACEHOLDER_PATH: &str = "/static/placeholder.svg";

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(Box<JobPosting>),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn posting(&self) -> Option<&JobPosting> {
        match self {
            Self::Ready(posting) => Some(posting),
            _ => None,
        }
    }
}

/// Handle for one load, issued by [`JobPostingView::set_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    id: JobId,
    generation: u64,
}

impl LoadTicket {
    pub fn id(&self) -> &JobId {
        &self.id
    }
}

/// Loading controller for the job posting page.
#[derive(Debug)]
pub struct JobPostingView {
    id: Option<JobId>,
    generation: u64,
    state: ViewState,
}

impl Default for JobPostingView {
    fn default() -> Self {
        Self::new()
    }
}

impl JobPostingView {
    pub fn new() -> Self {
        Self {
            id: None,
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn id(&self) -> Option<&JobId> {
        self.id.as_ref()
    }

    /// Bind the view to `id`.
    ///
    /// Returns a ticket when a load has to start, i.e. the first time and
    /// whenever the identifier changes. Re-binding the current identifier
    /// is a no-op.
    pub fn set_id(&mut self, id: JobId) -> Option<LoadTicket> {
        if self.id.as_ref() == Some(&id) {
            return None;
        }

        self.generation += 1;
        self.id = Some(id.clone());
        self.state = ViewState::Loading;

        Some(LoadTicket {
            id,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a load.
    ///
    /// Returns `false` (and leaves the state untouched) when the ticket is
    /// stale because the identifier changed after it was issued.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<JobPosting, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale job posting response"
            );
            return false;
        }

        self.state = match result {
            Ok(posting) => ViewState::Ready(Box::new(posting)),
            Err(err) => {
                tracing::warn!(id = %ticket.id, error = %err, "job posting load failed");
                ViewState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Bind to `id` and, if that starts a load, fetch the posting.
    pub async fn load(&mut self, cms: &CmsClient, id: JobId) -> &ViewState {
        if let Some(ticket) = self.set_id(id) {
            let result = cms.fetch_job_posting(ticket.id()).await;
            self.complete(ticket, result);
        }
        &self.state
    }
}

/// Where the posting image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Absolute URL of an image hosted by the CMS.
    Remote(String),
    /// The bundled placeholder.
    Placeholder,
}

impl ImageSource {
    /// Value for an `img src` attribute on our own pages.
    pub fn src(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder => PLACEHOLDER_PATH,
        }
    }

    /// Absolute URL, for consumers outside this site (Open Graph).
    pub fn absolute(&self, base_url: &str) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Placeholder => format!("{base_url}{PLACEHOLDER_PATH}"),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Pick the image for a posting: medium rendition, then the original
/// upload, then the placeholder.
pub fn resolve_image_url(posting: &JobPosting, cms: &CmsClient) -> ImageSource {
    match &posting.photo {
        Some(photo) => ImageSource::Remote(cms.absolute_media_url(photo.display_url())),
        None => ImageSource::Placeholder,
    }
}
