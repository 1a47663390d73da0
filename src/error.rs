//! Navigation failures and how they are presented

use axum::http::StatusCode;
use thiserror::Error;

use crate::content::ContentError;

/// A loader outcome that ends the navigation with a status page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {}", .status.as_u16(), .status_text)]
pub struct NavigationError {
    pub status: StatusCode,
    pub status_text: String,
}

impl NavigationError {
    pub fn new(status: StatusCode, status_text: &str) -> Self {
        Self {
            status,
            status_text: status_text.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }
}

/// Any failure while loading or rendering a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ContentError> for PageError {
    fn from(err: ContentError) -> Self {
        PageError::Internal(anyhow::Error::new(err).context("content source failed"))
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        PageError::Internal(anyhow::Error::new(err).context("template rendering failed"))
    }
}

/// What the visitor sees when a navigation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound { status_text: String },
    InternalError,
}

impl ErrorPage {
    /// Collapse a failure into one of the two presentable states. Only 404 is
    /// presented as such; every other status is treated as an internal error.
    pub fn from_error(err: &PageError) -> Self {
        match err {
            PageError::Navigation(nav) if nav.status == StatusCode::NOT_FOUND => {
                ErrorPage::NotFound {
                    status_text: nav.status_text.clone(),
                }
            }
            PageError::Navigation(_) | PageError::Internal(_) => ErrorPage::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorPage::NotFound { .. } => StatusCode::NOT_FOUND,
            ErrorPage::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Document title
    pub fn title(&self) -> &str {
        match self {
            ErrorPage::NotFound { status_text } => status_text,
            ErrorPage::InternalError => "Internal server error",
        }
    }

    /// Heading shown on the page
    pub fn message(&self) -> String {
        format!("{} {}", self.status().as_u16(), self.title())
    }
}

/// Log a failure to the operational sink. Not-found is routine.
pub fn report(err: &PageError, path: &str) {
    match err {
        PageError::Navigation(nav) if nav.status == StatusCode::NOT_FOUND => {
            tracing::debug!("{} -> {}", path, nav);
        }
        PageError::Navigation(nav) => {
            tracing::error!("{} -> unhandled navigation error {}", path, nav);
        }
        PageError::Internal(e) => {
            tracing::error!("{} -> {:#}", path, e);
        }
    }
}

/// Text carried by a panic payload, for logging only
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
