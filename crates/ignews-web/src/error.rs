//! Request-level errors and their HTML rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::prismic::PrismicError;
use crate::render::components::error_page;

/// Everything a page handler can fail with. The conversion to a
/// response renders the site's error page; variant detail stays in the
/// logs, not in the markup.
#[derive(Debug, Error)]
pub enum WebError {
    /// The sign-in flow was rejected, by the provider or by us.
    #[error("sign-in failed: {0}")]
    AccessDenied(String),

    /// Content fetch failed while building a page.
    #[error("content provider error: {0}")]
    Content(#[from] PrismicError),

    /// Session persistence failure.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::Content(PrismicError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Content(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            Self::AccessDenied(_) => "Access denied",
            Self::Content(PrismicError::NotFound(_)) => "Post not found",
            Self::Content(_) => "Content unavailable",
            Self::Session(_) | Self::Internal(_) => "Something went wrong",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, error_page(status, self.headline())).into_response()
    }
}
