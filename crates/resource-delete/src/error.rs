//! Delete Action Errors
//!
//! A non-2xx status is not an error here; it is reported as
//! [`crate::DeleteOutcome::Rejected`].

use thiserror::Error;

/// The request never produced a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No `window` (or equivalent) to send from
    #[error("transport unavailable: {0}")]
    Unavailable(String),
    /// Network failure, CORS rejection, aborted fetch
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// Something other than a response came back
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation unavailable: {0}")]
    Unavailable(String),
    #[error("navigation to {to} failed: {reason}")]
    Failed { to: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
