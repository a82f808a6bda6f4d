//! Resource Delete Action
//!
//! Platform-independent core of the delete button on Fyyur detail pages.
//! A click issues `DELETE /{collection}/{id}` and, when the server answers
//! with a 2xx status, sends the browser to the configured page.
//!
//! The crate never touches the DOM. The network call and the navigation are
//! injected through [`DeleteTransport`] and [`Navigator`], so the browser
//! crate supplies `fetch`/`window.location` and tests supply recorders.

mod action;
mod config;
mod error;
mod request;

pub use action::{is_success, DeleteAction, DeleteOutcome, DeleteTransport, Navigator};
pub use config::BindingConfig;
pub use error::{DeleteError, NavigationError, TransportError};
pub use request::{DeleteRequest, ResourceKind, JSON_CONTENT_TYPE};
