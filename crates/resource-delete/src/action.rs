//! Delete-Action Handler
//!
//! idle -> request in flight -> navigated away, or idle again.
//! There is no re-entrancy guard: two clicks give two requests.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::config::BindingConfig;
use crate::error::{DeleteError, NavigationError, TransportError};
use crate::request::DeleteRequest;

/// Sends a delete request and reports the response status.
///
/// `?Send` because browser futures are bound to the UI thread.
#[async_trait(?Send)]
pub trait DeleteTransport {
    async fn send(&self, request: &DeleteRequest) -> Result<u16, TransportError>;
}

/// Performs a full navigation of the browsing context
pub trait Navigator {
    fn navigate(&self, to: &str) -> Result<(), NavigationError>;
}

/// 2xx
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server accepted the delete and the location was set
    Navigated { to: String },
    /// Server answered with a non-2xx status; nothing else happens
    Rejected { status: u16 },
}

/// Handler bound to one button.
///
/// Holds no per-click state, so one instance serves every click.
pub struct DeleteAction<T, N> {
    config: BindingConfig,
    transport: T,
    navigator: N,
}

impl<T: DeleteTransport, N: Navigator> DeleteAction<T, N> {
    pub fn new(config: BindingConfig, transport: T, navigator: N) -> Self {
        Self { config, transport, navigator }
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Run one click: delete `resource_id`, navigate if the server agreed.
    pub async fn handle_click(&self, resource_id: &str) -> Result<DeleteOutcome, DeleteError> {
        let request = DeleteRequest::new(self.config.kind, resource_id);
        debug!("{} {}", request.method(), request.endpoint());

        let status = self.transport.send(&request).await?;
        if !is_success(status) {
            warn!("{} {} answered {}", request.method(), request.endpoint(), status);
            return Ok(DeleteOutcome::Rejected { status });
        }

        let to = self.config.redirect_to.clone();
        info!("Deleted {}, navigating to {}", request.endpoint(), to);
        self.navigator.navigate(&to)?;
        Ok(DeleteOutcome::Navigated { to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }
}
