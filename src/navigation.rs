//! Browser Navigation
//!
//! Full navigation through `window.location`, which unloads the page
//! (and every listener on it).

use resource_delete::{NavigationError, Navigator};

use crate::js::error_message;

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, to: &str) -> Result<(), NavigationError> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError::Unavailable("no window".to_string()))?;
        window.location().set_href(to).map_err(|e| NavigationError::Failed {
            to: to.to_string(),
            reason: error_message(&e),
        })
    }
}
