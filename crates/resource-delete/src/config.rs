//! Binding Configuration

use serde::{Deserialize, Serialize};

use crate::request::ResourceKind;

/// Which button to bind, what it deletes, and where to go afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// DOM id of the button
    pub element_id: String,
    pub kind: ResourceKind,
    /// Location set after a successful delete
    pub redirect_to: String,
}

impl BindingConfig {
    pub fn artist() -> Self {
        Self::default()
    }

    pub fn venue() -> Self {
        Self {
            element_id: "delete-venue".to_string(),
            kind: ResourceKind::Venues,
            ..Self::default()
        }
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            element_id: "delete".to_string(),
            kind: ResourceKind::Artists,
            redirect_to: "/".to_string(),
        }
    }
}
