//! Page Configuration
//!
//! Pages may embed `<script type="application/json" id="fyyur-ui-config">`
//! to override the default bindings. Missing or malformed config falls back
//! to the defaults.

use log::{error, LevelFilter};
use resource_delete::BindingConfig;
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "fyyur-ui-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub bindings: Vec<BindingConfig>,
    pub log_level: LevelFilter,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bindings: vec![BindingConfig::artist(), BindingConfig::venue()],
            log_level: LevelFilter::Info,
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        Self::from_json(&text).unwrap_or_else(|e| {
            error!("#{}: {}", CONFIG_ELEMENT_ID, e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_delete::ResourceKind;

    #[test]
    fn test_default_binds_artist_and_venue() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.bindings.len(), 2);
        assert_eq!(cfg.bindings[0].element_id, "delete");
        assert_eq!(cfg.bindings[0].kind, ResourceKind::Artists);
        assert_eq!(cfg.bindings[1].element_id, "delete-venue");
        assert_eq!(cfg.bindings[1].kind, ResourceKind::Venues);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_from_json_overrides() {
        let cfg = UiConfig::from_json(
            r#"{"bindings":[{"element_id":"remove","redirect_to":"/artists"}],"log_level":"debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.bindings.len(), 1);
        assert_eq!(cfg.bindings[0].element_id, "remove");
        assert_eq!(cfg.bindings[0].kind, ResourceKind::Artists);
        assert_eq!(cfg.bindings[0].redirect_to, "/artists");
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(UiConfig::from_json("{bindings"), Err(ConfigError::Malformed(_))));
    }
}
