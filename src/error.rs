//! Frontend Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no element with id {0}")]
    MissingElement(String),
    #[error("element {0} is not an HTML element")]
    NotHtmlElement(String),
    #[error("could not attach click listener: {0}")]
    Listener(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed page config: {0}")]
    Malformed(#[from] serde_json::Error),
}
