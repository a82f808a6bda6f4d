//! Delete Request Context
//!
//! Built fresh on every click and dropped once the response is in.

use serde::{Deserialize, Serialize};

/// Content type declared on every delete request.
///
/// No body is ever sent with it.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Server-side collection a delete button targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Artists,
    Venues,
}

impl ResourceKind {
    /// URL path segment of the collection
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Artists => "artists",
            ResourceKind::Venues => "venues",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

/// One DELETE request for one resource.
///
/// The identifier is taken verbatim: it is neither validated nor escaped, so
/// empty and non-numeric values end up in the path exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    kind: ResourceKind,
    resource_id: String,
    endpoint: String,
}

impl DeleteRequest {
    pub fn new(kind: ResourceKind, resource_id: impl Into<String>) -> Self {
        let resource_id = resource_id.into();
        let endpoint = format!("/{}/{}", kind.collection(), resource_id);
        Self { kind, resource_id, endpoint }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Path the request is sent to, e.g. `/artists/42`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> &'static str {
        "DELETE"
    }

    pub fn headers(&self) -> [(&'static str, &'static str); 1] {
        [("Content-Type", JSON_CONTENT_TYPE)]
    }

    pub fn body(&self) -> Option<&str> {
        None
    }
}
