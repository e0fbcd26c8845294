use serde::{Deserialize, Serialize};

/// Kind of external asset a widget asks the host page to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Css,
    Js,
}

/// A request for the host page to load an external asset.
///
/// Deduplication by `(group, bucket)` is the host's responsibility; the page
/// only collects requests in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub url: String,
    pub kind: ResourceKind,
    pub group: String,
    pub bucket: String,
}

impl ResourceRequest {
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        kind: ResourceKind,
        group: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            kind,
            group: group.into(),
            bucket: bucket.into(),
        }
    }
}
