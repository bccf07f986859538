use serde::{Deserialize, Serialize};

/// A normalized search result from any discovery source.
///
/// Identity is the URL: two items whose case-folded, trimmed URLs match are
/// the same item, regardless of any other field differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryItem {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<i64>,
}

impl DiscoveryItem {
    /// Dedup key: case-folded, whitespace-trimmed URL.
    pub fn dedup_key(&self) -> String {
        self.url.trim().to_lowercase()
    }
}
