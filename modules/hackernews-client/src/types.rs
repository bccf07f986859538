use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Search options ---

/// Options for an Algolia search call.
#[derive(Debug, Clone, Default)]
pub struct HnSearchOptions {
    /// Tag filter: "story", "ask_hn", "show_hn", "job", "poll".
    pub tags: Option<String>,
    /// Results per page (the API defaults to 20).
    pub hits_per_page: Option<u32>,
    /// 0-indexed page.
    pub page: Option<u32>,
    /// Numeric constraints like "points>100".
    pub numeric_filters: Option<String>,
}

// --- Response types ---

/// One hit from the Algolia story index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HnHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: String,
    /// Outbound story URL. Absent for self posts (Ask HN, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<i64>,
    pub created_at: DateTime<Utc>,
    /// Self-post body text, when the story has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HnSearchResponse {
    #[serde(default)]
    pub hits: Vec<HnHit>,
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(rename = "nbPages", default)]
    pub nb_pages: u32,
    #[serde(rename = "hitsPerPage", default)]
    pub hits_per_page: u32,
}
