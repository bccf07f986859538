use serde::{Deserialize, Serialize};

// --- Search options ---

/// Options for a SearXNG search call.
#[derive(Debug, Clone, Default)]
pub struct SearxngSearchOptions {
    /// Engines to restrict the search to, e.g. ["bing news"].
    pub engines: Vec<String>,
    /// Locale, e.g. "en".
    pub language: Option<String>,
    /// 1-indexed results page.
    pub pageno: Option<u32>,
}

// --- Response types ---

/// One result row from the SearXNG JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearxngSearchResult {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_src: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearxngSearchResponse {
    #[serde(default)]
    pub results: Vec<SearxngSearchResult>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
