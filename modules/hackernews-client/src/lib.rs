pub mod error;
pub mod types;

pub use error::{HackerNewsError, Result};
pub use types::{HnHit, HnSearchOptions, HnSearchResponse};

use std::time::Duration;

const BASE_URL: &str = "https://hn.algolia.com/api/v1";

pub struct HackerNewsClient {
    client: reqwest::Client,
}

impl HackerNewsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Relevance-ordered search. Omitting the query browses the index,
    /// which is how "trending" stories are fetched.
    pub async fn search(
        &self,
        query: Option<&str>,
        opts: &HnSearchOptions,
    ) -> Result<HnSearchResponse> {
        self.request("search", query, opts).await
    }

    /// Recency-ordered search over the same index.
    pub async fn search_by_date(
        &self,
        query: Option<&str>,
        opts: &HnSearchOptions,
    ) -> Result<HnSearchResponse> {
        self.request("search_by_date", query, opts).await
    }

    async fn request(
        &self,
        endpoint: &str,
        query: Option<&str>,
        opts: &HnSearchOptions,
    ) -> Result<HnSearchResponse> {
        let url = format!("{BASE_URL}/{endpoint}");
        let params = query_params(query, opts);

        tracing::debug!(endpoint, query, "Hacker News search");

        let resp = self.client.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HackerNewsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: HnSearchResponse = resp.json().await?;
        tracing::debug!(endpoint, count = data.hits.len(), "Hacker News search complete");
        Ok(data)
    }
}

impl Default for HackerNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn query_params(query: Option<&str>, opts: &HnSearchOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(query) = query {
        params.push(("query", query.to_string()));
    }
    if let Some(tags) = &opts.tags {
        params.push(("tags", tags.clone()));
    }
    if let Some(hits_per_page) = opts.hits_per_page {
        params.push(("hitsPerPage", hits_per_page.to_string()));
    }
    if let Some(page) = opts.page {
        params.push(("page", page.to_string()));
    }
    if let Some(filters) = &opts.numeric_filters {
        params.push(("numericFilters", filters.clone()));
    }
    params
}
