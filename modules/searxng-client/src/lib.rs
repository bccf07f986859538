pub mod error;
pub mod types;

pub use error::{Result, SearxngError};
pub use types::{SearxngSearchOptions, SearxngSearchResponse, SearxngSearchResult};

use std::time::Duration;

pub struct SearxngClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearxngClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search query. An empty result list is a successful response,
    /// not an error.
    pub async fn search(
        &self,
        query: &str,
        opts: &SearxngSearchOptions,
    ) -> Result<SearxngSearchResponse> {
        let url = format!("{}/search", self.base_url);
        let params = query_params(query, opts);

        tracing::debug!(query, "SearXNG search");

        let resp = self.client.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearxngError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: SearxngSearchResponse = resp.json().await?;
        tracing::debug!(query, count = data.results.len(), "SearXNG search complete");
        Ok(data)
    }
}

fn query_params(query: &str, opts: &SearxngSearchOptions) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("format", "json".to_string()),
        ("q", query.to_string()),
    ];
    if !opts.engines.is_empty() {
        params.push(("engines", opts.engines.join(",")));
    }
    if let Some(language) = &opts.language {
        params.push(("language", language.clone()));
    }
    if let Some(pageno) = opts.pageno {
        params.push(("pageno", pageno.to_string()));
    }
    params
}
