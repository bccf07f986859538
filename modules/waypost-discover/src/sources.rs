//! Source searcher seams and their production implementations.
//!
//! The aggregator only sees the two traits; the impls below adapt the raw
//! backend clients and normalize their results into `DiscoveryItem`.

use async_trait::async_trait;

use hackernews_client::{HackerNewsClient, HackerNewsError, HnHit, HnSearchOptions};
use searxng_client::{SearxngClient, SearxngError, SearxngSearchOptions, SearxngSearchResult};
use waypost_common::{DiscoveryItem, Result, WaypostError};

/// Engine used for site-restricted blog queries.
const BLOG_SEARCH_ENGINES: &[&str] = &["bing news"];

/// Placeholder thumbnail for forum stories (the forum serves no per-story art).
const FORUM_THUMBNAIL: &str = "https://news.ycombinator.com/y18.svg";

// --- Searcher traits ---

#[async_trait]
pub trait BlogSearcher: Send + Sync {
    /// Search one site for one query term. An empty result set is success,
    /// not an error.
    async fn search_site(&self, site: &str, query: &str) -> Result<Vec<DiscoveryItem>>;
}

#[async_trait]
pub trait ForumSearcher: Send + Sync {
    /// Search forum stories for a free-text phrase, up to `limit` items.
    async fn search_stories(&self, query: &str, limit: u32) -> Result<Vec<DiscoveryItem>>;
}

// --- BlogSearcher impl for SearxngClient ---

#[async_trait]
impl BlogSearcher for SearxngClient {
    async fn search_site(&self, site: &str, query: &str) -> Result<Vec<DiscoveryItem>> {
        let opts = SearxngSearchOptions {
            engines: BLOG_SEARCH_ENGINES.iter().map(|e| e.to_string()).collect(),
            language: Some("en".to_string()),
            pageno: Some(1),
        };

        let response = self
            .search(&format!("site:{site} {query}"), &opts)
            .await
            .map_err(|e| match e {
                SearxngError::Parse(msg) => WaypostError::MalformedResponse(msg),
                other => WaypostError::SourceUnavailable(other.to_string()),
            })?;

        Ok(response.results.into_iter().map(blog_item).collect())
    }
}

fn blog_item(result: SearxngSearchResult) -> DiscoveryItem {
    DiscoveryItem {
        url: result.url,
        title: result.title,
        thumbnail: result.thumbnail.or(result.img_src),
        content: result.content,
        author: result.author,
        points: None,
        num_comments: None,
    }
}

// --- ForumSearcher impl for HackerNewsClient ---

#[async_trait]
impl ForumSearcher for HackerNewsClient {
    async fn search_stories(&self, query: &str, limit: u32) -> Result<Vec<DiscoveryItem>> {
        let opts = HnSearchOptions {
            tags: Some("story".to_string()),
            hits_per_page: Some(limit),
            ..Default::default()
        };

        let response = self.search(Some(query), &opts).await.map_err(|e| match e {
            HackerNewsError::Parse(msg) => WaypostError::MalformedResponse(msg),
            other => WaypostError::SourceUnavailable(other.to_string()),
        })?;

        Ok(response.hits.into_iter().map(story_item).collect())
    }
}

fn story_item(hit: HnHit) -> DiscoveryItem {
    // Self posts have no outbound URL; link to their own discussion page
    let url = hit
        .url
        .unwrap_or_else(|| format!("https://news.ycombinator.com/item?id={}", hit.object_id));
    let content = hit.story_text.or_else(|| Some(hit.title.clone()));

    DiscoveryItem {
        url,
        title: hit.title,
        thumbnail: Some(FORUM_THUMBNAIL.to_string()),
        content,
        author: hit.author,
        points: hit.points,
        num_comments: hit.num_comments,
    }
}
