//! Fan-out aggregation: one site-restricted blog search per (site, query)
//! pair plus one forum search, merged, deduplicated, and shuffled.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use waypost_common::{DiscoveryItem, Result, TopicEntry, WaypostError};

use crate::dedupe::dedupe_by_url;
use crate::shuffle::{pick, shuffle};
use crate::sources::{BlogSearcher, ForumSearcher};

/// How many forum stories to request per aggregation.
const FORUM_STORY_LIMIT: u32 = 15;

/// Output shape selector for one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverMode {
    /// Full fan-out: merge, dedupe, shuffle.
    Normal,
    /// One sampled (site, query) call, returned as-is.
    Preview,
}

impl DiscoverMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(DiscoverMode::Normal),
            "preview" => Some(DiscoverMode::Preview),
            _ => None,
        }
    }
}

impl Default for DiscoverMode {
    fn default() -> Self {
        DiscoverMode::Normal
    }
}

type CallFuture = Pin<Box<dyn Future<Output = Option<Vec<DiscoveryItem>>> + Send>>;

pub struct Aggregator {
    blogs: Arc<dyn BlogSearcher>,
    forum: Arc<dyn ForumSearcher>,
}

impl Aggregator {
    pub fn new(blogs: Arc<dyn BlogSearcher>, forum: Arc<dyn ForumSearcher>) -> Self {
        Self { blogs, forum }
    }

    /// Run one aggregation for a topic configuration. Stateless per call.
    pub async fn discover(
        &self,
        entry: &TopicEntry,
        mode: DiscoverMode,
    ) -> Result<Vec<DiscoveryItem>> {
        match mode {
            DiscoverMode::Normal => self.discover_normal(entry).await,
            DiscoverMode::Preview => self.discover_preview(entry).await,
        }
    }

    async fn discover_normal(&self, entry: &TopicEntry) -> Result<Vec<DiscoveryItem>> {
        // One call per (site, query) pair, site-major, forum call last.
        // join_all keeps this order in its output, so the concatenation the
        // dedup pass sees is deterministic for deterministic searchers.
        let mut calls: Vec<CallFuture> = Vec::new();

        for &site in entry.sites {
            for &query in entry.queries {
                let blogs = self.blogs.clone();
                calls.push(Box::pin(async move {
                    match blogs.search_site(site, query).await {
                        Ok(items) => Some(items),
                        Err(e) => {
                            warn!(site, query, error = %e, "Blog search failed");
                            None
                        }
                    }
                }));
            }
        }

        let forum = self.forum.clone();
        let forum_query = entry.forum_query;
        calls.push(Box::pin(async move {
            match forum.search_stories(forum_query, FORUM_STORY_LIMIT).await {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!(query = forum_query, error = %e, "Forum search failed");
                    None
                }
            }
        }));

        let scheduled = calls.len();
        let outcomes = join_all(calls).await;

        // A failed call contributes zero items; all of them failing is a
        // genuine aggregate failure, not an empty success.
        let succeeded = outcomes.iter().filter(|o| o.is_some()).count();
        if succeeded == 0 {
            return Err(WaypostError::AllSourcesUnavailable);
        }

        let merged: Vec<DiscoveryItem> = outcomes.into_iter().flatten().flatten().collect();
        let mut items = dedupe_by_url(merged);
        shuffle(&mut items);

        info!(
            scheduled,
            succeeded,
            count = items.len(),
            "Discovery aggregation complete"
        );
        Ok(items)
    }

    async fn discover_preview(&self, entry: &TopicEntry) -> Result<Vec<DiscoveryItem>> {
        // Independent uniform draws: each site and each query is equally
        // likely, regardless of how many pairings exist.
        let Some(&site) = pick(entry.sites) else {
            return Ok(Vec::new());
        };
        let Some(&query) = pick(entry.queries) else {
            return Ok(Vec::new());
        };

        let items = self.blogs.search_site(site, query).await?;
        info!(site, query, count = items.len(), "Preview discovery complete");
        Ok(items)
    }
}
