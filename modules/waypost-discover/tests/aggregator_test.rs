//! Aggregator tests with fake searchers: fan-out counts, merge/dedup,
//! per-call failure degradation, and preview sampling. No network.
//!
//! Which duplicate survives dedup depends on concatenation order; the fakes
//! here are deterministic, so ordering assertions are valid. Against real
//! backends only dedup correctness holds, not which duplicate wins.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use waypost_common::{DiscoveryItem, Result, TopicEntry, WaypostError};
use waypost_discover::{Aggregator, BlogSearcher, DiscoverMode, ForumSearcher};

const ENTRY: TopicEntry = TopicEntry {
    queries: &["q1", "q2"],
    sites: &["a.com", "b.com"],
    forum_query: "testing",
};

fn item(url: &str) -> DiscoveryItem {
    DiscoveryItem {
        url: url.to_string(),
        title: url.to_string(),
        thumbnail: None,
        content: None,
        author: None,
        points: None,
        num_comments: None,
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeBlogs {
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, String)>>,
    /// Returned by every call in addition to the per-pair item.
    shared_url: Option<String>,
    /// Calls for this site fail.
    fail_site: Option<String>,
    fail_all: bool,
}

#[async_trait]
impl BlogSearcher for FakeBlogs {
    async fn search_site(&self, site: &str, query: &str) -> Result<Vec<DiscoveryItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((site.to_string(), query.to_string()));

        if self.fail_all || self.fail_site.as_deref() == Some(site) {
            return Err(WaypostError::SourceUnavailable(format!("{site} is down")));
        }

        let mut items = vec![item(&format!("https://{site}/{query}"))];
        if let Some(url) = &self.shared_url {
            items.push(item(url));
        }
        Ok(items)
    }
}

#[derive(Default)]
struct FakeForum {
    calls: AtomicUsize,
    shared_url: Option<String>,
    fail_all: bool,
}

#[async_trait]
impl ForumSearcher for FakeForum {
    async fn search_stories(&self, _query: &str, limit: u32) -> Result<Vec<DiscoveryItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_all {
            return Err(WaypostError::SourceUnavailable("forum is down".to_string()));
        }

        assert!(limit > 0);
        let mut items = vec![item("https://news.ycombinator.com/item?id=1")];
        if let Some(url) = &self.shared_url {
            items.push(item(url));
        }
        Ok(items)
    }
}

fn aggregator(blogs: FakeBlogs, forum: FakeForum) -> (Aggregator, Arc<FakeBlogs>, Arc<FakeForum>) {
    let blogs = Arc::new(blogs);
    let forum = Arc::new(forum);
    (
        Aggregator::new(blogs.clone(), forum.clone()),
        blogs,
        forum,
    )
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn normal_issues_one_call_per_site_query_pair_plus_forum() {
    let (agg, blogs, forum) = aggregator(FakeBlogs::default(), FakeForum::default());

    agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    // 2 sites x 2 queries = 4 blog calls, plus exactly one forum call
    assert_eq!(blogs.calls.load(Ordering::SeqCst), 4);
    assert_eq!(forum.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn normal_dedupes_across_sources() {
    let (agg, _, _) = aggregator(
        FakeBlogs {
            shared_url: Some("https://x.com/1".to_string()),
            ..Default::default()
        },
        FakeForum {
            shared_url: Some("https://x.com/1".to_string()),
            ..Default::default()
        },
    );

    let items = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    let shared = items.iter().filter(|i| i.url == "https://x.com/1").count();
    assert_eq!(shared, 1, "shared URL must survive exactly once");

    // 4 per-pair URLs + the shared URL + the forum story
    assert_eq!(items.len(), 6);
}

#[tokio::test]
async fn normal_output_has_pairwise_distinct_urls() {
    let (agg, _, _) = aggregator(
        FakeBlogs {
            shared_url: Some("https://x.com/1".to_string()),
            ..Default::default()
        },
        FakeForum::default(),
    );

    let items = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    let mut keys: Vec<String> = items.iter().map(|i| i.dedup_key()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total, "no two items may share a normalized URL");
}

#[tokio::test]
async fn normal_output_is_a_permutation_of_the_deduped_set() {
    let (agg, _, _) = aggregator(FakeBlogs::default(), FakeForum::default());

    let items = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    let mut urls: Vec<&str> = items.iter().map(|i| i.url.as_str()).collect();
    urls.sort_unstable();
    assert_eq!(
        urls,
        vec![
            "https://a.com/q1",
            "https://a.com/q2",
            "https://b.com/q1",
            "https://b.com/q2",
            "https://news.ycombinator.com/item?id=1",
        ]
    );
}

// ---------------------------------------------------------------------------
// Failure degradation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_site_contributes_zero_items() {
    let (agg, blogs, _) = aggregator(
        FakeBlogs {
            fail_site: Some("a.com".to_string()),
            ..Default::default()
        },
        FakeForum::default(),
    );

    let items = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    // The failing site's calls were still issued, just contributed nothing
    assert_eq!(blogs.calls.load(Ordering::SeqCst), 4);
    assert!(items.iter().all(|i| !i.url.contains("a.com")));
    assert!(items.iter().any(|i| i.url.contains("b.com")));
    assert!(items.iter().any(|i| i.url.contains("news.ycombinator.com")));
}

#[tokio::test]
async fn forum_failure_alone_degrades_gracefully() {
    let (agg, _, _) = aggregator(
        FakeBlogs::default(),
        FakeForum {
            fail_all: true,
            ..Default::default()
        },
    );

    let items = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap();

    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|i| !i.url.contains("news.ycombinator.com")));
}

#[tokio::test]
async fn all_calls_failing_is_an_aggregate_error() {
    let (agg, _, _) = aggregator(
        FakeBlogs {
            fail_all: true,
            ..Default::default()
        },
        FakeForum {
            fail_all: true,
            ..Default::default()
        },
    );

    let err = agg.discover(&ENTRY, DiscoverMode::Normal).await.unwrap_err();
    assert!(matches!(err, WaypostError::AllSourcesUnavailable));
}

// ---------------------------------------------------------------------------
// Preview mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preview_issues_exactly_one_blog_call_and_never_touches_the_forum() {
    let (agg, blogs, forum) = aggregator(FakeBlogs::default(), FakeForum::default());

    agg.discover(&ENTRY, DiscoverMode::Preview).await.unwrap();

    assert_eq!(blogs.calls.load(Ordering::SeqCst), 1);
    assert_eq!(forum.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn preview_samples_site_and_query_from_the_entry() {
    let (agg, blogs, _) = aggregator(FakeBlogs::default(), FakeForum::default());

    for _ in 0..20 {
        agg.discover(&ENTRY, DiscoverMode::Preview).await.unwrap();
        let (site, query) = blogs.last_call.lock().unwrap().clone().unwrap();
        assert!(ENTRY.sites.contains(&site.as_str()));
        assert!(ENTRY.queries.contains(&query.as_str()));
    }
}

#[tokio::test]
async fn preview_returns_the_single_calls_items_unmodified() {
    let (agg, blogs, _) = aggregator(
        FakeBlogs {
            shared_url: Some("https://x.com/1".to_string()),
            ..Default::default()
        },
        FakeForum::default(),
    );

    let items = agg.discover(&ENTRY, DiscoverMode::Preview).await.unwrap();

    // Per-pair item first, then the extra item: no dedup, no shuffle
    let (site, query) = blogs.last_call.lock().unwrap().clone().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].url, format!("https://{site}/{query}"));
    assert_eq!(items[1].url, "https://x.com/1");
}

#[tokio::test]
async fn preview_failure_propagates() {
    let (agg, _, _) = aggregator(
        FakeBlogs {
            fail_all: true,
            ..Default::default()
        },
        FakeForum::default(),
    );

    let err = agg.discover(&ENTRY, DiscoverMode::Preview).await.unwrap_err();
    assert!(matches!(err, WaypostError::SourceUnavailable(_)));
}
