//! First-seen-wins URL deduplication.

use std::collections::HashSet;

use waypost_common::DiscoveryItem;

/// Drop every item whose normalized URL appeared earlier in the sequence.
/// Order-preserving: survivors keep their input order, and for duplicates the
/// first occurrence's fields win. The shuffle step is the only reordering in
/// the pipeline.
pub fn dedupe_by_url(items: Vec<DiscoveryItem>) -> Vec<DiscoveryItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.dedup_key()))
        .collect()
}
