pub mod aggregator;
pub mod dedupe;
pub mod shuffle;
pub mod sources;

pub use aggregator::{Aggregator, DiscoverMode};
pub use dedupe::dedupe_by_url;
pub use sources::{BlogSearcher, ForumSearcher};
