pub mod config;
pub mod error;
pub mod topics;
pub mod types;

pub use config::Config;
pub use error::{Result, WaypostError};
pub use topics::{Topic, TopicEntry};
pub use types::DiscoveryItem;
