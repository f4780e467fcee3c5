//! LaunchDeck Ingest - upstream launch catalog synchronization
//!
//! Provides:
//! - Wire types for the SpaceX v4 `launches/query` endpoint
//! - The `LaunchFeed` seam and its HTTP implementation `SpaceXFeed`
//! - Mapping from upstream documents to `LaunchRecord`
//! - `LaunchIngestor`: one-shot, load-once and periodic synchronization

pub mod errors;
pub mod feed;
pub mod http_feed;
pub mod ingestor;
pub mod mapping;
pub mod upstream;

pub use feed::LaunchFeed;
pub use http_feed::{FeedConfig, SpaceXFeed};
pub use ingestor::{LaunchIngestor, SyncReport};
pub use mapping::map_upstream;
