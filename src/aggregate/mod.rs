//! Derived dashboard views over the latest results.

pub mod feed;
pub mod summary;

pub use feed::{issue_feed, FeedItem};
pub use summary::{summarize, AggregateSummary};
