//! Outbound ポート: アプリが外界（論文フィード・設定ファイル）を使うための trait

pub mod paper_feed;
pub mod resolve_search_config;

pub use paper_feed::{FeedQuery, PaperFeed};
pub use resolve_search_config::ResolveSearchConfig;
