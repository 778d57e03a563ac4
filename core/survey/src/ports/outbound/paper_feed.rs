//! 論文フィードの Outbound ポート
//!
//! キーワード 1 件の検索結果を返す。ネットワーク・解析の失敗は Err で返し、
//! 続行するかどうかは usecase が決める。

use crate::domain::PaperRecord;
use chrono::NaiveDate;
use common::error::Error;

/// 1 回分の検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub keyword: String,
    /// OR で結合するカテゴリ
    pub categories: Vec<String>,
    pub max_results: u32,
    /// 投稿日の範囲（両端を含む）
    pub since: NaiveDate,
    pub until: NaiveDate,
}

/// 論文検索フィード（実装は ArxivFeed やテスト用の StubPaperFeed）
pub trait PaperFeed: Send + Sync {
    fn search(&self, query: &FeedQuery) -> Result<Vec<PaperRecord>, Error>;
}
