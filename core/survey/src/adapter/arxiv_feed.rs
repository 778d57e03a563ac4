//! arXiv API（Atom）を使う PaperFeed 実装

use crate::adapter::atom::parse_feed;
use crate::domain::PaperRecord;
use crate::ports::outbound::{FeedQuery, PaperFeed};
use common::error::Error;

/// arXiv の export API に問い合わせる
pub struct ArxivFeed {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ArxivFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

/// search_query パラメータを組み立てる
///
/// 例: `all:"MBTI" AND (cat:cs.AI OR cat:cs.CL) AND submittedDate:[202401010000 TO 202401152359]`
pub fn build_search_query(query: &FeedQuery) -> String {
    let mut q = format!("all:\"{}\"", query.keyword.replace('"', ""));
    if !query.categories.is_empty() {
        let cats = query
            .categories
            .iter()
            .map(|c| format!("cat:{}", c))
            .collect::<Vec<_>>()
            .join(" OR ");
        q.push_str(&format!(" AND ({})", cats));
    }
    q.push_str(&format!(
        " AND submittedDate:[{}0000 TO {}2359]",
        query.since.format("%Y%m%d"),
        query.until.format("%Y%m%d")
    ));
    q
}

impl PaperFeed for ArxivFeed {
    fn search(&self, query: &FeedQuery) -> Result<Vec<PaperRecord>, Error> {
        let search_query = build_search_query(query);
        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            let snippet: String = body.chars().take(200).collect();
            return Err(Error::http(format!("HTTP {}: {}", status, snippet)));
        }
        parse_feed(&body, &query.keyword)
    }
}
