//! テスト用: キーワードごとに固定の結果を返す PaperFeed 実装

#[cfg(test)]
mod stub {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use common::error::Error;

    use crate::domain::PaperRecord;
    use crate::ports::outbound::{FeedQuery, PaperFeed};

    /// テスト用: キーワード → 結果（Err はメッセージ）を返す Stub。呼び出しを記録する。
    #[derive(Default)]
    pub struct StubPaperFeed {
        results: HashMap<String, Result<Vec<PaperRecord>, String>>,
        pub(crate) calls: Mutex<Vec<FeedQuery>>,
    }

    impl StubPaperFeed {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, keyword: &str, papers: Vec<PaperRecord>) -> Self {
            self.results.insert(keyword.to_string(), Ok(papers));
            self
        }

        pub fn failing(mut self, keyword: &str, message: &str) -> Self {
            self.results
                .insert(keyword.to_string(), Err(message.to_string()));
            self
        }

        pub fn called_keywords(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|q| q.keyword.clone())
                .collect()
        }
    }

    impl PaperFeed for StubPaperFeed {
        fn search(&self, query: &FeedQuery) -> Result<Vec<PaperRecord>, Error> {
            self.calls.lock().unwrap().push(query.clone());
            match self.results.get(&query.keyword) {
                Some(Ok(papers)) => Ok(papers
                    .iter()
                    .cloned()
                    .map(|mut p| {
                        p.search_keyword = query.keyword.clone();
                        p
                    })
                    .collect()),
                Some(Err(msg)) => Err(Error::http(msg.clone())),
                None => Ok(Vec::new()),
            }
        }
    }
}

#[cfg(test)]
pub use stub::StubPaperFeed;
