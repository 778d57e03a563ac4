//! 処理済みアイデア記録（processed_ideas.json）
//!
//! アイデア生成側が書き換えるファイル。ここでは読むだけ。

use serde::Deserialize;
use std::collections::BTreeSet;

/// アイデア化済みのサマリーファイル名の集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessedRecord {
    #[serde(default)]
    pub processed_summaries: BTreeSet<String>,
}

impl ProcessedRecord {
    pub fn parse_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 壊れた JSON・想定外の形は空集合として扱う
    pub fn parse_lenient(json: &str) -> Self {
        Self::parse_json(json).unwrap_or_default()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.processed_summaries.contains(file_name)
    }
}
