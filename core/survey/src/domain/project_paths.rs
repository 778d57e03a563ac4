//! プロジェクト内の固定パス（台帳・サマリー・処理済み記録・設定・ログ）

use std::path::{Path, PathBuf};

const DOCS_DIR: &str = "docs";
const LEDGER_FILENAME: &str = "サーベイ予定論文リスト.md";
const SURVEYS_DIR: &str = "surveys";
const PROCESSED_FILENAME: &str = "processed_ideas.json";
const CONFIG_PATH: &str = "config/survey.json";
const LOG_PATH: &str = "logs/survey.jsonl";

/// プロジェクトルートからの解決済みパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// docs/サーベイ予定論文リスト.md
    pub fn ledger_file(&self) -> PathBuf {
        self.root.join(DOCS_DIR).join(LEDGER_FILENAME)
    }

    /// docs/surveys
    pub fn surveys_dir(&self) -> PathBuf {
        self.root.join(DOCS_DIR).join(SURVEYS_DIR)
    }

    /// docs/processed_ideas.json
    pub fn processed_file(&self) -> PathBuf {
        self.root.join(DOCS_DIR).join(PROCESSED_FILENAME)
    }

    pub fn default_config_file(&self) -> PathBuf {
        self.root.join(CONFIG_PATH)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let p = ProjectPaths::new("/proj");
        assert_eq!(p.ledger_file(), PathBuf::from("/proj/docs/サーベイ予定論文リスト.md"));
        assert_eq!(p.surveys_dir(), PathBuf::from("/proj/docs/surveys"));
        assert_eq!(p.processed_file(), PathBuf::from("/proj/docs/processed_ideas.json"));
        assert_eq!(p.default_config_file(), PathBuf::from("/proj/config/survey.json"));
        assert_eq!(p.log_file(), PathBuf::from("/proj/logs/survey.jsonl"));
    }
}
