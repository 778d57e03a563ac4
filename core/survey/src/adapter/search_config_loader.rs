//! 検索設定読み込みの標準アダプタ（config/survey.json）

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::domain::SearchConfig;
use crate::ports::outbound::ResolveSearchConfig;

/// 標準実装（FileSystem + 既定の設定ファイルパス）
pub struct StdResolveSearchConfig {
    fs: Arc<dyn FileSystem>,
    default_path: PathBuf,
}

impl StdResolveSearchConfig {
    pub fn new(fs: Arc<dyn FileSystem>, default_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            default_path: default_path.into(),
        }
    }

    fn load(&self, path: &Path) -> Result<SearchConfig, Error> {
        let contents = self.fs.read_to_string(path)?;
        let config = SearchConfig::parse_json(&contents)
            .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))?;
        config
            .validate()
            .map_err(|msg| Error::invalid_argument(format!("{}: {}", path.display(), msg)))?;
        Ok(config)
    }
}

impl ResolveSearchConfig for StdResolveSearchConfig {
    fn resolve(&self, explicit: Option<&Path>) -> Result<SearchConfig, Error> {
        if let Some(path) = explicit {
            if !self.fs.exists(path) {
                return Err(Error::invalid_argument(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return self.load(path);
        }
        if !self.fs.exists(&self.default_path) {
            return Ok(SearchConfig::default());
        }
        self.load(&self.default_path)
    }
}
