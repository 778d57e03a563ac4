//! プロジェクトルートの解決（CLI 指定 → SURVEY_ROOT → カレントディレクトリ）

use common::error::Error;
use std::path::PathBuf;

pub const ROOT_ENV_VAR: &str = "SURVEY_ROOT";

/// 優先順位:
/// 1. `--root` で明示されたパス
/// 2. 環境変数 SURVEY_ROOT（空文字は未設定扱い）
/// 3. カレントディレクトリ
pub fn resolve_project_root(explicit: Option<PathBuf>) -> Result<PathBuf, Error> {
    resolve_with(explicit, std::env::var(ROOT_ENV_VAR).ok())
}

fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Result<PathBuf, Error> {
    if let Some(p) = explicit {
        return Ok(p);
    }
    if let Some(v) = env_value.filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(v));
    }
    std::env::current_dir()
        .map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
}
