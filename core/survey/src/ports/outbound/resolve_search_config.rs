//! 検索設定の解決 Outbound ポート

use crate::domain::SearchConfig;
use common::error::Error;
use std::path::Path;

/// 検索設定を読み込む
///
/// - `explicit` が Some: そのファイルが必須（無ければ Err）
/// - None: 既定の設定ファイルがあれば読み、無ければ既定値
pub trait ResolveSearchConfig: Send + Sync {
    fn resolve(&self, explicit: Option<&Path>) -> Result<SearchConfig, Error>;
}
