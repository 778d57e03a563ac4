//! survey 共通ライブラリ
//!
//! `survey` コマンドの usecase / adapter で共有されるエラー型とポートを提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプター（std::fs・時刻・ログ出力）
pub mod adapter;
