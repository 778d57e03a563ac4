//! survey コマンドの enum（Command Pattern）
//!
//! 検索のみ・状況確認のみ・両方（パイプライン）の分岐を enum で明示する。

/// survey の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyCommand {
    /// ヘルプ表示
    Help,
    /// 論文検索 → 台帳更新 → タスク確認
    Run { days: Option<u32> },
    /// 論文検索と台帳更新のみ
    Search { days: Option<u32> },
    /// 台帳とサマリーを調べて指示を出力するのみ
    Status,
}

impl SurveyCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SurveyCommand::Help => "help",
            SurveyCommand::Run { .. } => "run",
            SurveyCommand::Search { .. } => "search",
            SurveyCommand::Status => "status",
        }
    }
}
