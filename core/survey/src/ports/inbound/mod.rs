//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::SurveyCommand;
use common::error::Error;

/// survey アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出し、戻り値を終了コードにする。
pub trait RunSurveyApp {
    fn run(&self, command: SurveyCommand) -> Result<i32, Error>;
}
