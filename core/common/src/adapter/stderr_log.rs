//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! fields の全量は出さず要点のみ（巨大化防止）。debug は verbose 時のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = record.fields.as_ref().filter(|f| !f.is_empty()) else {
        return String::new();
    };
    let s = fields
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ");
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}...", truncated)
}

/// 1 行に整形する（テスト用に分離）
pub(crate) fn format_line(record: &LogRecord) -> String {
    let summary = fields_summary(record);
    if summary.is_empty() {
        format!("[{}] {}", record.level.as_str(), record.message)
    } else {
        format!("[{}] {} ({})", record.level.as_str(), record.message, summary)
    }
}

/// 人間向けログ（stderr へ 1 行ずつ出力）
#[derive(Debug, Clone, Default)]
pub struct StderrLog {
    verbose: bool,
}

impl StderrLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level == LogLevel::Debug && !self.verbose {
            return Ok(());
        }
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
