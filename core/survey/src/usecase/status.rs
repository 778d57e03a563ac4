//! タスク確認ユースケース
//!
//! 台帳の未処理エントリと、アイデア化されていないサマリーファイルを集めて指示にする。
//! どちらのファイルも無ければ「やることなし」として扱う。

use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};

use crate::domain::ledger;
use crate::domain::{Instructions, PendingPaper, ProcessedRecord};

const LAYER: &str = "usecase";
const KIND: &str = "status";
const SUMMARY_EXT: &str = "md";

/// 台帳から未処理の論文を台帳順に返す。台帳が無ければ空。
pub fn check_pending_surveys(fs: &dyn FileSystem, ledger_path: &Path) -> Result<Vec<PendingPaper>, Error> {
    if !fs.exists(ledger_path) {
        return Ok(Vec::new());
    }
    let content = fs.read_to_string(ledger_path)?;
    Ok(ledger::pending_papers(&content))
}

/// 処理済み記録を読む。無い・読めない・壊れている場合は空。
pub fn load_processed(fs: &dyn FileSystem, processed_file: &Path) -> ProcessedRecord {
    if !fs.exists(processed_file) {
        return ProcessedRecord::default();
    }
    fs.read_to_string(processed_file)
        .map(|s| ProcessedRecord::parse_lenient(&s))
        .unwrap_or_default()
}

/// サマリーディレクトリ直下の `.md` のうち、処理済み記録に無いファイル名を返す。
///
/// ディレクトリが無ければ空。結果はファイル名順。
pub fn check_unprocessed_summaries(
    fs: &dyn FileSystem,
    surveys_dir: &Path,
    processed_file: &Path,
) -> Result<Vec<String>, Error> {
    let is_dir = fs.metadata(surveys_dir).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Ok(Vec::new());
    }
    let processed = load_processed(fs, processed_file);
    let mut names: Vec<String> = fs
        .read_dir(surveys_dir)?
        .into_iter()
        .filter(|p| p.extension().map(|e| e == SUMMARY_EXT).unwrap_or(false))
        .filter(|p| fs.metadata(p).map(|m| m.is_file()).unwrap_or(false))
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|name| !processed.contains(name))
        .collect();
    names.sort();
    Ok(names)
}

/// タスク確認ユースケース
pub struct StatusUseCase {
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Log>,
}

impl StatusUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, log: Arc<dyn Log>) -> Self {
        Self { fs, log }
    }

    pub fn run(
        &self,
        ledger_path: &Path,
        surveys_dir: &Path,
        processed_file: &Path,
    ) -> Result<Instructions, Error> {
        let pending = check_pending_surveys(self.fs.as_ref(), ledger_path)?;
        let unprocessed = check_unprocessed_summaries(self.fs.as_ref(), surveys_dir, processed_file)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, LAYER, KIND, "tasks checked")
                .field("pending_papers", pending.len())
                .field("unprocessed_summaries", unprocessed.len()),
        );
        Ok(Instructions::new(pending, unprocessed))
    }
}
