//! 論文検索と台帳更新のユースケース
//!
//! 観点ごとのキーワードでフィードを引き、重複・既知・無関係な論文を除いて台帳に挿入する。
//! キーワード単位の失敗はログに残して次のキーワードへ進む（他の検索を止めない）。

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};

use crate::domain::ledger::{self, LedgerEntry};
use crate::domain::{PaperRecord, SearchConfig};
use crate::ports::outbound::{FeedQuery, PaperFeed};

const LAYER: &str = "usecase";
const KIND: &str = "search";

/// 1 回の検索の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverReport {
    /// 台帳にあった既知 ID の数
    pub existing: usize,
    /// フィードから受け取った件数（重複込み）
    pub fetched: usize,
    /// 新規かつ関連ありと判定された件数
    pub accepted: usize,
    /// 台帳に書き込んだ件数
    pub written: usize,
    /// 失敗したキーワード
    pub failed_keywords: Vec<String>,
}

/// 台帳に載っている arXiv ID を読む。台帳が無い・空なら空集合。
pub fn load_existing_ids(fs: &dyn FileSystem, ledger_path: &Path) -> Result<BTreeSet<String>, Error> {
    if !fs.exists(ledger_path) {
        return Ok(BTreeSet::new());
    }
    let content = fs.read_to_string(ledger_path)?;
    Ok(ledger::extract_ids(&content))
}

/// キーワードごとにフィードを引き、結果を発見順に連結する。
///
/// 失敗したキーワードは warn ログを出して `failed` に積み、残りの検索を続ける。
pub fn collect_candidates(
    feed: &dyn PaperFeed,
    config: &SearchConfig,
    since: NaiveDate,
    until: NaiveDate,
    log: &dyn Log,
    failed: &mut Vec<String>,
) -> Vec<PaperRecord> {
    let mut papers = Vec::new();
    for topic in &config.topics {
        let _ = log.log(
            &LogRecord::new(LogLevel::Info, LAYER, KIND, format!("🔍 {}関連論文を検索中...", topic.topic))
                .field("keywords", topic.keywords.len()),
        );
        let before = papers.len();
        for keyword in &topic.keywords {
            let query = FeedQuery {
                keyword: keyword.clone(),
                categories: config.categories.clone(),
                max_results: config.max_results,
                since,
                until,
            };
            match feed.search(&query) {
                Ok(found) => {
                    let _ = log.log(
                        &LogRecord::new(LogLevel::Debug, LAYER, KIND, "keyword searched")
                            .field("keyword", keyword.as_str())
                            .field("count", found.len()),
                    );
                    papers.extend(found);
                }
                Err(e) => {
                    let _ = log.log(
                        &LogRecord::new(
                            LogLevel::Warn,
                            LAYER,
                            KIND,
                            format!("キーワード '{}' の検索でエラー: {}", keyword, e),
                        )
                        .field("keyword", keyword.as_str()),
                    );
                    failed.push(keyword.clone());
                }
            }
        }
        let _ = log.log(
            &LogRecord::new(
                LogLevel::Info,
                LAYER,
                KIND,
                format!("   {}件の論文を発見", papers.len() - before),
            )
            .field("topic", topic.topic.as_str()),
        );
    }
    papers
}

/// 重複除去 → 既知 ID の除外 → 関連語彙での絞り込み。順序は発見順のまま。
///
/// ID はバージョン接尾辞を除いて比較する（台帳の URL から取れる ID にはバージョンが無い）。
pub fn filter_relevant(
    papers: Vec<PaperRecord>,
    existing_ids: &BTreeSet<String>,
    vocabulary: &[String],
) -> Vec<PaperRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    papers
        .into_iter()
        .filter(|p| {
            let id = p.base_id();
            !existing_ids.contains(id) && seen.insert(id.to_string())
        })
        .filter(|p| p.matches_any(vocabulary))
        .collect()
}

/// 論文を台帳に挿入し、書き込んだ件数を返す。0 件なら台帳に触れない。
///
/// 読み込み → メモリ上で挿入 → 全体を上書き。ロックはしない。
pub fn merge_into_ledger(
    fs: &dyn FileSystem,
    ledger_path: &Path,
    papers: &[PaperRecord],
) -> Result<usize, Error> {
    if papers.is_empty() {
        return Ok(0);
    }
    let existing = if fs.exists(ledger_path) {
        Some(fs.read_to_string(ledger_path)?)
    } else {
        if let Some(parent) = ledger_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs.create_dir_all(parent)?;
        }
        None
    };
    let entries: Vec<LedgerEntry> = papers.iter().map(LedgerEntry::from_record).collect();
    let updated = ledger::merge_entries(existing.as_deref(), &entries);
    fs.write(ledger_path, &updated)?;
    Ok(entries.len())
}

/// 論文検索ユースケース
pub struct DiscoverUseCase {
    fs: Arc<dyn FileSystem>,
    feed: Arc<dyn PaperFeed>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl DiscoverUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        feed: Arc<dyn PaperFeed>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            fs,
            feed,
            clock,
            log,
        }
    }

    /// 検索期間（両端を含む日付）。日付の範囲を越える days_back は Err。
    pub fn window(&self, days_back: u32) -> Result<(NaiveDate, NaiveDate), Error> {
        let now = self.clock.now();
        let since = now
            .checked_sub_signed(Duration::days(i64::from(days_back)))
            .ok_or_else(|| {
                Error::invalid_argument(format!("days_back {} is out of the date range", days_back))
            })?;
        Ok((since.date_naive(), now.date_naive()))
    }

    pub fn run(&self, config: &SearchConfig, ledger_path: &Path) -> Result<DiscoverReport, Error> {
        let existing_ids = load_existing_ids(self.fs.as_ref(), ledger_path)?;
        let _ = self.log.log(
            &LogRecord::new(
                LogLevel::Info,
                LAYER,
                KIND,
                format!("📋 既存の論文数: {}件", existing_ids.len()),
            )
            .field("ledger", ledger_path.display().to_string()),
        );

        let (since, until) = self.window(config.days_back)?;
        let mut failed_keywords = Vec::new();
        let papers = collect_candidates(
            self.feed.as_ref(),
            config,
            since,
            until,
            self.log.as_ref(),
            &mut failed_keywords,
        );
        let fetched = papers.len();
        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            LAYER,
            KIND,
            format!("📊 合計 {}件の論文を発見", fetched),
        ));

        let relevant = filter_relevant(papers, &existing_ids, &config.relevance_terms);
        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            LAYER,
            KIND,
            format!("✨ そのうち {}件が新規で関連性が高い論文です", relevant.len()),
        ));

        let written = merge_into_ledger(self.fs.as_ref(), ledger_path, &relevant)?;
        if written > 0 {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Info, LAYER, "ledger", "ledger updated")
                    .field("written", written)
                    .field("ledger", ledger_path.display().to_string()),
            );
        }

        Ok(DiscoverReport {
            existing: existing_ids.len(),
            fetched,
            accepted: relevant.len(),
            written,
            failed_keywords,
        })
    }
}
