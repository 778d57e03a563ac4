//! サーベイ予定論文リスト（台帳）の Markdown 表現
//!
//! 台帳は前置き + `## 処理待ち論文` 見出し + エントリの並び。
//! エントリの見出し・ラベル・マーカーは他のツールもパースするため、書式を変えてはならない。
//!
//! - 追記は見出し直後への挿入のみ（新しいものが先頭）。既存エントリのバイト列には触れない。
//! - 処理済みフラグの更新はこのモジュールの責務ではない（サマリー生成側が書き換える）。

use crate::domain::PaperRecord;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// 処理待ちセクションの見出し
pub const PENDING_SECTION_HEADER: &str = "## 処理待ち論文";

/// 未処理エントリを示すマーカー（行頭の `**` を含まない部分一致で判定する）
pub const UNPROCESSED_MARKER: &str = "サマリー生成**: [ ] 未処理";

const UNPROCESSED_LINE: &str = "**サマリー生成**: [ ] 未処理";
const PROCESSED_LINE: &str = "**サマリー生成**: [x] 処理済み";

/// 台帳が存在しないときに作る前置き（見出しまで含む）
pub const LEDGER_PREAMBLE: &str = "# サーベイ予定論文リスト

このファイルは、HSEARL研究に関連する論文のサーベイ待ちリストです。
Claude Codeによって論文サマリーが生成されると、該当項目がチェックされます。

## 処理待ち論文

";

const MAX_AUTHORS: usize = 3;
const MAX_CATEGORIES: usize = 3;
const SUMMARY_MAX_CHARS: usize = 200;
const DATE_LEN: usize = 10;

fn id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"arxiv\.org/abs/(\d{4}\.\d{4,5})").expect("valid id regex"))
}

fn heading_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^### (.+)").expect("valid heading regex"))
}

fn required_field_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"{}\*\*: ([^\n]+)", regex::escape(label))).expect("valid field regex")
}

fn optional_field_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"- \*\*{}\*\*: ([^\n]*)", regex::escape(label)))
        .expect("valid field regex")
}

struct FieldPatterns {
    arxiv_id: Regex,
    url: Regex,
    authors: Regex,
    published: Regex,
    search_keyword: Regex,
    categories: Regex,
    summary: Regex,
}

fn field_patterns() -> &'static FieldPatterns {
    static P: OnceLock<FieldPatterns> = OnceLock::new();
    P.get_or_init(|| FieldPatterns {
        arxiv_id: required_field_pattern("ArXiv ID"),
        url: required_field_pattern("URL"),
        authors: optional_field_pattern("著者"),
        published: optional_field_pattern("公開日"),
        search_keyword: optional_field_pattern("検索キーワード"),
        categories: optional_field_pattern("カテゴリ"),
        summary: optional_field_pattern("要約"),
    })
}

/// 台帳テキストから既知の arXiv ID（URL 埋め込み、バージョン無し）を集める
pub fn extract_ids(text: &str) -> BTreeSet<String> {
    id_pattern()
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// サマリー生成の処理状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatus {
    Unprocessed,
    Processed,
}

impl SummaryStatus {
    /// セクション本文にマーカーがあれば未処理。それ以外は処理済みとみなす。
    fn from_section(body: &str) -> Self {
        if body.contains(UNPROCESSED_MARKER) {
            SummaryStatus::Unprocessed
        } else {
            SummaryStatus::Processed
        }
    }

    fn line(&self) -> &'static str {
        match self {
            SummaryStatus::Unprocessed => UNPROCESSED_LINE,
            SummaryStatus::Processed => PROCESSED_LINE,
        }
    }
}

/// 台帳の 1 エントリ。フィールドは表示用に整形済みの文字列で持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub title: String,
    pub arxiv_id: String,
    pub url: String,
    pub authors: String,
    pub published: String,
    pub search_keyword: String,
    pub categories: String,
    pub summary: String,
    pub status: SummaryStatus,
}

/// 未処理の論文（サマリー生成タスクの対象）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPaper {
    pub title: String,
    pub arxiv_id: String,
    pub url: String,
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ").trim().to_string()
}

impl LedgerEntry {
    /// 論文レコードから未処理エントリを作る（著者・カテゴリは先頭 3 件、要約は 200 文字）
    ///
    /// タイトルが空なら見出しとして読み戻せないため arXiv ID で代用する。
    pub fn from_record(paper: &PaperRecord) -> Self {
        let mut authors = paper
            .authors
            .iter()
            .take(MAX_AUTHORS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if paper.authors.len() > MAX_AUTHORS {
            authors.push_str("...");
        }
        let categories = paper
            .categories
            .iter()
            .take(MAX_CATEGORIES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let summary: String = single_line(&paper.summary)
            .chars()
            .take(SUMMARY_MAX_CHARS)
            .collect();
        let title = match single_line(&paper.title) {
            t if t.is_empty() => paper.id.clone(),
            t => t,
        };
        Self {
            title,
            arxiv_id: paper.id.clone(),
            url: paper.arxiv_url.clone(),
            authors: single_line(&authors),
            published: paper.published.chars().take(DATE_LEN).collect(),
            search_keyword: single_line(&paper.search_keyword),
            categories,
            summary: format!("{}...", summary),
            status: SummaryStatus::Unprocessed,
        }
    }

    /// エントリブロックを描画する（前後の改行と区切り線を含む）
    pub fn render(&self) -> String {
        format!(
            "\n### {title}\n\
             - **ArXiv ID**: {id}\n\
             - **URL**: {url}\n\
             - **著者**: {authors}\n\
             - **公開日**: {published}\n\
             - **検索キーワード**: {keyword}\n\
             - **カテゴリ**: {categories}\n\
             - **要約**: {summary}\n\
             \n\
             {status}\n\
             \n\
             ---\n",
            title = self.title,
            id = self.arxiv_id,
            url = self.url,
            authors = self.authors,
            published = self.published,
            keyword = self.search_keyword,
            categories = self.categories,
            summary = self.summary,
            status = self.status.line(),
        )
    }

    /// 見出しと本文から復元する。ArXiv ID と URL のどちらかが無ければ None。
    pub fn parse_section(title: &str, body: &str) -> Option<Self> {
        let p = field_patterns();
        let arxiv_id = capture_trimmed(&p.arxiv_id, body)?;
        let url = capture_trimmed(&p.url, body)?;
        let optional = |re: &Regex| capture_trimmed(re, body).unwrap_or_default();
        Some(Self {
            title: title.trim().to_string(),
            arxiv_id,
            url,
            authors: optional(&p.authors),
            published: optional(&p.published),
            search_keyword: optional(&p.search_keyword),
            categories: optional(&p.categories),
            summary: optional(&p.summary),
            status: SummaryStatus::from_section(body),
        })
    }

    pub fn to_pending(&self) -> PendingPaper {
        PendingPaper {
            title: self.title.clone(),
            arxiv_id: self.arxiv_id.clone(),
            url: self.url.clone(),
        }
    }
}

fn capture_trimmed(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].trim().to_string())
}

/// `### ` 見出しごとに (タイトル, 本文) へ分割する。最初の見出しより前は捨てる。
fn sections(text: &str) -> Vec<(&str, &str)> {
    let caps: Vec<_> = heading_pattern().captures_iter(text).collect();
    let mut out = Vec::with_capacity(caps.len());
    for (i, c) in caps.iter().enumerate() {
        let (Some(whole), Some(title)) = (c.get(0), c.get(1)) else {
            continue;
        };
        let end = caps
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        out.push((title.as_str(), &text[whole.end()..end]));
    }
    out
}

/// 台帳のエントリを台帳順に復元する。必須フィールドが欠けたセクションは読み飛ばす。
pub fn parse_entries(text: &str) -> Vec<LedgerEntry> {
    sections(text)
        .into_iter()
        .filter_map(|(title, body)| LedgerEntry::parse_section(title, body))
        .collect()
}

/// 未処理マーカーを持つエントリだけを台帳順に返す
pub fn pending_papers(text: &str) -> Vec<PendingPaper> {
    parse_entries(text)
        .iter()
        .filter(|e| e.status == SummaryStatus::Unprocessed)
        .map(LedgerEntry::to_pending)
        .collect()
}

/// 新しいエントリを処理待ち見出しの直後に挿入した台帳全体を返す。
///
/// `existing` が None のときは前置き付きの新規台帳を作る。
/// 見出しが無い台帳には末尾に見出しを足してから追記する。
pub fn merge_entries(existing: Option<&str>, entries: &[LedgerEntry]) -> String {
    let content = existing.unwrap_or(LEDGER_PREAMBLE);
    let block: String = entries.iter().map(LedgerEntry::render).collect();
    match content.find(PENDING_SECTION_HEADER) {
        Some(pos) => {
            let before = &content[..pos];
            let after = &content[pos + PENDING_SECTION_HEADER.len()..];
            format!("{}{}\n{}{}", before, PENDING_SECTION_HEADER, block, after)
        }
        None => format!("{}\n{}\n{}", content, PENDING_SECTION_HEADER, block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paper::sample;

    fn entry(id: &str, title: &str) -> LedgerEntry {
        LedgerEntry::from_record(&sample(id, title, "About personality."))
    }

    #[test]
    fn test_extract_ids_empty() {
        assert!(extract_ids("").is_empty());
        assert!(extract_ids("# サーベイ予定論文リスト\n").is_empty());
    }

    #[test]
    fn test_extract_ids_distinct_and_versionless() {
        let text = "- **URL**: http://arxiv.org/abs/2301.12345v1\n\
                    - **URL**: http://arxiv.org/abs/2301.12345v2\n\
                    see https://arxiv.org/abs/2402.0001 and arxiv.org/pdf/2403.00002\n";
        let ids = extract_ids(text);
        let expected: BTreeSet<String> = ["2301.12345", "2402.0001"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(extract_ids(text), ids);
    }

    #[test]
    fn test_from_record_truncates_authors_categories_summary() {
        let mut p = sample("2301.12345v1", "Title", &"x".repeat(300));
        p.authors = vec!["A".into(), "B".into(), "C".into(), "D".into()];
        p.categories = vec!["cs.AI".into(), "cs.CL".into(), "cs.LG".into(), "stat.ML".into()];
        p.published = "2024-01-15T18:00:00Z".into();
        let e = LedgerEntry::from_record(&p);
        assert_eq!(e.authors, "A, B, C...");
        assert_eq!(e.categories, "cs.AI, cs.CL, cs.LG");
        assert_eq!(e.published, "2024-01-15");
        assert_eq!(e.summary, format!("{}...", "x".repeat(200)));
        assert_eq!(e.status, SummaryStatus::Unprocessed);
    }

    #[test]
    fn test_from_record_three_authors_has_no_ellipsis() {
        let mut p = sample("2301.12345v1", "Title", "short");
        p.authors = vec!["A".into(), "B".into(), "C".into()];
        let e = LedgerEntry::from_record(&p);
        assert_eq!(e.authors, "A, B, C");
        assert_eq!(e.summary, "short...");
    }

    #[test]
    fn test_summary_truncation_counts_chars_not_bytes() {
        let p = sample("2301.12345v1", "Title", &"性格".repeat(150));
        let e = LedgerEntry::from_record(&p);
        assert_eq!(e.summary.chars().count(), 203);
    }

    #[test]
    fn test_render_exact_format() {
        let mut p = sample("2301.12345v1", "A Study of Traits", "Personality abstract");
        p.authors = vec!["Ada".into(), "Bob".into()];
        p.published = "2024-01-15T18:00:00Z".into();
        let rendered = LedgerEntry::from_record(&p).render();
        let expected = "\n### A Study of Traits\n\
- **ArXiv ID**: 2301.12345v1\n\
- **URL**: http://arxiv.org/abs/2301.12345v1\n\
- **著者**: Ada, Bob\n\
- **公開日**: 2024-01-15\n\
- **検索キーワード**: personality types\n\
- **カテゴリ**: cs.AI\n\
- **要約**: Personality abstract...\n\
\n\
**サマリー生成**: [ ] 未処理\n\
\n\
---\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_then_parse_round_trip() {
        let e = entry("2301.12345v1", "Round Trip: Traits & States");
        let parsed = parse_entries(&e.render());
        assert_eq!(parsed, vec![e.clone()]);
        let pending = pending_papers(&e.render());
        assert_eq!(pending, vec![e.to_pending()]);
    }

    #[test]
    fn test_pending_skips_processed_and_malformed() {
        let mut done = entry("2301.00001v1", "Done");
        done.status = SummaryStatus::Processed;
        let open = entry("2301.00002v1", "Open");
        let malformed = "\n### Broken\n- **URL**: http://arxiv.org/abs/2301.00003v1\n\n**サマリー生成**: [ ] 未処理\n";
        let text = format!("{}{}{}", done.render(), malformed, open.render());
        let pending = pending_papers(&text);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Open");
        assert_eq!(pending[0].arxiv_id, "2301.00002v1");
        assert_eq!(pending[0].url, "http://arxiv.org/abs/2301.00002v1");
    }

    #[test]
    fn test_pending_accepts_hand_written_processed_marker_variants() {
        let text = "### Hand Written\n- **ArXiv ID**: 2301.11111\n- **URL**: http://arxiv.org/abs/2301.11111\n\n**サマリー生成**: [x] 処理済み (2024-02-01)\n";
        assert!(pending_papers(text).is_empty());
        assert_eq!(parse_entries(text)[0].status, SummaryStatus::Processed);
    }

    #[test]
    fn test_merge_into_missing_ledger_creates_preamble() {
        let e = entry("2301.12345v1", "First");
        let merged = merge_entries(None, &[e.clone()]);
        assert!(merged.starts_with("# サーベイ予定論文リスト\n"));
        assert!(merged.contains(&format!("## 処理待ち論文\n{}", e.render())));
        assert_eq!(parse_entries(&merged), vec![e]);
    }

    #[test]
    fn test_merge_inserts_newest_first_and_preserves_existing_bytes() {
        let old_a = entry("2301.00001v1", "Old A");
        let old_b = entry("2301.00002v1", "Old B");
        let existing = merge_entries(None, &[old_a.clone(), old_b.clone()]);
        let old_block = format!("{}{}", old_a.render(), old_b.render());
        assert!(existing.contains(&old_block));

        let new_c = entry("2301.00003v1", "New C");
        let merged = merge_entries(Some(&existing), &[new_c.clone()]);
        assert!(merged.contains(&old_block));
        let titles: Vec<String> = parse_entries(&merged).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["New C", "Old A", "Old B"]);
    }

    #[test]
    fn test_merge_keeps_text_after_second_header() {
        let existing = "# L\n\n## 処理待ち論文\n\nmemo\n\n## 処理待ち論文\n\ntrailer\n";
        let e = entry("2301.12345v1", "X");
        let merged = merge_entries(Some(existing), &[e]);
        assert!(merged.ends_with("\n\nmemo\n\n## 処理待ち論文\n\ntrailer\n"));
        assert!(merged.starts_with("# L\n\n## 処理待ち論文\n\n### X\n"));
    }

    #[test]
    fn test_merge_without_header_appends_header() {
        let existing = "# 手書きの台帳\n\nメモ\n";
        let e = entry("2301.12345v1", "X");
        let merged = merge_entries(Some(existing), &[e.clone()]);
        assert_eq!(
            merged,
            format!("# 手書きの台帳\n\nメモ\n\n## 処理待ち論文\n{}", e.render())
        );
    }

    #[test]
    fn test_merged_ids_become_known() {
        let e = entry("2301.12345v1", "X");
        let merged = merge_entries(None, &[e]);
        assert!(extract_ids(&merged).contains("2301.12345"));
    }

    #[test]
    fn test_multiline_title_is_flattened() {
        let p = sample("2301.12345v1", "Line one\n  line two", "s");
        let e = LedgerEntry::from_record(&p);
        assert_eq!(e.title, "Line one   line two");
        assert_eq!(pending_papers(&e.render())[0].title, "Line one   line two");
    }

    #[test]
    fn test_blank_title_falls_back_to_id() {
        let p = sample("2301.12345v1", "  \n ", "s");
        let e = LedgerEntry::from_record(&p);
        assert_eq!(e.title, "2301.12345v1");
        let pending = pending_papers(&e.render());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].arxiv_id, "2301.12345v1");
    }

    #[test]
    fn test_parse_many_sections_reads_every_field() {
        let text: String = (0..50)
            .map(|i| entry(&format!("2301.{:05}v1", i), &format!("Paper {}", i)).render())
            .collect();
        let entries = parse_entries(&text);
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[49].arxiv_id, "2301.00049v1");
        assert_eq!(entries[49].authors, "Ada Lovelace");
        assert_eq!(entries[49].categories, "cs.AI");
    }
}
