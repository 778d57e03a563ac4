//! arXiv API の Atom 応答から論文レコードを取り出す
//!
//! arXiv の応答は要素の構造が固定なので、要素単位の正規表現で読む。
//! 名前空間付きの要素（arxiv:comment 等）は使わない。

use crate::domain::PaperRecord;
use common::error::Error;
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    entry: Regex,
    id: Regex,
    title: Regex,
    summary: Regex,
    published: Regex,
    author_name: Regex,
    category: Regex,
}

fn patterns() -> &'static Patterns {
    static P: OnceLock<Patterns> = OnceLock::new();
    P.get_or_init(|| {
        let re = |s: &str| Regex::new(s).expect("valid atom regex");
        Patterns {
            entry: re(r"(?s)<entry>(.*?)</entry>"),
            id: re(r"(?s)<id>(.*?)</id>"),
            title: re(r"(?s)<title[^>]*>(.*?)</title>"),
            summary: re(r"(?s)<summary[^>]*>(.*?)</summary>"),
            published: re(r"(?s)<published>(.*?)</published>"),
            author_name: re(r"(?s)<author>\s*<name>(.*?)</name>"),
            category: re(r#"<category[^>]*\sterm="([^"]*)""#),
        }
    })
}

/// XML の定義済み実体と数値文字参照を戻す
fn unescape_xml(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let name = &tail[1..end];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => name
                .strip_prefix("#x")
                .and_then(|h| u32::from_str_radix(h, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|d| d.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// 改行を空白にして前後を詰める
fn clean_text(raw: &str) -> String {
    unescape_xml(raw).replace('\n', " ").trim().to_string()
}

fn first(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| clean_text(&c[1]))
}

/// Atom 文書全体を解析する。
///
/// arXiv はクエリ不正時にもステータス 200 で「Error」エントリを返すため、
/// id が `/api/errors` のエントリがあれば Err にする。
pub fn parse_feed(xml: &str, keyword: &str) -> Result<Vec<PaperRecord>, Error> {
    let p = patterns();
    let mut papers = Vec::new();
    for entry in p.entry.captures_iter(xml) {
        let body = &entry[1];
        let Some(id_url) = first(&p.id, body) else {
            continue;
        };
        if id_url.contains("/api/errors") {
            let detail = first(&p.summary, body).unwrap_or_else(|| id_url.clone());
            return Err(Error::feed(format!("arXiv API error: {}", detail)));
        }
        let id = id_url.rsplit('/').next().unwrap_or_default().to_string();
        if id.is_empty() {
            continue;
        }
        papers.push(PaperRecord {
            id,
            title: first(&p.title, body).unwrap_or_default(),
            authors: p
                .author_name
                .captures_iter(body)
                .map(|c| clean_text(&c[1]))
                .collect(),
            summary: first(&p.summary, body).unwrap_or_default(),
            published: first(&p.published, body).unwrap_or_default(),
            arxiv_url: id_url,
            search_keyword: keyword.to_string(),
            categories: p
                .category
                .captures_iter(body)
                .map(|c| unescape_xml(&c[1]))
                .collect(),
        });
    }
    Ok(papers)
}
