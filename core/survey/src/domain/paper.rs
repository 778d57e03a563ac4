//! フィードから取得した論文 1 件（実行ごとに生成され、永続化はされない）

/// 論文レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    /// arXiv ID（フィードの id URL の末尾。例: 2301.12345v1）
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// アブストラクト
    pub summary: String,
    /// 公開日時（フィードの文字列そのまま。例: 2024-01-15T18:00:00Z）
    pub published: String,
    pub arxiv_url: String,
    /// このレコードを見つけた検索キーワード
    pub search_keyword: String,
    pub categories: Vec<String>,
}

impl PaperRecord {
    /// バージョン接尾辞を除いた ID。台帳との重複判定に使う。
    pub fn base_id(&self) -> &str {
        base_arxiv_id(&self.id)
    }

    /// 関連性判定用のテキスト（タイトル + 要約、小文字）
    pub fn relevance_text(&self) -> String {
        format!("{} {}", self.title, self.summary).to_lowercase()
    }

    /// 語彙のいずれかを含むか。前後の空白は無視し、空の語は何にも一致しない。
    pub fn matches_any(&self, vocabulary: &[String]) -> bool {
        let text = self.relevance_text();
        vocabulary
            .iter()
            .map(|term| term.trim())
            .any(|term| !term.is_empty() && text.contains(&term.to_lowercase()))
    }
}

/// `2301.12345v2` → `2301.12345`。接尾辞が無ければそのまま返す。
pub fn base_arxiv_id(id: &str) -> &str {
    if let Some(pos) = id.rfind('v') {
        let (head, tail) = id.split_at(pos);
        let digits = &tail[1..];
        if !head.is_empty() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return head;
        }
    }
    id
}

#[cfg(test)]
pub(crate) fn sample(id: &str, title: &str, summary: &str) -> PaperRecord {
    let url = format!("http://arxiv.org/abs/{}", id);
    PaperRecord {
        id: id.to_string(),
        title: title.to_string(),
        authors: vec!["Ada Lovelace".to_string()],
        summary: summary.to_string(),
        published: "2026-10-10T12:00:00Z".to_string(),
        arxiv_url: url,
        search_keyword: "personality types".to_string(),
        categories: vec!["cs.AI".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_arxiv_id() {
        assert_eq!(base_arxiv_id("2301.12345v2"), "2301.12345");
        assert_eq!(base_arxiv_id("2301.12345"), "2301.12345");
        assert_eq!(base_arxiv_id("2301.1234v10"), "2301.1234");
        assert_eq!(base_arxiv_id("v1"), "v1");
        assert_eq!(base_arxiv_id("2301.12345v"), "2301.12345v");
    }

    #[test]
    fn test_matches_any_is_case_insensitive() {
        let p = sample("2301.00001v1", "Modeling PERSONALITY with LLMs", "nothing else");
        assert!(p.matches_any(&["personality".to_string()]));
        let p = sample("2301.00002v1", "Graph kernels", "Spectral methods");
        assert!(!p.matches_any(&["personality".to_string(), "cognitive".to_string()]));
    }

    #[test]
    fn test_matches_any_uses_summary() {
        let p = sample("2301.00003v1", "A benchmark", "We study Emotional regulation.");
        assert!(p.matches_any(&["emotional".to_string()]));
    }

    #[test]
    fn test_matches_any_ignores_blank_terms() {
        let p = sample("2301.00004v1", "Sparse matrix kernels", "GPU throughput");
        assert!(!p.matches_any(&["personality".to_string(), " ".to_string(), String::new()]));
        let q = sample("2301.00005v1", "Cognitive maps", "x");
        assert!(q.matches_any(&["  cognitive ".to_string()]));
    }
}
