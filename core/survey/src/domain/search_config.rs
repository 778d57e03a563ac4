//! 論文検索の設定（観点別キーワード・関連語彙・検索期間・フィード）
//!
//! config/survey.json から読み込む。省略したフィールドは既定値になる。

use serde::{Deserialize, Serialize};

/// 1 観点分の検索キーワード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicKeywords {
    pub topic: String,
    pub keywords: Vec<String>,
}

impl TopicKeywords {
    fn new(topic: &str, keywords: &[&str]) -> Self {
        Self {
            topic: topic.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 検索設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// HSEARL の観点ごとのキーワード（この順で検索する）
    pub topics: Vec<TopicKeywords>,
    /// タイトル + 要約にいずれかが含まれれば関連ありとする語彙（大文字小文字を区別しない）
    pub relevance_terms: Vec<String>,
    /// 何日前までの投稿を対象にするか
    pub days_back: u32,
    /// キーワード 1 件あたりの取得上限
    pub max_results: u32,
    /// arXiv カテゴリ（OR で結合）
    pub categories: Vec<String>,
    pub feed_url: String,
}

pub const DEFAULT_FEED_URL: &str = "http://export.arxiv.org/api/query";

/// days_back の上限（100 年）
pub const MAX_DAYS_BACK: u32 = 36_500;

fn default_topics() -> Vec<TopicKeywords> {
    vec![
        TopicKeywords::new(
            "認知型",
            &[
                "cognitive models",
                "personality types",
                "MBTI",
                "cognitive functions",
                "information processing",
                "thinking styles",
                "decision making",
                "cognitive assessment",
                "psychological types",
            ],
        ),
        TopicKeywords::new(
            "動機型",
            &[
                "personality motivation",
                "enneagram",
                "motivation theory",
                "behavioral drives",
                "personality dynamics",
                "core motivations",
                "fear and desire",
                "personality assessment",
            ],
        ),
        TopicKeywords::new(
            "反応型",
            &[
                "emotional response",
                "tritype",
                "emotional intelligence",
                "stress response",
                "coping mechanisms",
                "emotional regulation",
                "behavioral patterns",
                "response styles",
            ],
        ),
        TopicKeywords::new(
            "適応状態",
            &[
                "psychological health",
                "adaptation",
                "mental health levels",
                "stress tolerance",
                "resilience",
                "psychological well-being",
                "adaptive behavior",
                "coping strategies",
            ],
        ),
        TopicKeywords::new(
            "育ち",
            &[
                "developmental psychology",
                "childhood development",
                "family dynamics",
                "early experiences",
                "attachment theory",
                "parenting styles",
                "developmental trauma",
                "family systems",
            ],
        ),
        TopicKeywords::new(
            "ロール",
            &[
                "social roles",
                "role theory",
                "social identity",
                "role adaptation",
                "social masks",
                "persona",
                "social performance",
                "role flexibility",
            ],
        ),
    ]
}

fn default_relevance_terms() -> Vec<String> {
    [
        "personality",
        "cognitive",
        "emotional",
        "motivation",
        "development",
        "adaptation",
        "social",
        "psychological",
        "behavior",
        "individual differences",
        "mental health",
        "assessment",
        "modeling",
        "human factors",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            relevance_terms: default_relevance_terms(),
            days_back: 14,
            max_results: 10,
            categories: ["cs.AI", "cs.CL", "cs.LG", "stat.ML"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            feed_url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn parse_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 全観点のキーワード数
    pub fn keyword_count(&self) -> usize {
        self.topics.iter().map(|t| t.keywords.len()).sum()
    }

    /// 値の範囲を検査する。問題があればメッセージを返す。
    pub fn validate(&self) -> Result<(), String> {
        if self.days_back == 0 {
            return Err("days_back must be at least 1".to_string());
        }
        if self.days_back > MAX_DAYS_BACK {
            return Err(format!("days_back must be at most {}", MAX_DAYS_BACK));
        }
        if self.max_results == 0 {
            return Err("max_results must be at least 1".to_string());
        }
        if self.feed_url.trim().is_empty() {
            return Err("feed_url must not be empty".to_string());
        }
        if self.relevance_terms.is_empty() {
            return Err("relevance_terms must contain at least one term".to_string());
        }
        if self.relevance_terms.iter().any(|t| t.trim().is_empty()) {
            return Err("relevance_terms must not contain blank terms".to_string());
        }
        Ok(())
    }
}
