//! 下流の作業者（人間 / エージェント）向けの実行指示
//!
//! 未処理の論文とアイデア化されていないサマリーを、それぞれ最大 3 件まで並べる。

use crate::domain::PendingPaper;

/// タスクが無いときの定型文
pub const NO_TASKS_MESSAGE: &str = "現在、Claude Codeでの処理が必要なタスクはありません。";

/// 各リストで列挙する上限
pub const MAX_LISTED: usize = 3;

/// 指示の材料
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instructions {
    pub pending_papers: Vec<PendingPaper>,
    /// 未処理サマリーのファイル名
    pub unprocessed_summaries: Vec<String>,
}

fn push_more(out: &mut String, total: usize) {
    if total > MAX_LISTED {
        out.push_str(&format!("   - ... 他 {}件\n", total - MAX_LISTED));
    }
}

impl Instructions {
    pub fn new(pending_papers: Vec<PendingPaper>, unprocessed_summaries: Vec<String>) -> Self {
        Self {
            pending_papers,
            unprocessed_summaries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending_papers.is_empty() && self.unprocessed_summaries.is_empty()
    }

    /// 指示文を組み立てる。どちらも空なら `NO_TASKS_MESSAGE` を返す。
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_TASKS_MESSAGE.to_string();
        }
        let mut out = String::new();
        if !self.pending_papers.is_empty() {
            self.render_paper_section(&mut out);
        }
        if !self.unprocessed_summaries.is_empty() {
            self.render_idea_section(&mut out);
        }
        out
    }

    fn render_paper_section(&self, out: &mut String) {
        out.push_str(&format!(
            "\n### 📄 論文サマリー生成タスク\n\
             未処理の論文が {}件 あります。\n\
             \n\
             **実行手順:**\n\
             1. `docs/prompts/paper_summary_prompt.md` を読み込んで手順を確認\n\
             2. 以下の論文から1件を選択してサマリーを生成:\n",
            self.pending_papers.len()
        ));
        for paper in self.pending_papers.iter().take(MAX_LISTED) {
            out.push_str(&format!("   - 📖 {}\n", paper.title));
            out.push_str(&format!("     ArXiv ID: {}\n", paper.arxiv_id));
            out.push_str(&format!("     URL: {}\n", paper.url));
        }
        push_more(out, self.pending_papers.len());
        out.push_str(
            "3. 落合フォーマット + HSEARLとの関連性分析\n\
             4. `docs/surveys/[ArXiv ID]_[タイトル].md` として保存\n\
             5. サーベイ予定リストの該当項目を「処理済み」に更新\n",
        );
    }

    fn render_idea_section(&self, out: &mut String) {
        out.push_str(&format!(
            "\n### 💡 アイデア生成タスク\n\
             未処理のサマリーが {}件 あります。\n\
             \n\
             **実行手順:**\n\
             1. `docs/prompts/idea_generation_prompt.md` を読み込んで手順を確認\n\
             2. `docs/base/HSEARL（ハール）.md` でHSEARLの理解を深める\n\
             3. 以下のサマリーファイルから革新的アイデアを生成:\n",
            self.unprocessed_summaries.len()
        ));
        for name in self.unprocessed_summaries.iter().take(MAX_LISTED) {
            out.push_str(&format!("   - 📄 {}\n", name));
        }
        push_more(out, self.unprocessed_summaries.len());
        out.push_str(
            "4. HSEARLの各観点（認知型、動機型、反応型、適応状態、育ち、ロール）から最低1つずつ\n\
             5. `docs/idea/[日時]_[観点]_[タイトル].md` として保存\n\
             6. 処理済みファイルを `docs/processed_ideas.json` に記録\n",
        );
    }
}
