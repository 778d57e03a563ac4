use crate::domain::instructions::NO_TASKS_MESSAGE;
use crate::domain::{Instructions, PendingPaper};
use crate::usecase::discover::DiscoverReport;
use crate::{format_instructions, format_search_summary};

#[test]
fn test_search_summary_written() {
    let report = DiscoverReport {
        written: 3,
        ..DiscoverReport::default()
    };
    assert_eq!(
        format_search_summary(&report),
        "✅ 3件の新しい論文をサーベイ予定リストに追加しました。"
    );
}

#[test]
fn test_search_summary_nothing_and_failures() {
    let report = DiscoverReport {
        failed_keywords: vec!["MBTI".to_string(), "tritype".to_string()],
        ..DiscoverReport::default()
    };
    let text = format_search_summary(&report);
    assert!(text.starts_with("新しい関連論文は見つかりませんでした。"));
    assert!(text.contains("2件 (MBTI, tritype)"));
}

#[test]
fn test_format_instructions_empty() {
    let text = format_instructions(&Instructions::default());
    assert_eq!(text, "✅ すべてのタスクが完了しています。");
    assert_ne!(text, NO_TASKS_MESSAGE);
}

#[test]
fn test_format_instructions_with_tasks() {
    let instructions = Instructions::new(
        vec![PendingPaper {
            title: "T".to_string(),
            arxiv_id: "2301.00001v1".to_string(),
            url: "http://arxiv.org/abs/2301.00001v1".to_string(),
        }],
        vec![],
    );
    let text = format_instructions(&instructions);
    assert!(text.starts_with("🤖 以下のタスクを実行してください:\n"));
    assert!(text.contains("   - 📖 T\n"));
}
