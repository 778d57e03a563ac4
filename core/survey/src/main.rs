mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use adapter::resolve_project_root;
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{Instructions, ProjectPaths, SurveyCommand};
use ports::inbound::RunSurveyApp;
use usecase::discover::DiscoverReport;
use wiring::{wire_survey, App};

const RULE: &str = "==================================================";

/// SurveyCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunSurveyApp for Runner {
    fn run(&self, command: SurveyCommand) -> Result<i32, Error> {
        let command_name = command.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Debug, "cli", "lifecycle", "command started")
                .field("command", command_name)
                .field("root", self.app.survey.paths.root().display().to_string()),
        );

        let result = match command {
            SurveyCommand::Help => {
                print_help();
                Ok(0)
            }
            SurveyCommand::Search { days } => self.app.survey.search(days).map(|report| {
                println!("{}", format_search_summary(&report));
                0
            }),
            SurveyCommand::Status => self.app.survey.status().map(|instructions| {
                println!("{}", format_instructions(&instructions));
                0
            }),
            SurveyCommand::Run { days } => self.run_pipeline(days),
        };

        let code = result.as_ref().copied().unwrap_or(1);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Debug, "cli", "lifecycle", "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

impl Runner {
    fn run_pipeline(&self, days: Option<u32>) -> Result<i32, Error> {
        println!("🚀 HSEARL研究パイプライン開始");
        println!(
            "⏰ 実行時刻: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        print_step("📚 Step 1: ArXiv論文検索");
        let report = self.app.survey.search(days)?;
        println!("{}", format_search_summary(&report));

        print_step("🤖 Step 2: タスク確認");
        let instructions = self.app.survey.status()?;
        println!("{}", format_instructions(&instructions));

        print_step("✅ パイプライン完了");
        Ok(0)
    }
}

fn print_step(title: &str) {
    println!("\n{}", RULE);
    println!("{}", title);
    println!("{}", RULE);
}

/// 検索結果の要約（stdout 用）
pub(crate) fn format_search_summary(report: &DiscoverReport) -> String {
    let mut out = if report.written > 0 {
        format!(
            "✅ {}件の新しい論文をサーベイ予定リストに追加しました。",
            report.written
        )
    } else {
        "新しい関連論文は見つかりませんでした。".to_string()
    };
    if !report.failed_keywords.is_empty() {
        out.push_str(&format!(
            "\n⚠️ 検索に失敗したキーワード: {}件 ({})",
            report.failed_keywords.len(),
            report.failed_keywords.join(", ")
        ));
    }
    out
}

/// タスク確認結果（stdout 用）
pub(crate) fn format_instructions(instructions: &Instructions) -> String {
    if instructions.is_empty() {
        "✅ すべてのタスクが完了しています。".to_string()
    } else {
        format!(
            "🤖 以下のタスクを実行してください:\n{}",
            instructions.render()
        )
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("survey: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let command = config_to_command(&config);
    if command == SurveyCommand::Help {
        print_help();
        return Ok(0);
    }
    let root = resolve_project_root(config.root.clone())?;
    let app = wire_survey(
        ProjectPaths::new(root),
        config.config_file.as_deref(),
        config.verbose,
    )?;
    let runner = Runner { app };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: survey [options] [run|search|status]");
}

fn print_help() {
    println!("Usage: survey [options] [run|search|status]");
    println!("Commands:");
    println!("  run                        Search arXiv, update the survey list, then print pending tasks (default)");
    println!("  search                     Search arXiv and update the survey list only");
    println!("  status                     Print pending paper-summary and idea-generation tasks only");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -r, --root <dir>           Project root containing docs/ (default: $SURVEY_ROOT or current directory)");
    println!("  -c, --config <file>        Search config JSON (default: <root>/config/survey.json if present)");
    println!("  -d, --days <n>             Search papers submitted in the last n days (default: 14)");
    println!("  -v, --verbose              Emit debug logs to stderr");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Files (under the project root):");
    println!("  docs/サーベイ予定論文リスト.md   Survey list (new papers are inserted under '## 処理待ち論文')");
    println!("  docs/surveys/*.md                Paper summaries");
    println!("  docs/processed_ideas.json        Summaries already turned into ideas");
    println!("  logs/survey.jsonl                Structured log");
}
