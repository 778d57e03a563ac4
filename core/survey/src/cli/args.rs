use crate::domain::search_config::MAX_DAYS_BACK;
use crate::domain::SurveyCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

const BIN_NAME: &str = "survey";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: debug ログも stderr に出す
    pub verbose: bool,
    /// -r / --root: プロジェクトルート（未指定時は SURVEY_ROOT → カレントディレクトリ）
    pub root: Option<PathBuf>,
    /// -c / --config: 検索設定ファイル（未指定時は <root>/config/survey.json があれば使う）
    pub config_file: Option<PathBuf>,
    /// -d / --days: 検索期間（日数）の上書き
    pub days: Option<u32>,
    /// サブコマンド名（run / search / status）。未指定なら run。
    pub command: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Discover HSEARL-related papers and list pending survey tasks")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("root")
                .short('r')
                .long("root")
                .value_name("dir")
                .help("Project root containing docs/ (default: $SURVEY_ROOT or current directory)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .value_name("file")
                .help("Search config JSON (default: <root>/config/survey.json if present)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("days")
                .short('d')
                .long("days")
                .value_name("n")
                .help("Search papers submitted in the last n days")
                .value_parser(value_parser!(u32).range(1..=i64::from(MAX_DAYS_BACK)))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("command")
                .index(1)
                .value_name("command")
                .help("run (default), search or status")
                .value_parser(["run", "search", "status"]),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        root: matches.get_one::<PathBuf>("root").cloned(),
        config_file: matches.get_one::<PathBuf>("config").cloned(),
        days: matches.get_one::<u32>("days").copied(),
        command: matches.get_one::<String>("command").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を SurveyCommand に変換する
pub fn config_to_command(config: &Config) -> SurveyCommand {
    if config.help {
        return SurveyCommand::Help;
    }
    match config.command.as_deref() {
        Some("search") => SurveyCommand::Search { days: config.days },
        Some("status") => SurveyCommand::Status,
        _ => SurveyCommand::Run { days: config.days },
    }
}
