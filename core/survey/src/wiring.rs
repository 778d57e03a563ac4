//! 配線: 標準アダプタで SurveyUseCase を組み立てる

use std::path::Path;
use std::sync::Arc;

use common::adapter::{FanoutLog, FileJsonLog, StderrLog, StdClock, StdFileSystem};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log};

use crate::adapter::{ArxivFeed, StdResolveSearchConfig};
use crate::domain::{ProjectPaths, SearchConfig};
use crate::ports::outbound::{PaperFeed, ResolveSearchConfig};
use crate::usecase::app::SurveyUseCase;
use crate::usecase::discover::DiscoverUseCase;
use crate::usecase::status::StatusUseCase;

/// 配線済みのアプリ
pub struct App {
    pub survey: SurveyUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// ログは stderr（人間向け）と <root>/logs/survey.jsonl（JSONL）の両方に出す。
pub fn wire_survey(paths: ProjectPaths, config_file: Option<&Path>, verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = Arc::new(FanoutLog::new(vec![
        Arc::new(StderrLog::new(verbose)),
        Arc::new(FileJsonLog::new(Arc::clone(&fs), paths.log_file())),
    ]));
    let resolver = StdResolveSearchConfig::new(Arc::clone(&fs), paths.default_config_file());
    let config = resolver.resolve(config_file)?;
    let feed: Arc<dyn PaperFeed> = Arc::new(ArxivFeed::new(config.feed_url.clone()));
    Ok(wire_with(paths, config, fs, feed, Arc::new(StdClock), logger))
}

/// 任意のアダプタで App を組み立てる（テストではスタブを渡す）
pub fn wire_with(
    paths: ProjectPaths,
    config: SearchConfig,
    fs: Arc<dyn FileSystem>,
    feed: Arc<dyn PaperFeed>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Log>,
) -> App {
    let discover = Arc::new(DiscoverUseCase::new(
        Arc::clone(&fs),
        feed,
        clock,
        Arc::clone(&logger),
    ));
    let status = Arc::new(StatusUseCase::new(fs, Arc::clone(&logger)));
    App {
        survey: SurveyUseCase::new(paths, config, discover, status),
        logger,
    }
}
