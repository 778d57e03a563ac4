//! survey アプリのユースケース（検索・タスク確認）

use std::sync::Arc;

use common::error::Error;

use crate::domain::{Instructions, ProjectPaths, SearchConfig};
use crate::usecase::discover::{DiscoverReport, DiscoverUseCase};
use crate::usecase::status::StatusUseCase;

/// survey のユースケース
///
/// パイプラインは search（台帳更新）→ status（更新後の台帳とサマリーからタスク収集）の順に呼ぶ。
pub struct SurveyUseCase {
    pub paths: ProjectPaths,
    pub config: SearchConfig,
    discover: Arc<DiscoverUseCase>,
    status: Arc<StatusUseCase>,
}

impl SurveyUseCase {
    pub fn new(
        paths: ProjectPaths,
        config: SearchConfig,
        discover: Arc<DiscoverUseCase>,
        status: Arc<StatusUseCase>,
    ) -> Self {
        Self {
            paths,
            config,
            discover,
            status,
        }
    }

    /// 検索期間を上書きした設定で検索する
    pub fn search(&self, days: Option<u32>) -> Result<DiscoverReport, Error> {
        let mut config = self.config.clone();
        if let Some(d) = days {
            config.days_back = d;
            config
                .validate()
                .map_err(|e| Error::invalid_argument(format!("--days {}: {}", d, e)))?;
        }
        self.discover.run(&config, &self.paths.ledger_file())
    }

    pub fn status(&self) -> Result<Instructions, Error> {
        self.status.run(
            &self.paths.ledger_file(),
            &self.paths.surveys_dir(),
            &self.paths.processed_file(),
        )
    }
}
