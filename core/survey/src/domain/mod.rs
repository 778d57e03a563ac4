//! survey 固有のドメイン型（型と不変条件）

pub mod command;
pub mod instructions;
pub mod ledger;
pub mod paper;
pub mod processed;
pub mod project_paths;
pub mod search_config;

pub use command::SurveyCommand;
pub use instructions::Instructions;
pub use ledger::{LedgerEntry, PendingPaper, SummaryStatus};
pub use paper::PaperRecord;
pub use processed::ProcessedRecord;
pub use project_paths::ProjectPaths;
pub use search_config::{SearchConfig, TopicKeywords};
