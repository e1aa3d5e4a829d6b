pub mod dataset;
pub mod model;
pub mod parser;
pub mod rules;

pub use dataset::FeedingDataset;
pub use model::{DayPlan, MonthRecord, ParseDiagnostics, SkipReason};
pub use parser::{FeedingPlanParser, ParseOutcome};
pub use rules::quick_rules;
