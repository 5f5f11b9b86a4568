pub mod cache;
pub mod cli;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod logging;
pub mod report;
pub mod store;
pub mod types;

// re-export key types
pub use cache::LedgerCache;
pub use config::ShellConfig;
pub use decimal::{format_amount, Money};
pub use errors::{CalculatorError, Result};
pub use interest::{
    daily_ledger, is_weekend, parse_date, simple_interest_daily, total_interest, AccrualEngine,
    CompoundAccrual, InterestCalculator, SimpleAccrual,
};
pub use report::LedgerReport;
pub use store::CalculationStore;
pub use types::{AccrualRecord, CalculationId, CalculationMethod, CalculationSpec};

// re-export external dependencies that users will need
pub use chrono;
