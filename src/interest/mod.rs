pub mod accrual;
pub mod compound;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{CalculatorError, Result};
use crate::types::{AccrualRecord, CalculationSpec};

pub use accrual::{AccrualEngine, SimpleAccrual};
pub use compound::CompoundAccrual;

/// fixed year basis for daily rates
pub const DAYS_IN_YEAR: f64 = 365.0;

/// date format accepted everywhere
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// interest figures for one accrual day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyInterest {
    pub no_margin: f64,
    pub with_margin: f64,
}

/// trait for day-by-day interest growth models
pub trait InterestCalculator {
    /// interest for the next included day, rates in percent
    fn accrue_day(&mut self, base_rate: f64, total_rate: f64) -> DailyInterest;

    /// principal the next day's interest is computed on
    fn principal(&self) -> f64;
}

/// one day of interest on `amount` at `annual_rate` percent
pub fn simple_interest_daily(amount: f64, annual_rate: f64) -> f64 {
    amount * (annual_rate / 100.0) * (1.0 / DAYS_IN_YEAR)
}

/// parse a strict `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| CalculatorError::DateFormat {
        input: input.to_string(),
        source,
    })
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ledger for `spec` using the default engine
pub fn daily_ledger(spec: &CalculationSpec) -> Result<Vec<AccrualRecord>> {
    AccrualEngine::new().daily_ledger(spec)
}

/// total interest for `spec` using the default engine
pub fn total_interest(spec: &CalculationSpec, include_margin: bool) -> Result<f64> {
    AccrualEngine::new().total_interest(spec, include_margin)
}

/// sum one column of a ledger; empty ledgers sum to `0.0`
pub fn sum_interest(records: &[AccrualRecord], include_margin: bool) -> f64 {
    records
        .iter()
        .fold(0.0, |total, record| total + record.interest(include_margin))
}
