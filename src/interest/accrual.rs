use chrono::NaiveDate;
use tracing::debug;

use crate::errors::Result;
use crate::interest::{
    is_weekend, simple_interest_daily, sum_interest, CompoundAccrual, DailyInterest,
    InterestCalculator,
};
use crate::types::{AccrualRecord, CalculationMethod, CalculationSpec};

/// simple interest: every day accrues off the original principal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleAccrual {
    principal: f64,
}

impl SimpleAccrual {
    pub fn new(principal: f64) -> Self {
        Self { principal }
    }
}

impl InterestCalculator for SimpleAccrual {
    fn accrue_day(&mut self, base_rate: f64, total_rate: f64) -> DailyInterest {
        DailyInterest {
            no_margin: simple_interest_daily(self.principal, base_rate),
            with_margin: simple_interest_daily(self.principal, total_rate),
        }
    }

    fn principal(&self) -> f64 {
        self.principal
    }
}

/// engine for walking a date range and accruing daily interest
#[derive(Debug, Clone, Copy, Default)]
pub struct AccrualEngine;

impl AccrualEngine {
    pub fn new() -> Self {
        Self
    }

    /// calendar days in the range, inclusive; zero when end is before start
    pub fn total_days(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        let days = (end - start).num_days() + 1;
        days.max(0) as u64
    }

    /// dates that accrue interest for `spec`, in increasing order
    pub fn accrual_dates<'a>(
        &self,
        spec: &'a CalculationSpec,
    ) -> impl Iterator<Item = NaiveDate> + 'a {
        let total_days = self.total_days(spec.start_date, spec.end_date) as usize;
        spec.start_date
            .iter_days()
            .take(total_days)
            .filter(move |date| !(spec.exclude_weekends && is_weekend(*date)))
    }

    /// per-day ledger for `spec`
    ///
    /// the method is resolved before the walk, so an unknown method fails
    /// without producing any record.
    pub fn daily_ledger(&self, spec: &CalculationSpec) -> Result<Vec<AccrualRecord>> {
        let method = spec.calculation_method()?;

        let (records, closing_principal) = match method {
            CalculationMethod::Simple => self.walk(spec, SimpleAccrual::new(spec.amount)),
            CalculationMethod::Compound => self.walk(spec, CompoundAccrual::new(spec.amount)),
        };

        debug!(
            start = %spec.start_date,
            end = %spec.end_date,
            %method,
            days = records.len(),
            closing_principal,
            "computed accrual ledger"
        );

        Ok(records)
    }

    /// sum of the with-margin or no-margin column of the ledger
    pub fn total_interest(&self, spec: &CalculationSpec, include_margin: bool) -> Result<f64> {
        let records = self.daily_ledger(spec)?;
        Ok(sum_interest(&records, include_margin))
    }

    /// ledger plus the principal left after the last accrued day
    fn walk<C: InterestCalculator>(
        &self,
        spec: &CalculationSpec,
        mut calculator: C,
    ) -> (Vec<AccrualRecord>, f64) {
        let base_rate = spec.base_rate;
        let total_rate = spec.total_rate();

        let records = self
            .accrual_dates(spec)
            .zip(1..)
            .map(|(accrual_date, days_elapsed)| {
                let interest = calculator.accrue_day(base_rate, total_rate);
                AccrualRecord {
                    accrual_date,
                    interest_no_margin: interest.no_margin,
                    interest_with_margin: interest.with_margin,
                    days_elapsed,
                }
            })
            .collect();

        (records, calculator.principal())
    }
}
