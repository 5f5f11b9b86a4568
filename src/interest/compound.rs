use crate::interest::{simple_interest_daily, DailyInterest, InterestCalculator};

/// daily compounding off a growing principal
///
/// both figures of a day are computed off the already compounded amount,
/// and only the with-margin figure is added back to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundAccrual {
    current_amount: f64,
}

impl CompoundAccrual {
    pub fn new(principal: f64) -> Self {
        Self {
            current_amount: principal,
        }
    }
}

impl InterestCalculator for CompoundAccrual {
    fn accrue_day(&mut self, base_rate: f64, total_rate: f64) -> DailyInterest {
        let interest = DailyInterest {
            no_margin: simple_interest_daily(self.current_amount, base_rate),
            with_margin: simple_interest_daily(self.current_amount, total_rate),
        };
        self.current_amount += interest.with_margin;
        interest
    }

    fn principal(&self) -> f64 {
        self.current_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::AccrualEngine;
    use crate::types::CalculationSpec;
    use approx::assert_relative_eq;

    fn compound_spec(start: &str, end: &str) -> CalculationSpec {
        CalculationSpec::builder()
            .start_date(start)
            .end_date(end)
            .amount(1000.0)
            .currency("USD")
            .base_rate(5.0)
            .margin(2.0)
            .method("compound")
            .build()
            .unwrap()
    }

    #[test]
    fn test_principal_grows_by_margin_interest() {
        let mut accrual = CompoundAccrual::new(1000.0);

        let day_one = accrual.accrue_day(5.0, 7.0);
        assert_eq!(accrual.principal(), 1000.0 + day_one.with_margin);

        let day_two = accrual.accrue_day(5.0, 7.0);
        assert_eq!(day_two.with_margin, simple_interest_daily(1000.0 + day_one.with_margin, 7.0));
        assert!(day_two.with_margin > day_one.with_margin);
    }

    #[test]
    fn test_no_margin_uses_compounded_amount() {
        let mut accrual = CompoundAccrual::new(1000.0);
        let day_one = accrual.accrue_day(5.0, 7.0);
        let day_two = accrual.accrue_day(5.0, 7.0);

        assert_eq!(day_two.no_margin, simple_interest_daily(1000.0 + day_one.with_margin, 5.0));
        assert_ne!(day_two.no_margin, simple_interest_daily(1000.0, 5.0));
    }

    #[test]
    fn test_compound_ledger() {
        let records = AccrualEngine::new()
            .daily_ledger(&compound_spec("2024-01-01", "2024-01-10"))
            .unwrap();

        assert_eq!(records.len(), 10);
        assert_eq!(records[0].interest_no_margin, simple_interest_daily(1000.0, 5.0));
        assert_eq!(records[0].interest_with_margin, simple_interest_daily(1000.0, 7.0));
        assert_eq!(records[0].days_elapsed, 1);

        let second = simple_interest_daily(1000.0 + records[0].interest_with_margin, 7.0);
        assert_eq!(records[1].interest_with_margin, second);
    }

    #[test]
    fn test_each_day_compounds_on_prior_accruals() {
        let mut spec = compound_spec("2024-01-01", "2024-02-29");
        spec.exclude_weekends = true;
        let records = AccrualEngine::new().daily_ledger(&spec).unwrap();

        let mut amount = 1000.0;
        for record in &records {
            assert_eq!(record.interest_with_margin, simple_interest_daily(amount, 7.0));
            assert_eq!(record.interest_no_margin, simple_interest_daily(amount, 5.0));
            amount += record.interest_with_margin;
        }
    }

    #[test]
    fn test_compound_exceeds_simple() {
        let engine = AccrualEngine::new();
        let compound = compound_spec("2024-01-01", "2024-12-31");
        let mut simple = compound.clone();
        simple.method = "simple".to_string();

        let compound_total = engine.total_interest(&compound, true).unwrap();
        let simple_total = engine.total_interest(&simple, true).unwrap();

        assert!(compound_total > simple_total);
        // 366 days at 7% simple on 1000
        assert_relative_eq!(simple_total, 1000.0 * 0.07 * 366.0 / 365.0, epsilon = 1e-9);
        // daily compounding for 366 days: 1000 * ((1 + 0.07/365)^366 - 1)
        let expected = 1000.0 * ((1.0 + 0.07 / 365.0_f64).powi(366) - 1.0);
        assert_relative_eq!(compound_total, expected, max_relative = 1e-9);
    }
}
