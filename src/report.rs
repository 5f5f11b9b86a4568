//! serializable ledger report for one calculation

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::interest::{sum_interest, AccrualEngine};
use crate::types::{AccrualRecord, CalculationId, CalculationSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<CalculationId>,
    pub calculation: CalculationSpec,
    pub summary: SummaryView,
    pub records: Vec<AccrualRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub days_accrued: usize,
    pub total_interest_no_margin: f64,
    pub total_interest_with_margin: f64,
}

impl LedgerReport {
    /// build from an already computed ledger
    pub fn from_records(
        id: Option<CalculationId>,
        spec: &CalculationSpec,
        records: &[AccrualRecord],
    ) -> Self {
        LedgerReport {
            id,
            calculation: spec.clone(),
            summary: SummaryView {
                days_accrued: records.len(),
                total_interest_no_margin: sum_interest(records, false),
                total_interest_with_margin: sum_interest(records, true),
            },
            records: records.to_vec(),
        }
    }

    pub fn compute(engine: &AccrualEngine, spec: &CalculationSpec) -> Result<Self> {
        let records = engine.daily_ledger(spec)?;
        Ok(Self::from_records(None, spec, &records))
    }

    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CalculationSpec {
        CalculationSpec::builder()
            .start_date("2024-01-01")
            .end_date("2024-01-10")
            .amount(1000.0)
            .currency("USD")
            .base_rate(5.0)
            .margin(2.0)
            .exclude_weekends(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_totals() {
        let engine = AccrualEngine::new();
        let spec = spec();
        let report = LedgerReport::compute(&engine, &spec).unwrap();

        assert_eq!(report.summary.days_accrued, 8);
        assert_eq!(
            report.summary.total_interest_with_margin,
            engine.total_interest(&spec, true).unwrap()
        );
        assert_eq!(
            report.summary.total_interest_no_margin,
            engine.total_interest(&spec, false).unwrap()
        );
        assert!(report.id.is_none());
    }

    #[test]
    fn test_json_shape() {
        let spec = spec();
        let records = AccrualEngine::new().daily_ledger(&spec).unwrap();
        let report = LedgerReport::from_records(Some(3), &spec, &records);

        let value: serde_json::Value = serde_json::from_str(&report.json()).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["calculation"]["start_date"], "2024-01-01");
        assert_eq!(value["calculation"]["method"], "simple");
        assert_eq!(value["records"].as_array().unwrap().len(), 8);
        assert_eq!(value["records"][5]["Accrual Date"], "2024-01-08");
        assert_eq!(value["records"][5]["Days Elapsed"], 6);
    }
}
