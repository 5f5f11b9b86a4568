use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::interest::parse_date;

/// identifier of a stored calculation
pub type CalculationId = i64;

/// interest growth model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// interest always computed off the original principal
    Simple,
    /// principal grows by each day's with-margin interest
    Compound,
}

impl CalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::Simple => "simple",
            CalculationMethod::Compound => "compound",
        }
    }

    /// capitalized name for tables
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Simple => "Simple",
            CalculationMethod::Compound => "Compound",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "simple" => Ok(CalculationMethod::Simple),
            "compound" => Ok(CalculationMethod::Compound),
            other => Err(CalculatorError::UnknownMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// calculation request
///
/// `method` keeps the raw selector as supplied; it is resolved when the
/// ledger is computed, so an unknown value fails there and not on insert.
/// float fields compare and hash by bit pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationSpec {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: f64,
    pub currency: String,
    pub base_rate: f64,
    pub margin: f64,
    pub exclude_weekends: bool,
    pub method: String,
}

impl CalculationSpec {
    pub fn builder() -> CalculationSpecBuilder {
        CalculationSpecBuilder::new()
    }

    /// resolve the method selector
    pub fn calculation_method(&self) -> Result<CalculationMethod> {
        self.method.parse()
    }

    /// base rate plus margin, in percent
    pub fn total_rate(&self) -> f64 {
        self.base_rate + self.margin
    }

    fn key(&self) -> (NaiveDate, NaiveDate, u64, &str, u64, u64, bool, &str) {
        (
            self.start_date,
            self.end_date,
            self.amount.to_bits(),
            self.currency.as_str(),
            self.base_rate.to_bits(),
            self.margin.to_bits(),
            self.exclude_weekends,
            self.method.as_str(),
        )
    }
}

impl PartialEq for CalculationSpec {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CalculationSpec {}

impl Hash for CalculationSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// builder for calculation specs
///
/// dates are taken as `YYYY-MM-DD` text and parsed on build; a missing date
/// fails the same way as a malformed one.
#[derive(Debug, Clone)]
pub struct CalculationSpecBuilder {
    start_date: Option<String>,
    end_date: Option<String>,
    amount: f64,
    currency: String,
    base_rate: f64,
    margin: f64,
    exclude_weekends: bool,
    method: String,
}

impl Default for CalculationSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationSpecBuilder {
    pub fn new() -> Self {
        Self {
            start_date: None,
            end_date: None,
            amount: 0.0,
            currency: String::new(),
            base_rate: 0.0,
            margin: 0.0,
            exclude_weekends: false,
            method: CalculationMethod::Simple.as_str().to_string(),
        }
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn base_rate(mut self, rate: f64) -> Self {
        self.base_rate = rate;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn exclude_weekends(mut self, exclude: bool) -> Self {
        self.exclude_weekends = exclude;
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn build(self) -> Result<CalculationSpec> {
        let start_date = parse_date(self.start_date.as_deref().unwrap_or_default())?;
        let end_date = parse_date(self.end_date.as_deref().unwrap_or_default())?;

        Ok(CalculationSpec {
            start_date,
            end_date,
            amount: self.amount,
            currency: self.currency,
            base_rate: self.base_rate,
            margin: self.margin,
            exclude_weekends: self.exclude_weekends,
            method: self.method,
        })
    }
}

/// one day of the accrual ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualRecord {
    #[serde(rename = "Accrual Date")]
    pub accrual_date: NaiveDate,
    #[serde(rename = "Daily Interest (No Margin)")]
    pub interest_no_margin: f64,
    #[serde(rename = "Daily Interest (With Margin)")]
    pub interest_with_margin: f64,
    #[serde(rename = "Days Elapsed")]
    pub days_elapsed: u32,
}

impl AccrualRecord {
    /// date rendered as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.accrual_date.format("%Y-%m-%d").to_string()
    }

    /// pick the margin or no-margin figure
    pub fn interest(&self, include_margin: bool) -> f64 {
        if include_margin {
            self.interest_with_margin
        } else {
            self.interest_no_margin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn spec() -> CalculationSpec {
        CalculationSpec::builder()
            .start_date("2024-01-01")
            .end_date("2024-01-10")
            .amount(1000.0)
            .currency("USD")
            .base_rate(5.0)
            .margin(2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let spec = spec();
        assert_eq!(spec.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(spec.end_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(spec.method, "simple");
        assert!(!spec.exclude_weekends);
        assert_eq!(spec.total_rate(), 7.0);
    }

    #[test]
    fn test_builder_rejects_bad_dates() {
        let err = CalculationSpec::builder()
            .start_date("2024-02-30")
            .end_date("2024-03-01")
            .build()
            .unwrap_err();
        assert!(err.is_date_format());

        let err = CalculationSpec::builder().end_date("2024-03-01").build().unwrap_err();
        assert!(err.is_date_format());
    }

    #[test]
    fn test_builder_keeps_unknown_method() {
        let spec = CalculationSpec::builder()
            .start_date("2024-01-01")
            .end_date("2024-01-02")
            .method("invalid")
            .build()
            .unwrap();
        assert!(matches!(
            spec.calculation_method(),
            Err(CalculatorError::UnknownMethod { ref method }) if method == "invalid"
        ));
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = spec();
        let b = spec();
        assert_eq!(a, b);

        let mut changed = spec();
        changed.margin = 2.5;
        assert_ne!(a, changed);

        let set: HashSet<CalculationSpec> = [a, b, changed].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("simple".parse::<CalculationMethod>().unwrap(), CalculationMethod::Simple);
        assert_eq!("compound".parse::<CalculationMethod>().unwrap(), CalculationMethod::Compound);
        assert!("Simple".parse::<CalculationMethod>().is_err());
        assert_eq!(CalculationMethod::Compound.label(), "Compound");
    }

    #[test]
    fn test_record_serializes_named_fields() {
        let record = AccrualRecord {
            accrual_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_no_margin: 0.5,
            interest_with_margin: 0.75,
            days_elapsed: 1,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["Accrual Date"], "2024-01-01");
        assert_eq!(json["Daily Interest (No Margin)"], 0.5);
        assert_eq!(json["Daily Interest (With Margin)"], 0.75);
        assert_eq!(json["Days Elapsed"], 1);
        assert_eq!(record.date_string(), "2024-01-01");
    }
}
