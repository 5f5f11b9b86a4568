//! table and message rendering for the shell

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::decimal::format_amount;
use crate::types::{AccrualRecord, CalculationId, CalculationSpec};

/// one ledger line as shown in the table
#[derive(Debug, Clone, Tabled)]
pub struct LedgerRow {
    #[tabled(rename = "Accrual Date")]
    pub accrual_date: String,
    #[tabled(rename = "Daily Interest (No Margin)")]
    pub interest_no_margin: String,
    #[tabled(rename = "Daily Interest (With Margin)")]
    pub interest_with_margin: String,
    #[tabled(rename = "Days Elapsed")]
    pub days_elapsed: u32,
}

impl LedgerRow {
    pub fn from_record(record: &AccrualRecord, precision: u32) -> Self {
        Self {
            accrual_date: record.date_string(),
            interest_no_margin: format_amount(record.interest_no_margin, precision),
            interest_with_margin: format_amount(record.interest_with_margin, precision),
            days_elapsed: record.days_elapsed,
        }
    }
}

/// one saved calculation as shown by `list`
#[derive(Debug, Clone, Tabled)]
pub struct CalculationRow {
    #[tabled(rename = "ID")]
    pub id: CalculationId,
    #[tabled(rename = "Start Date")]
    pub start_date: String,
    #[tabled(rename = "End Date")]
    pub end_date: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Base Rate (%)")]
    pub base_rate: String,
    #[tabled(rename = "Margin (%)")]
    pub margin: String,
    #[tabled(rename = "Exclude Weekends")]
    pub exclude_weekends: bool,
    #[tabled(rename = "Method")]
    pub method: String,
}

impl CalculationRow {
    pub fn from_spec(id: CalculationId, spec: &CalculationSpec, precision: u32) -> Self {
        let method = spec
            .calculation_method()
            .map(|method| method.label().to_string())
            .unwrap_or_else(|_| capitalize(&spec.method));

        Self {
            id,
            start_date: spec.start_date.to_string(),
            end_date: spec.end_date.to_string(),
            amount: format_amount(spec.amount, precision),
            currency: spec.currency.clone(),
            base_rate: format_amount(spec.base_rate, precision),
            margin: format_amount(spec.margin, precision),
            exclude_weekends: spec.exclude_weekends,
            method,
        }
    }
}

/// render rows as a box-drawn table
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn render_ledger(records: &[AccrualRecord], precision: u32) -> String {
    let rows: Vec<LedgerRow> = records
        .iter()
        .map(|record| LedgerRow::from_record(record, precision))
        .collect();
    render_table(&rows)
}

pub fn render_calculations(entries: &[(CalculationId, &CalculationSpec)], precision: u32) -> String {
    let rows: Vec<CalculationRow> = entries
        .iter()
        .map(|(id, spec)| CalculationRow::from_spec(*id, spec, precision))
        .collect();
    render_table(&rows)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// message colours; plain text when disabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn success(&self, message: &str) -> String {
        if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn warning(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn error(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn heading(&self, message: &str) -> String {
        if self.color {
            message.bold().to_string()
        } else {
            message.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> AccrualRecord {
        AccrualRecord {
            accrual_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_no_margin: 1.36986301369863,
            interest_with_margin: 1.917808219178082,
            days_elapsed: 1,
        }
    }

    #[test]
    fn test_ledger_row_rounds_for_display() {
        let row = LedgerRow::from_record(&record(), 2);
        assert_eq!(row.accrual_date, "2024-01-01");
        assert_eq!(row.interest_no_margin, "1.37");
        assert_eq!(row.interest_with_margin, "1.92");
    }

    #[test]
    fn test_render_ledger_headers() {
        let table = render_ledger(&[record()], 2);
        assert!(table.contains("Accrual Date"));
        assert!(table.contains("Daily Interest (No Margin)"));
        assert!(table.contains("Daily Interest (With Margin)"));
        assert!(table.contains("Days Elapsed"));
        assert!(table.contains("1.92"));
    }

    #[test]
    fn test_calculation_row() {
        let spec = CalculationSpec::builder()
            .start_date("2024-01-01")
            .end_date("2024-01-10")
            .amount(10000.0)
            .currency("USD")
            .base_rate(5.0)
            .margin(2.25)
            .method("compound")
            .build()
            .unwrap();

        let row = CalculationRow::from_spec(4, &spec, 2);
        assert_eq!(row.amount, "10000.00");
        assert_eq!(row.margin, "2.25");
        assert_eq!(row.method, "Compound");
        assert_eq!(row.start_date, "2024-01-01");
    }

    #[test]
    fn test_unknown_method_label() {
        assert_eq!(capitalize("weird"), "Weird");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_plain_painter() {
        let painter = Painter::new(false);
        assert_eq!(painter.error("Calculation not found."), "Calculation not found.");
    }
}
