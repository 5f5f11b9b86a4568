use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// display amount rounded to a fixed number of decimal places
///
/// ledger figures stay `f64` at full precision; this type only exists at
/// the presentation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// convert a float, rounding half away from zero to `dp` places
    pub fn from_f64(value: f64, dp: u32) -> Option<Self> {
        Decimal::from_f64(value)
            .map(|d| Money(d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// render `value` with exactly `dp` decimal places
pub fn format_amount(value: f64, dp: u32) -> String {
    match Money::from_f64(value, dp) {
        // tiny negatives round to zero and must not print as "-0.00"
        Some(money) if money.as_decimal().is_zero() => {
            format!("{:.prec$}", Money::ZERO.as_decimal(), prec = dp as usize)
        }
        Some(money) => format!("{:.prec$}", money.as_decimal(), prec = dp as usize),
        None => format!("{:.prec$}", value, prec = dp as usize),
    }
}
