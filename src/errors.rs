use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid date '{input}': {source} (expected YYYY-MM-DD)")]
    DateFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown calculation method: {method}")]
    UnknownMethod {
        method: String,
    },
}

impl CalculatorError {
    /// true for errors raised while parsing a date
    pub fn is_date_format(&self) -> bool {
        matches!(self, CalculatorError::DateFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
