//! clap grammar for shell command lines

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::errors::Result;
use crate::types::{CalculationId, CalculationMethod, CalculationSpec};

/// one parsed shell line
#[derive(Parser, Debug)]
#[command(name = "loan_calc", no_binary_name = true, disable_help_subcommand = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// commands understood by the shell
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Calculate loan interest with the given parameters and save it
    #[command(after_help = "Example:\n  calculate 2024-01-01 2024-02-01 10000 USD 5.0 2.0 --exclude_weekends --method simple")]
    Calculate(CalculationArgs),

    /// Show calculation details by ID
    Show(ShowArgs),

    /// List all saved calculations
    List,

    /// Update an existing calculation
    #[command(after_help = "Example:\n  update 1 2024-01-01 2024-02-01 10000 USD 5.0 2.0 --exclude_weekends --method compound")]
    Update(UpdateArgs),

    /// Provide detailed help with examples
    Help {
        /// Command to describe
        command: Option<String>,
    },

    /// Quit the application
    #[command(alias = "exit")]
    Quit,
}

/// positional and flag arguments describing one calculation
#[derive(Args, Debug, Clone)]
pub struct CalculationArgs {
    /// Start date in YYYY-MM-DD format
    pub start_date: String,

    /// End date in YYYY-MM-DD format
    pub end_date: String,

    /// Loan amount
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency code (e.g., USD)
    pub currency: String,

    /// Base interest rate (%)
    #[arg(allow_negative_numbers = true)]
    pub base_rate: f64,

    /// Margin (%)
    #[arg(allow_negative_numbers = true)]
    pub margin: f64,

    /// Exclude weekends from calculation
    #[arg(long = "exclude_weekends", alias = "exclude-weekends")]
    pub exclude_weekends: bool,

    /// Interest calculation method
    #[arg(long, default_value = "simple", value_parser = [
        CalculationMethod::Simple.as_str(),
        CalculationMethod::Compound.as_str(),
    ])]
    pub method: String,
}

impl CalculationArgs {
    /// parse the dates and build a spec; the currency is uppercased
    pub fn to_spec(&self) -> Result<CalculationSpec> {
        CalculationSpec::builder()
            .start_date(self.start_date.as_str())
            .end_date(self.end_date.as_str())
            .amount(self.amount)
            .currency(self.currency.to_uppercase())
            .base_rate(self.base_rate)
            .margin(self.margin)
            .exclude_weekends(self.exclude_weekends)
            .method(self.method.as_str())
            .build()
    }
}

/// arguments for `show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// ID of the calculation to show
    #[arg(allow_negative_numbers = true)]
    pub calculation_id: CalculationId,

    /// Print the ledger report as JSON
    #[arg(long)]
    pub json: bool,
}

/// arguments for `update`
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// ID of the calculation to update
    #[arg(allow_negative_numbers = true)]
    pub calculation_id: CalculationId,

    #[command(flatten)]
    pub calculation: CalculationArgs,
}

/// names offered for completion
pub const COMMAND_NAMES: &[&str] = &["calculate", "show", "list", "update", "help", "quit", "exit"];

/// long help for one command, if it exists
pub fn command_help(name: &str) -> Option<String> {
    let mut root = ShellLine::command();
    root.find_subcommand_mut(name)
        .map(|command| command.render_long_help().to_string())
}
