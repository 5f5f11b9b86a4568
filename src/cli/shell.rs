use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use shell_words::split;
use tracing::error;

use crate::cache::LedgerCache;
use crate::cli::args::{command_help, CalculationArgs, ShellCommand, ShellLine, ShowArgs, UpdateArgs};
use crate::cli::error::{CommandError, ShellError};
use crate::cli::output::{render_calculations, render_ledger, Painter};
use crate::config::ShellConfig;
use crate::decimal::format_amount;
use crate::errors::CalculatorError;
use crate::interest::{sum_interest, AccrualEngine};
use crate::report::LedgerReport;
use crate::store::CalculationStore;
use crate::types::CalculationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// command interpreter over a store, a ledger cache and an output sink
pub struct Shell<W: Write> {
    config: ShellConfig,
    painter: Painter,
    store: CalculationStore,
    cache: LedgerCache,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(config: ShellConfig, out: W) -> Self {
        Self {
            painter: Painter::new(config.color),
            config,
            store: CalculationStore::new(),
            cache: LedgerCache::new(AccrualEngine::new()),
            out,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn store(&self) -> &CalculationStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn print_intro(&mut self) -> Result<(), ShellError> {
        if !self.config.intro.is_empty() {
            writeln!(self.out, "{}\n", self.config.intro)?;
        }
        Ok(())
    }

    /// run one input line; command failures are reported, not returned
    pub fn execute(&mut self, line: &str) -> Result<LoopControl, ShellError> {
        let mut tokens = match split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                let message = self.painter.error(&format!("Could not parse input: {err}"));
                writeln!(self.out, "{message}")?;
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }
        if tokens[0] == "?" {
            tokens[0] = "help".to_string();
        }

        let result = match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => self.dispatch(parsed.command),
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                write!(self.out, "{}", err.render())?;
                Ok(LoopControl::Continue)
            }
            Err(err) => Err(CommandError::Usage(err.render().to_string())),
        };

        match result {
            Ok(control) => Ok(control),
            Err(err) => {
                self.report(err)?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<LoopControl, CommandError> {
        match command {
            ShellCommand::Calculate(args) => self.calculate(&args),
            ShellCommand::Show(args) => self.show(&args),
            ShellCommand::List => self.list(),
            ShellCommand::Update(args) => self.update(&args),
            ShellCommand::Help { command } => self.help(command.as_deref()),
            ShellCommand::Quit => {
                writeln!(self.out, "Thank you for using the Loan Calculator. Goodbye!")?;
                Ok(LoopControl::Exit)
            }
        }
    }

    fn calculate(&mut self, args: &CalculationArgs) -> Result<LoopControl, CommandError> {
        let spec = args.to_spec()?;
        let id = self.store.insert(spec, None);
        let message = self.painter.success(&format!("Calculation saved with ID: {id}"));
        writeln!(self.out, "{message}")?;
        self.show_calculation(id, false)
    }

    fn show(&mut self, args: &ShowArgs) -> Result<LoopControl, CommandError> {
        self.show_calculation(args.calculation_id, args.json)
    }

    fn show_calculation(&mut self, id: CalculationId, json: bool) -> Result<LoopControl, CommandError> {
        let Some(spec) = self.store.get(id).cloned() else {
            let message = self.painter.error("Calculation not found.");
            writeln!(self.out, "{message}")?;
            return Ok(LoopControl::Continue);
        };

        let precision = self.config.display_precision;
        let records = self.cache.ledger(&spec)?;

        if json {
            let report = LedgerReport::from_records(Some(id), &spec, records);
            writeln!(self.out, "{}", report.json())?;
            return Ok(LoopControl::Continue);
        }

        if records.is_empty() {
            let message = self.painter.warning("No interest calculated. Check your dates.");
            writeln!(self.out, "{message}")?;
            return Ok(LoopControl::Continue);
        }

        let table = render_ledger(records, precision);
        let total = sum_interest(records, true);

        writeln!(self.out, "{table}")?;
        writeln!(
            self.out,
            "\nTotal Interest: {} {}",
            format_amount(total, precision),
            spec.currency
        )?;
        Ok(LoopControl::Continue)
    }

    fn list(&mut self) -> Result<LoopControl, CommandError> {
        let entries = self.store.list();
        if entries.is_empty() {
            let message = self.painter.error("No calculations found.");
            writeln!(self.out, "{message}")?;
            return Ok(LoopControl::Continue);
        }

        let table = render_calculations(&entries, self.config.display_precision);
        writeln!(self.out, "{table}")?;
        Ok(LoopControl::Continue)
    }

    fn update(&mut self, args: &UpdateArgs) -> Result<LoopControl, CommandError> {
        let spec = args.calculation.to_spec()?;
        let id = args.calculation_id;

        if !self.store.contains(id) {
            let message = self.painter.error("Calculation not found.");
            writeln!(self.out, "{message}")?;
            return Ok(LoopControl::Continue);
        }

        self.store.insert(spec, Some(id));
        let message = self.painter.success(&format!("Calculation with ID {id} updated."));
        writeln!(self.out, "{message}")?;
        self.show_calculation(id, false)
    }

    fn help(&mut self, command: Option<&str>) -> Result<LoopControl, CommandError> {
        if let Some(name) = command {
            match command_help(name) {
                Some(text) => write!(self.out, "{text}")?,
                None => {
                    let message = self.painter.error(&format!("No help on {name}"));
                    writeln!(self.out, "{message}")?;
                }
            }
            return Ok(LoopControl::Continue);
        }

        writeln!(self.out, "{}\n", self.painter.heading("Loan Calculator Commands:"))?;
        writeln!(self.out, "  calculate    Calculate loan interest with specified parameters.")?;
        writeln!(self.out, "  show         Show details of a specific calculation by ID.")?;
        writeln!(self.out, "  list         List all saved calculations.")?;
        writeln!(self.out, "  update       Update an existing calculation.")?;
        writeln!(self.out, "  quit/exit    Exit the application.\n")?;
        writeln!(self.out, "Type 'help <command>' for more details on each command.")?;
        Ok(LoopControl::Continue)
    }

    fn report(&mut self, err: CommandError) -> Result<(), ShellError> {
        let message = match err {
            CommandError::Io(source) => return Err(ShellError::Io(source)),
            CommandError::Usage(text) => text.trim_end().to_string(),
            CommandError::Calculation(err @ CalculatorError::DateFormat { .. }) => {
                format!("Date format error: {err}")
            }
            CommandError::Calculation(err) => {
                error!(error = %err, "command failed");
                format!("An error occurred: {err}")
            }
        };

        let message = self.painter.error(&message);
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}
