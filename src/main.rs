//! loan_calc - interactive shell for daily loan interest accrual.
//!
//! ```bash
//! # interactive session
//! loan_calc
//!
//! # run commands from stdin
//! echo "calculate 2024-01-01 2024-02-01 10000 USD 5.0 2.0" | loan_calc --script
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use loan_calculator::cli::{run_interactive, run_script, Shell};
use loan_calculator::logging::init_tracing;
use loan_calculator::ShellConfig;

#[derive(Parser, Debug)]
#[command(name = "loan_calc", version, about = "Daily simple and compound loan interest calculator")]
struct Cli {
    /// JSON file with shell settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from stdin without prompt or banner
    #[arg(long)]
    script: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log filter directive, e.g. "loan_calculator=debug"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None if cli.script => ShellConfig::script(),
        None => ShellConfig::default(),
    };

    if cli.script {
        config.intro.clear();
    }
    if cli.no_color || cli.script {
        config.color = false;
    }
    if let Some(filter) = cli.log {
        config.log_filter = filter;
    }

    init_tracing(&config.log_filter);
    if !config.color {
        colored::control::set_override(false);
    }

    let mut shell = Shell::new(config, io::stdout());
    if cli.script {
        let stdin = io::stdin();
        run_script(&mut shell, stdin.lock()).context("script failed")?;
    } else {
        run_interactive(&mut shell).context("shell failed")?;
    }

    shell.output_mut().flush()?;
    Ok(())
}
