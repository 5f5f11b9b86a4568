use std::borrow::Cow;
use std::io::{BufRead, Write};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};
use tracing::debug;

use crate::cli::args::COMMAND_NAMES;
use crate::cli::error::ShellError;
use crate::cli::shell::{LoopControl, Shell};

/// interactive loop with line editing, history and command completion
pub fn run_interactive<W: Write>(shell: &mut Shell<W>) -> Result<(), ShellError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(COMMAND_NAMES)));

    shell.print_intro()?;

    loop {
        let prompt = shell.prompt().to_string();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                if shell.execute(trimmed)? == LoopControl::Exit {
                    break;
                }
            }
            // ctrl-c drops the current line only
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// read commands from `input` until it ends or a command quits
pub fn run_script<W: Write, R: BufRead>(shell: &mut Shell<W>, input: R) -> Result<(), ShellError> {
    for line in input.lines() {
        let line = line?;
        if shell.execute(&line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: &[&str]) -> Self {
        let mut commands: Vec<String> = names.iter().map(|name| name.to_ascii_lowercase()).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, needle: &str) -> Vec<Pair> {
        let needle = needle.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();

        // only the command word completes
        if prefix[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        Ok((start, self.candidates(&prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
