//! interactive command shell over the calculation store

pub mod args;
pub mod error;
pub mod output;
pub mod repl;
pub mod shell;

pub use error::{CommandError, ShellError};
pub use repl::{run_interactive, run_script};
pub use shell::{LoopControl, Shell};
