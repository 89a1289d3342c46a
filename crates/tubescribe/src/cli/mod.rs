//! Command-line interface module.

mod commands;
mod interactive;
mod run;

pub use commands::{Cli, Commands, OutputFormat};
pub use interactive::run_interactive;
pub use run::{handle_topic, run_once};
