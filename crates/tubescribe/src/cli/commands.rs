//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tubescribe - YouTube video titles and scripts from a topic
#[derive(Parser, Debug)]
#[command(name = "tubescribe")]
#[command(about = "Generate YouTube video titles and scripts, grounded in Wikipedia research", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// OpenAI API key
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file, applied over the bundled and user defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a title and script for one topic
    Run {
        /// What the video is about
        topic: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Read topics from stdin, one per line, keeping history across them
    Interactive {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

/// How outcomes are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable panels
    Human,
    /// JSON document per run
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_parses_topic_and_format() {
        let cli = Cli::try_parse_from([
            "tubescribe",
            "run",
            "space exploration",
            "--format",
            "json",
            "--api-key",
            "sk-test",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        match cli.command {
            Commands::Run { topic, format } => {
                assert_eq!(topic, "space exploration");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_interactive_defaults_to_human() {
        let cli = Cli::try_parse_from(["tubescribe", "-v", "interactive"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Interactive {
                format: OutputFormat::Human
            }
        ));
    }

    #[test]
    fn test_run_requires_topic() {
        assert!(Cli::try_parse_from(["tubescribe", "run"]).is_err());
    }
}
