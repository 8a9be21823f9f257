//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trivia_domain::OutputFormat as DomainOutputFormat;

/// Output format for verification results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable verdict
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for trivia-judge
#[derive(Parser, Debug)]
#[command(name = "trivia-judge")]
#[command(author, version, about = "Judge free-text trivia answers with an AI model or exact match")]
#[command(long_about = r#"
trivia-judge checks answers against a question bank.

When an OpenAI-compatible API key is configured, an AI judge decides whether
the answer is acceptable. Without a key, or when the judge fails, answers are
compared to the expected answer ignoring case and surrounding whitespace.

Configuration files are loaded from (in priority order):
1. TRIVIA_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-judge/config.toml   Global config

Example:
  trivia-judge verify --question-id 4680 "Copernicus"
  trivia-judge --no-judge verify -q 4680 "copernicus" --output json
  trivia-judge show -q 4680
  trivia-judge list --round "Jeopardy!" --value '$200'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON question bank (overrides [catalog] path)
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Grade by exact match only, even if an API key is configured
    #[arg(long, global = true)]
    pub no_judge: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Verify an answer to a question
    Verify {
        /// Question identifier
        #[arg(short = 'q', long)]
        question_id: i64,

        /// The submitted answer (may be empty)
        answer: String,

        /// Output format (overrides [output] format)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show a question without its answer
    Show {
        /// Question identifier
        #[arg(short = 'q', long)]
        question_id: i64,
    },

    /// List questions, optionally narrowed to one round and value
    List {
        /// Only questions from this round (e.g. "Jeopardy!")
        #[arg(long)]
        round: Option<String>,

        /// Only questions with this board value (e.g. "$200")
        #[arg(long)]
        value: Option<String>,
    },
}
