//! This file defines the command-line interface (CLI) for the reelmood application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use reelmood_core::DEFAULT_MAX_REVIEW_CHARS;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "reelmood",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Instant heuristic sentiment verdicts for movie reviews",
    long_about = "reelmood reads a movie review and reports whether it is positive, negative or neutral, how confident that verdict is, the percentage split across the three classes and the key phrases that drove it. Scoring is lexical and runs locally.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `reelmood` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes a review and prints its sentiment verdict.
    #[command(about = "Analyzes a review and prints its sentiment verdict.")]
    Analyze(AnalyzeCommand),

    /// Inspects and validates keyword lexicons.
    #[command(subcommand, about = "Inspects and validates keyword lexicons.")]
    Lexicon(LexiconCommand),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Review text (reads from --input-file or stdin if not provided).
    #[arg(value_name = "TEXT", conflicts_with = "input_file", help = "Review text to analyze. Reads stdin when omitted.")]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the review from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long, short = 'j', help = "Print the analysis report as JSON.")]
    pub json: bool,

    /// Custom lexicon merged over the built-in vocabulary.
    #[arg(long, short = 'l', value_name = "NAME_OR_PATH", env = "REELMOOD_LEXICON", help = "Merge a custom lexicon (name or YAML path) over the built-in one.")]
    pub lexicon: Option<String>,

    /// Maximum review length in characters.
    #[arg(long = "max-chars", value_name = "N", default_value_t = DEFAULT_MAX_REVIEW_CHARS, help = "Reject reviews longer than N characters.")]
    pub max_chars: usize,

    /// Hide the key phrase list.
    #[arg(long = "no-phrases", help = "Do not print key phrases.")]
    pub no_phrases: bool,
}

/// Subcommands for the `lexicon` command.
#[derive(Subcommand, Debug)]
pub enum LexiconCommand {
    #[command(about = "Prints the keyword tables in use.")]
    Show {
        /// Custom lexicon merged over the built-in vocabulary.
        #[arg(long, short = 'l', value_name = "NAME_OR_PATH", env = "REELMOOD_LEXICON", help = "Merge a custom lexicon (name or YAML path) over the built-in one.")]
        lexicon: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value = "table", help = "Output format.")]
        format: LexiconFormat,
    },
    #[command(about = "Validates a lexicon YAML file.")]
    Validate {
        /// The lexicon file to check.
        #[arg(value_name = "FILE", help = "The lexicon YAML file to validate.")]
        path: PathBuf,
    },
}

/// Output formats for `lexicon show`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LexiconFormat {
    /// A table with one column per class.
    Table,
    /// The lexicon as YAML, suitable as a starting point for a custom file.
    Yaml,
}
