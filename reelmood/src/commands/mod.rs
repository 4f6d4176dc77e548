//! Subcommand implementations.

use anyhow::Result;

use crate::cli::Commands;
use crate::ui::theme::ThemeMap;

pub mod analyze;
pub mod lexicon;

/// Dispatches a parsed subcommand.
pub fn run(command: Commands, theme_map: &ThemeMap) -> Result<()> {
    match command {
        Commands::Analyze(cmd) => analyze::run(cmd, theme_map),
        Commands::Lexicon(cmd) => lexicon::run(cmd, theme_map),
    }
}
