//! `lexicon` command implementation: show the active keyword tables or
//! validate a lexicon file.

use anyhow::{Context, Result};
use comfy_table::{presets, Table};
use is_terminal::IsTerminal;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

use reelmood_core::{Lexicon, Sentiment};

use crate::cli::{LexiconCommand, LexiconFormat};
use crate::commands::analyze::resolve_lexicon;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Writes the three tables side by side, one column per class.
pub fn write_lexicon_table<W: Write>(writer: &mut W, lexicon: &Lexicon) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(vec![
        format!("Positive ({})", lexicon.positive.len()),
        format!("Negative ({})", lexicon.negative.len()),
        format!("Neutral ({})", lexicon.neutral.len()),
    ]);

    let rows = lexicon.positive.len().max(lexicon.negative.len()).max(lexicon.neutral.len());
    for i in 0..rows {
        let cell = |sentiment: Sentiment| lexicon.terms(sentiment).get(i).cloned().unwrap_or_default();
        table.add_row(vec![
            cell(Sentiment::Positive),
            cell(Sentiment::Negative),
            cell(Sentiment::Neutral),
        ]);
    }

    writeln!(writer, "Lexicon '{}' (version {})", lexicon.name, lexicon.version)?;
    writeln!(writer, "{}", table)?;
    Ok(())
}

/// Loads `path` as a lexicon and returns the one-line summary printed on success.
pub fn validate_lexicon_file(path: &Path) -> Result<String> {
    let lexicon = Lexicon::load_from_file(path)
        .with_context(|| format!("Lexicon file {} is invalid", path.display()))?;
    Ok(format!(
        "Lexicon '{}' is valid ({} positive, {} negative, {} neutral terms).",
        lexicon.name,
        lexicon.positive.len(),
        lexicon.negative.len(),
        lexicon.neutral.len()
    ))
}

/// Entry point used by `main` for the `lexicon` subcommands.
pub fn run(cmd: LexiconCommand, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    match cmd {
        LexiconCommand::Show { lexicon, format } => {
            let lexicon = resolve_lexicon(lexicon.as_deref())?;
            debug!("Showing lexicon '{}' as {:?}.", lexicon.name, format);
            match format {
                LexiconFormat::Table => write_lexicon_table(&mut writer, &lexicon)?,
                LexiconFormat::Yaml => write!(writer, "{}", lexicon.to_yaml_string()?)?,
            }
        }
        LexiconCommand::Validate { path } => {
            let summary = validate_lexicon_file(&path)?;
            output_format::print_success_message(&mut writer, &summary, theme_map, supports_color)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_builtin_term() {
        let mut out = Vec::new();
        write_lexicon_table(&mut out, &Lexicon::builtin()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Lexicon 'builtin' (version 1.0.0)"));
        assert!(text.contains("Positive (23)"));
        assert!(text.contains("Neutral (11)"));
        for term in Lexicon::builtin().negative {
            assert!(text.contains(&term), "missing {}", term);
        }
    }
}
