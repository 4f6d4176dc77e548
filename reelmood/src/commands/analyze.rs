//! `analyze` command implementation: read a review, validate it, score it and
//! print the verdict.

use anyhow::{Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use strip_ansi_escapes::strip;

use reelmood_core::{
    load_lexicon_by_name, merge_lexicons, AnalysisResult, Lexicon, ReviewInput, SentimentScorer,
};

use crate::ui::result_view::{self, RenderOptions};
use crate::ui::theme::ThemeMap;

/// Options for the `run_analyze_opts` API.
pub struct AnalyzeOptions {
    pub input: String,
    pub json: bool,
    pub max_chars: usize,
    pub show_phrases: bool,
}

/// JSON document printed by `analyze --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub characters: usize,
    pub input_sha256: String,
    pub lexicon: String,
    pub analyzed_at: String,
}

fn strip_ansi(raw: &str) -> String {
    String::from_utf8_lossy(&strip(raw.as_bytes())).into_owned()
}

/// Resolves the review text from the positional argument, a file, or stdin.
pub fn read_review_text(text: Option<String>, input_file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        debug!("Using review text from the command line.");
        return Ok(text);
    }
    let raw = match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read review from stdin")?;
            buffer
        }
    };
    Ok(strip_ansi(&raw))
}

/// Builds the scorer for an optional custom lexicon merged over the built-in one.
pub fn build_scorer(lexicon: Option<&str>) -> Result<SentimentScorer> {
    match lexicon {
        None => Ok(SentimentScorer::builtin().clone()),
        Some(name_or_path) => {
            let merged = resolve_lexicon(Some(name_or_path))?;
            SentimentScorer::new(&merged)
        }
    }
}

/// The built-in lexicon, with a custom lexicon merged in when one is named.
pub fn resolve_lexicon(lexicon: Option<&str>) -> Result<Lexicon> {
    let user = lexicon
        .map(|name_or_path| {
            load_lexicon_by_name(name_or_path).with_context(|| format!("Failed to load lexicon '{}'", name_or_path))
        })
        .transpose()?;
    Ok(merge_lexicons(Lexicon::builtin(), user)?)
}

/// Validates and scores the review in `opts`, then writes the verdict to `out`.
pub fn run_analyze_opts<W: Write>(
    scorer: &SentimentScorer,
    opts: AnalyzeOptions,
    out: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<AnalysisResult> {
    info!("Starting analyze operation.");

    let review = ReviewInput::new(opts.input, opts.max_chars).context("Invalid review")?;
    debug!("Review accepted: {} characters.", review.characters());

    let result = scorer.analyze(review.as_str());

    if opts.json {
        let report = AnalysisReport {
            result: result.clone(),
            characters: review.characters(),
            input_sha256: review.fingerprint(),
            lexicon: scorer.lexicon_name().to_string(),
            analyzed_at: Utc::now().to_rfc3339(),
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize analysis report")?;
        writeln!(out)?;
    } else {
        let options = RenderOptions {
            show_phrases: opts.show_phrases,
            ..Default::default()
        };
        result_view::render_result(out, &result, &options, theme_map, supports_color)?;
    }

    info!("Analyze operation completed: {}.", result.sentiment);
    Ok(result)
}

/// Entry point used by `main` for the `analyze` subcommand.
pub fn run(cmd: crate::cli::AnalyzeCommand, theme_map: &ThemeMap) -> Result<()> {
    let scorer = build_scorer(cmd.lexicon.as_deref())?;
    let input = read_review_text(cmd.text, cmd.input_file.as_deref())?;
    let opts = AnalyzeOptions {
        input,
        json: cmd.json,
        max_chars: cmd.max_chars,
        show_phrases: !cmd.no_phrases,
    };

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    run_analyze_opts(&scorer, opts, &mut writer, theme_map, supports_color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_escape_sequences() {
        assert_eq!(strip_ansi("\u{1b}[31mterrible\u{1b}[0m film"), "terrible film");
    }

    #[test]
    fn positional_text_wins() {
        let text = read_review_text(Some("fine".to_string()), None).unwrap();
        assert_eq!(text, "fine");
    }
}
