// reelmood/tests/analyze_command_tests.rs
//! Library-level tests for `run_analyze_opts`, writing into an in-memory buffer.

use anyhow::Result;
use reelmood::commands::analyze::{build_scorer, resolve_lexicon};
use reelmood::ui::theme::ThemeStyle;
use reelmood::{run_analyze_opts, AnalyzeOptions};
use reelmood_core::{Sentiment, SentimentScorer, DEFAULT_MAX_REVIEW_CHARS};

fn opts(input: &str, json: bool) -> AnalyzeOptions {
    AnalyzeOptions {
        input: input.to_string(),
        json,
        max_chars: DEFAULT_MAX_REVIEW_CHARS,
        show_phrases: true,
    }
}

#[test_log::test]
fn test_plain_output_without_color() -> Result<()> {
    let theme = ThemeStyle::default_theme_map();
    let mut out = Vec::new();
    let result = run_analyze_opts(
        SentimentScorer::builtin(),
        opts("Boring and predictable, though the score was good.", false),
        &mut out,
        &theme,
        false,
    )?;

    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 94);
    let text = String::from_utf8(out)?;
    assert!(!text.contains('\u{1b}'), "colour disabled but escapes present: {:?}", text);
    assert!(text.starts_with("Sentiment: Negative (94% confidence)"));
    assert!(text.contains("Key phrases: [good] [boring] [predictable]"));
    Ok(())
}

#[test_log::test]
fn test_json_output_matches_returned_result() -> Result<()> {
    let theme = ThemeStyle::default_theme_map();
    let mut out = Vec::new();
    let result = run_analyze_opts(SentimentScorer::builtin(), opts("great but terrible", true), &mut out, &theme, false)?;

    let report: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(report["result"], serde_json::to_value(&result)?);
    assert_eq!(report["result"]["sentiment"], "neutral");
    assert_eq!(report["result"]["confidence"], 60);
    assert_eq!(report["characters"], 18);
    Ok(())
}

#[test_log::test]
fn test_fallback_verdicts_are_rendered() -> Result<()> {
    let theme = ThemeStyle::default_theme_map();

    let mut out = Vec::new();
    run_analyze_opts(SentimentScorer::builtin(), opts("What? Why? How?", false), &mut out, &theme, false)?;
    assert!(String::from_utf8(out)?.contains("[questioning tone]"));

    let mut out = Vec::new();
    let result = run_analyze_opts(SentimentScorer::builtin(), opts("Wow!!! Just wow!", false), &mut out, &theme, false)?;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(String::from_utf8(out)?.contains("[enthusiastic tone]"));
    Ok(())
}

#[test]
fn test_validation_errors_produce_no_output() {
    let theme = ThemeStyle::default_theme_map();
    let mut out = Vec::new();
    let err = run_analyze_opts(SentimentScorer::builtin(), opts("", false), &mut out, &theme, false).unwrap_err();
    assert_eq!(format!("{:#}", err), "Invalid review: Review text is empty");
    assert!(out.is_empty());
}

#[test]
fn test_builtin_scorer_without_custom_lexicon() -> Result<()> {
    let scorer = build_scorer(None)?;
    assert_eq!(scorer.lexicon_name(), "builtin");
    assert_eq!(resolve_lexicon(None)?, reelmood_core::Lexicon::builtin());
    Ok(())
}
