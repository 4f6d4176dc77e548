//! Terminal rendering of an `AnalysisResult`.
//!
//! The view shows the verdict with its confidence, a distribution bar whose
//! three segments always fill the bar exactly, a per-class breakdown table and
//! the key phrases as bracketed tokens.

use anyhow::Result;
use comfy_table::{presets, CellAlignment, Table};
use reelmood_core::{AnalysisResult, Sentiment, SentimentScores};
use std::io::Write;

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Default width of the distribution bar, in columns.
pub const BAR_WIDTH: usize = 40;

/// Display order of the classes, matching the `scores` record.
const DISPLAY_ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub show_phrases: bool,
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_phrases: true, bar_width: BAR_WIDTH }
    }
}

fn segment_glyph(sentiment: Sentiment) -> char {
    match sentiment {
        Sentiment::Positive => '█',
        Sentiment::Neutral => '▒',
        Sentiment::Negative => '░',
    }
}

/// Splits `width` columns between the classes in [`DISPLAY_ORDER`] using
/// largest remainders, so the segments add up to exactly `width`.
pub fn segment_widths(scores: &SentimentScores, width: usize) -> [usize; 3] {
    let total = scores.total().max(1) as usize;
    let exact: Vec<usize> = DISPLAY_ORDER
        .iter()
        .map(|s| scores.get(*s) as usize * width)
        .collect();

    let mut widths = [0usize; 3];
    for (i, numerator) in exact.iter().enumerate() {
        widths[i] = numerator / total;
    }

    let mut by_remainder: Vec<usize> = (0..3).collect();
    by_remainder.sort_by(|a, b| (exact[*b] % total).cmp(&(exact[*a] % total)));

    let assigned: usize = widths.iter().sum();
    for i in by_remainder.into_iter().take(width.saturating_sub(assigned)) {
        widths[i] += 1;
    }
    widths
}

fn distribution_bar(scores: &SentimentScores, width: usize, theme_map: &ThemeMap, supports_color: bool) -> String {
    let widths = segment_widths(scores, width);
    let mut bar = String::from("[");
    for (sentiment, columns) in DISPLAY_ORDER.iter().zip(widths) {
        let segment: String = std::iter::repeat(segment_glyph(*sentiment)).take(columns).collect();
        bar.push_str(&paint(&segment, ThemeEntry::for_sentiment(*sentiment), theme_map, supports_color));
    }
    bar.push(']');
    bar
}

fn breakdown_table(scores: &SentimentScores, width: usize) -> Table {
    let widths = segment_widths(scores, width);
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(vec!["Class", "Share", "Bar"]);
    for (sentiment, columns) in DISPLAY_ORDER.iter().zip(widths) {
        let bar: String = std::iter::repeat(segment_glyph(*sentiment)).take(columns).collect();
        table.add_row(vec![
            sentiment.display_label().to_string(),
            format!("{}%", scores.get(*sentiment)),
            bar,
        ]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Writes the human-readable view of `result`.
pub fn render_result<W: Write>(
    writer: &mut W,
    result: &AnalysisResult,
    options: &RenderOptions,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let label = paint(
        result.sentiment.display_label(),
        ThemeEntry::for_sentiment(result.sentiment),
        theme_map,
        supports_color,
    );
    let confidence = paint(
        &format!("{}% confidence", result.confidence),
        ThemeEntry::Confidence,
        theme_map,
        supports_color,
    );
    writeln!(
        writer,
        "{} {} ({})",
        paint("Sentiment:", ThemeEntry::Header, theme_map, supports_color),
        label,
        confidence
    )?;
    writeln!(writer, "{}", distribution_bar(&result.scores, options.bar_width, theme_map, supports_color))?;
    writeln!(writer, "{}", breakdown_table(&result.scores, options.bar_width / 2))?;

    if options.show_phrases && !result.key_phrases.is_empty() {
        let tokens: Vec<String> = result
            .key_phrases
            .iter()
            .map(|p| paint(&format!("[{}]", p), ThemeEntry::KeyPhrase, theme_map, supports_color))
            .collect();
        writeln!(
            writer,
            "{} {}",
            paint("Key phrases:", ThemeEntry::Header, theme_map, supports_color),
            tokens.join(" ")
        )?;
    }
    Ok(())
}
