// reelmood-core/src/scorer.rs
//! The lexical sentiment scorer.
//!
//! `analyze` turns a review into an [`AnalysisResult`] in one pass: count
//! keyword hits per table, fall back to punctuation and length heuristics
//! when nothing matched, otherwise derive percentages, a verdict and a
//! confidence from the raw counts.
//!
//! The scorer is total and pure. It never fails, holds no mutable state and
//! can be shared freely between threads.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::analysis::{AnalysisResult, MatchTally, Sentiment, SentimentScores, MAX_KEY_PHRASES};
use crate::lexicon::Lexicon;
use crate::matchers::compiler::{get_or_compile_lexicon, CompiledLexicon};

/// Key phrase reported when the fallback detects an excited review.
pub const ENTHUSIASTIC_TONE: &str = "enthusiastic tone";
/// Key phrase reported when the fallback detects a review full of questions.
pub const QUESTIONING_TONE: &str = "questioning tone";

/// More `!` than this reads as enthusiasm.
const EXCLAMATION_THRESHOLD: usize = 2;
/// More `?` than this reads as questioning.
const QUESTION_THRESHOLD: usize = 2;
/// Keyword-free reviews longer than this many characters count as enthusiastic.
const LONG_REVIEW_CHARS: usize = 200;

const POSITIVE_FLOOR: i64 = 5;
const NEGATIVE_FLOOR: i64 = 5;
const NEUTRAL_FLOOR: i64 = 10;

const POLAR_CONFIDENCE_CAP: f64 = 95.0;
const NEUTRAL_CONFIDENCE_CAP: f64 = 90.0;
const BASE_CONFIDENCE: f64 = 60.0;

static BUILTIN_SCORER: Lazy<SentimentScorer> = Lazy::new(|| {
    SentimentScorer::new(&Lexicon::builtin()).expect("built-in lexicon terms always compile")
});

/// Analyzes `text` with the built-in lexicon.
pub fn analyze(text: &str) -> AnalysisResult {
    SentimentScorer::builtin().analyze(text)
}

/// A scorer bound to one compiled lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon_name: String,
    compiled: Arc<CompiledLexicon>,
}

impl SentimentScorer {
    /// Builds a scorer for `lexicon`, reusing a cached compilation when available.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let compiled = get_or_compile_lexicon(lexicon)
            .with_context(|| format!("Failed to compile lexicon '{}' for SentimentScorer", lexicon.name))?;
        Ok(Self {
            lexicon_name: lexicon.name.clone(),
            compiled,
        })
    }

    /// The shared scorer for the built-in lexicon.
    pub fn builtin() -> &'static SentimentScorer {
        &BUILTIN_SCORER
    }

    pub fn lexicon_name(&self) -> &str {
        &self.lexicon_name
    }

    /// Counts whole-word keyword hits per table and collects key phrases in
    /// first-match order.
    pub fn tally(&self, text: &str) -> MatchTally {
        let normalized = text.to_lowercase();
        let mut tally = MatchTally::default();
        for term in &self.compiled.terms {
            tally.record(term.sentiment, &term.term, term.count_in(&normalized));
        }
        tally
    }

    /// Produces the sentiment verdict for `text`.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tally = self.tally(text);
        debug!(
            "Scanned review ({} bytes) with lexicon '{}': positive={}, negative={}, neutral={}",
            text.len(),
            self.lexicon_name,
            tally.positive,
            tally.negative,
            tally.neutral
        );

        if tally.total() == 0 {
            return fallback_result(text);
        }
        scored_result(tally)
    }
}

/// Classifies a review without keyword hits from its surface features.
fn fallback_result(text: &str) -> AnalysisResult {
    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    let length = text.chars().count();
    debug!(
        "No keyword matches; falling back on tone (exclamations={}, questions={}, chars={})",
        exclamations, questions, length
    );

    if exclamations > EXCLAMATION_THRESHOLD || length > LONG_REVIEW_CHARS {
        AnalysisResult {
            sentiment: Sentiment::Positive,
            confidence: 65,
            scores: SentimentScores::new(40, 50, 10),
            key_phrases: vec![ENTHUSIASTIC_TONE.to_string()],
        }
    } else if questions > QUESTION_THRESHOLD {
        AnalysisResult {
            sentiment: Sentiment::Neutral,
            confidence: 70,
            scores: SentimentScores::new(20, 60, 20),
            key_phrases: vec![QUESTIONING_TONE.to_string()],
        }
    } else {
        AnalysisResult {
            sentiment: Sentiment::Neutral,
            confidence: 75,
            scores: SentimentScores::new(25, 50, 25),
            key_phrases: Vec::new(),
        }
    }
}

fn round_percent(part: f64, whole: f64) -> i64 {
    ((part / whole) * 100.0).round() as i64
}

/// Turns non-empty raw counts into a verdict.
fn scored_result(tally: MatchTally) -> AnalysisResult {
    let total = tally.total() as f64;
    let positive_pct = round_percent(tally.positive as f64, total);
    let negative_pct = round_percent(tally.negative as f64, total);
    let neutral_pct = 100 - positive_pct - negative_pct;

    let sentiment = tally.dominant().unwrap_or(Sentiment::Neutral);
    let confidence = match sentiment {
        Sentiment::Positive => (BASE_CONFIDENCE + positive_pct as f64 / 2.0).min(POLAR_CONFIDENCE_CAP),
        Sentiment::Negative => (BASE_CONFIDENCE + negative_pct as f64 / 2.0).min(POLAR_CONFIDENCE_CAP),
        Sentiment::Neutral => {
            let strongest = positive_pct.max(negative_pct);
            (BASE_CONFIDENCE + (50 - strongest).abs() as f64).min(NEUTRAL_CONFIDENCE_CAP)
        }
    };

    let scores = normalize_scores(positive_pct, neutral_pct, negative_pct);
    debug!(
        "Verdict: {} (raw pct {}/{}/{}, display {}/{}/{})",
        sentiment,
        positive_pct,
        neutral_pct,
        negative_pct,
        scores.positive,
        scores.neutral,
        scores.negative
    );

    let mut key_phrases = tally.key_phrases;
    key_phrases.truncate(MAX_KEY_PHRASES);

    AnalysisResult {
        sentiment,
        confidence: confidence.round().clamp(0.0, 100.0) as u8,
        scores,
        key_phrases,
    }
}

/// Floors each share, rescales to 100 and pushes any rounding remainder into neutral.
fn normalize_scores(positive_pct: i64, neutral_pct: i64, negative_pct: i64) -> SentimentScores {
    let positive = positive_pct.max(POSITIVE_FLOOR);
    let neutral = neutral_pct.max(NEUTRAL_FLOOR);
    let negative = negative_pct.max(NEGATIVE_FLOOR);
    let adjusted_total = (positive + neutral + negative) as f64;

    let positive = round_percent(positive as f64, adjusted_total);
    let mut neutral = round_percent(neutral as f64, adjusted_total);
    let negative = round_percent(negative as f64, adjusted_total);

    let diff = 100 - (positive + neutral + negative);
    if diff != 0 {
        neutral += diff;
    }
    if !(0..=100).contains(&neutral) {
        warn!("Neutral share {} fell outside 0..=100 after correction; clamping.", neutral);
        neutral = neutral.clamp(0, 100);
    }

    SentimentScores::new(
        positive.clamp(0, 100) as u8,
        neutral as u8,
        negative.clamp(0, 100) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_input_is_quiet_neutral() {
        let result = analyze("");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 75);
        assert_eq!(result.scores, SentimentScores::new(25, 50, 25));
        assert!(result.key_phrases.is_empty());
    }

    #[test]
    fn test_fallback_branch_order() {
        let excited = analyze("!!! ??? ???");
        assert_eq!(excited.key_phrases, vec![ENTHUSIASTIC_TONE.to_string()]);

        let puzzled = analyze("Why? How? Who?");
        assert_eq!(puzzled.sentiment, Sentiment::Neutral);
        assert_eq!(puzzled.confidence, 70);
        assert_eq!(puzzled.scores, SentimentScores::new(20, 60, 20));
        assert_eq!(puzzled.key_phrases, vec![QUESTIONING_TONE.to_string()]);

        let two_each = analyze("Hm!! Really??");
        assert_eq!(two_each.confidence, 75);
    }

    #[test]
    fn test_long_keyword_free_review_reads_enthusiastic() {
        let text = "x".repeat(201);
        let result = analyze(&text);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 65);
        assert_eq!(result.scores, SentimentScores::new(40, 50, 10));

        let exactly_limit = "x".repeat(200);
        assert_eq!(analyze(&exactly_limit).confidence, 75);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 150 two-byte characters: 300 bytes but only 150 characters.
        let text = "é".repeat(150);
        assert_eq!(analyze(&text).confidence, 75);
    }

    #[test]
    fn test_length_counts_scalar_values_outside_the_bmp() {
        // Each emoji is one char but two UTF-16 units.
        let quiet = analyze(&"🎬".repeat(150));
        assert_eq!(quiet.sentiment, Sentiment::Neutral);
        assert_eq!(quiet.confidence, 75);
        assert!(quiet.key_phrases.is_empty());

        let long = analyze(&"🎬".repeat(201));
        assert_eq!(long.confidence, 65);
        assert_eq!(long.key_phrases, vec![ENTHUSIASTIC_TONE.to_string()]);
    }

    #[test]
    fn test_accented_terms_match_as_whole_words() {
        let cliche = analyze("So cliché.");
        assert_eq!(cliche.sentiment, Sentiment::Negative);
        assert_eq!(cliche.key_phrases, vec!["cliché"]);

        // Accented letters continue a word, so neither term matches here.
        let neither = analyze("clichéd and goodé");
        assert!(neither.key_phrases.is_empty());
        assert_eq!(neither.confidence, 75);
    }

    #[test]
    fn test_normalize_scores_single_class() {
        assert_eq!(normalize_scores(100, 0, 0), SentimentScores::new(87, 9, 4));
        assert_eq!(normalize_scores(0, 0, 100), SentimentScores::new(4, 9, 87));
        assert_eq!(normalize_scores(0, 100, 0), SentimentScores::new(5, 90, 5));
    }

    #[test]
    fn test_normalize_scores_handles_negative_neutral_remainder() {
        // 101 positive / 99 negative hits round to 51% + 50%, leaving -1% neutral.
        let scores = normalize_scores(51, -1, 50);
        assert_eq!(scores.total(), 100);
        assert!(scores.neutral >= 9);
    }

    #[test]
    fn test_tie_between_polar_classes_is_neutral() {
        let result = analyze("great but terrible");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        // 50/50 split: 60 + |50 - 50| = 60.
        assert_eq!(result.confidence, 60);
        assert_eq!(result.scores.positive, result.scores.negative);
        assert_eq!(result.scores.total(), 100);
    }

    #[test]
    fn test_negative_verdict_confidence() {
        // 2 negative, 1 positive: 33% / 67% -> 60 + 33.5 = 93.5 -> 94.
        let result = analyze("Boring and predictable, though the score was good.");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.confidence, 94);
        assert_eq!(result.key_phrases, vec!["good", "boring", "predictable"]);
    }

    #[test]
    fn test_custom_lexicon_scorer() {
        let lexicon = Lexicon {
            name: "genre".to_string(),
            positive: vec!["edge of my seat".to_string()],
            negative: vec!["jump-scare".to_string()],
            ..Default::default()
        };
        let scorer = SentimentScorer::new(&lexicon).unwrap();
        assert_eq!(scorer.lexicon_name(), "genre");
        let tally = scorer.tally("On the EDGE OF MY SEAT. One cheap jump-scare, another jump-scare.");
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 2);
        assert_eq!(scorer.analyze("edge of my seat").sentiment, Sentiment::Positive);
    }
}
