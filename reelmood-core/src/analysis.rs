// reelmood-core/src/analysis.rs
//! Data structures describing the outcome of a sentiment analysis.
//!
//! These types are the whole contract between the scorer and whatever renders
//! its verdict. JSON field names follow the camelCase names the presentation
//! layer expects (`keyPhrases`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of key phrases surfaced with a result.
pub const MAX_KEY_PHRASES: usize = 5;

/// The coarse sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Label with the first letter upper-cased, as shown to end users.
    pub fn display_label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage breakdown across the three classes. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

impl SentimentScores {
    pub const fn new(positive: u8, neutral: u8, negative: u8) -> Self {
        Self { positive, neutral, negative }
    }

    pub fn total(&self) -> u32 {
        self.positive as u32 + self.neutral as u32 + self.negative as u32
    }

    /// Share for a single class.
    pub fn get(&self, sentiment: Sentiment) -> u8 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// The structured verdict returned by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Integer percentage, 0 to 100.
    pub confidence: u8,
    pub scores: SentimentScores,
    /// Distinct matched terms in first-match order, at most [`MAX_KEY_PHRASES`].
    pub key_phrases: Vec<String>,
}

/// Raw keyword counts gathered in a single scan of a review.
///
/// `key_phrases` here is the untruncated first-match list; the scorer cuts it
/// down when assembling an [`AnalysisResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub key_phrases: Vec<String>,
}

impl MatchTally {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Records `occurrences` hits of `term` for one class.
    pub(crate) fn record(&mut self, sentiment: Sentiment, term: &str, occurrences: usize) {
        if occurrences == 0 {
            return;
        }
        match sentiment {
            Sentiment::Positive => self.positive += occurrences,
            Sentiment::Negative => self.negative += occurrences,
            Sentiment::Neutral => self.neutral += occurrences,
        }
        if !self.key_phrases.iter().any(|p| p == term) {
            self.key_phrases.push(term.to_string());
        }
    }

    /// The class holding a strict majority over both others, if any.
    pub fn dominant(&self) -> Option<Sentiment> {
        if self.positive > self.negative && self.positive > self.neutral {
            Some(Sentiment::Positive)
        } else if self.negative > self.positive && self.negative > self.neutral {
            Some(Sentiment::Negative)
        } else {
            None
        }
    }
}
