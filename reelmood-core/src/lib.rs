// reelmood-core/src/lib.rs
//! # reelmood Core Library
//!
//! `reelmood-core` provides the platform-independent logic behind reelmood's
//! movie review verdicts: keyword lexicons, their compilation into word-boundary
//! matchers, and the lexical scorer that turns a review into a sentiment label,
//! a confidence and a percentage breakdown.
//!
//! The library is pure and stateless. It performs no I/O on the scoring path
//! and keeps no state between calls beyond read-only compiled lexicons.
//!
//! ## Modules
//!
//! * `analysis`: Result types (`AnalysisResult`, `Sentiment`, `SentimentScores`).
//! * `lexicon`: The built-in keyword tables, YAML lexicon loading, validation and merging.
//! * `matchers`: Compilation and caching of lexicon terms as word-boundary regexes.
//! * `scorer`: The `SentimentScorer` and the one-shot [`analyze`] function.
//! * `input`: Review text validation for input surfaces.
//! * `errors`: The `ReelmoodError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use reelmood_core::{analyze, Sentiment};
//!
//! let result = analyze("This movie was amazing and brilliant!");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.key_phrases, vec!["amazing", "brilliant"]);
//! assert_eq!(result.scores.total(), 100);
//! ```
//!
//! ## Error Handling
//!
//! Scoring never fails. Loading lexicons and validating review input return
//! `anyhow::Result` or the structured [`ReelmoodError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod errors;
pub mod input;
pub mod lexicon;
pub mod matchers;
pub mod scorer;

/// Re-exports the result types.
pub use analysis::{AnalysisResult, MatchTally, Sentiment, SentimentScores, MAX_KEY_PHRASES};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ReelmoodError;

/// Re-exports review input validation.
pub use input::{ReviewInput, DEFAULT_MAX_REVIEW_CHARS};

/// Re-exports lexicon configuration types and helpers.
pub use lexicon::{
    lexicon_candidate_paths,
    load_lexicon_by_name,
    merge_lexicons,
    Lexicon,
    BUILTIN_LEXICON_NAME,
    UNNAMED_LEXICON_NAME,
    MAX_TERM_LENGTH,
};

/// Re-exports the scorer.
pub use scorer::{analyze, SentimentScorer, ENTHUSIASTIC_TONE, QUESTIONING_TONE};

pub use matchers::compiler::{compile_lexicon, get_or_compile_lexicon, CompiledLexicon, CompiledTerm};
