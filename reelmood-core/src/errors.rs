//! errors.rs - Custom error types for the reelmood-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! The scorer itself never fails; these errors come from lexicon loading
//! and review input validation.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `reelmood-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReelmoodError {
    #[error("Failed to compile lexicon term '{0}': {1}")]
    TermCompilationError(String, regex::Error),

    #[error("Term '{0}': length ({1}) exceeds maximum allowed ({2})")]
    TermLengthExceeded(String, usize, usize),

    #[error("Lexicon validation failed:\n{0}")]
    InvalidLexicon(String),

    #[error("Term '{term}' appears in both the {first} and {second} tables")]
    LexiconConflict {
        term: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Review text is empty")]
    EmptyReview,

    #[error("Review is {length} characters long; the limit is {max}")]
    ReviewTooLong { length: usize, max: usize },
}
