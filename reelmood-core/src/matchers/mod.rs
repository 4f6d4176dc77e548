//! Keyword matching for the sentiment scorer.
//!
//! Lexicon terms are compiled into word-boundary regular expressions once and
//! shared between every scorer built from the same lexicon. Matching happens
//! on lowercased review text; the compiled patterns are case-insensitive as
//! well, so callers may pass text in any case.

pub mod compiler;
