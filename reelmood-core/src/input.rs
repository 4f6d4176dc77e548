// File: reelmood-core/src/input.rs
//! Validation of review text before it reaches the scorer.
//!
//! The scorer accepts any string. Input surfaces are expected to reject blank
//! reviews and bound their length first; this module gives them one shared
//! implementation of those checks.
//!
//! License: MIT OR APACHE 2.0

use sha2::{Digest, Sha256};

use crate::errors::ReelmoodError;

/// Default upper bound on review length, in characters.
pub const DEFAULT_MAX_REVIEW_CHARS: usize = 1000;

/// Review text that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    text: String,
    characters: usize,
}

impl ReviewInput {
    /// Validates `text` against `max_chars`.
    ///
    /// # Errors
    ///
    /// * [`ReelmoodError::EmptyReview`] if the text is blank after trimming.
    /// * [`ReelmoodError::ReviewTooLong`] if it has more than `max_chars` characters.
    pub fn new(text: impl Into<String>, max_chars: usize) -> Result<Self, ReelmoodError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ReelmoodError::EmptyReview);
        }
        let characters = text.chars().count();
        if characters > max_chars {
            return Err(ReelmoodError::ReviewTooLong {
                length: characters,
                max: max_chars,
            });
        }
        Ok(Self { text, characters })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn characters(&self) -> usize {
        self.characters
    }

    /// Hex SHA-256 of the review, for correlating reports without echoing the text.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hex::encode(hasher.finalize())
    }
}
