//! compiler.rs - Compiles and caches lexicon terms as word-boundary matchers.
//!
//! Each term becomes a case-insensitive regex anchored on Unicode word
//! boundaries on both sides, so `good` never matches inside `goodness` and
//! hyphenated or multi-word terms are matched as a unit. Compiled lexicons
//! live in a global cache keyed by the lexicon's content hash.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::analysis::Sentiment;
use crate::errors::ReelmoodError;
use crate::lexicon::{Lexicon, MAX_TERM_LENGTH, TABLE_ORDER};

/// A single lexicon term ready for matching.
#[derive(Debug)]
pub struct CompiledTerm {
    /// The term as written in the lexicon.
    pub term: String,
    /// The table the term belongs to.
    pub sentiment: Sentiment,
    /// `\b<term>\b`, case-insensitive.
    pub regex: Regex,
}

impl CompiledTerm {
    /// Number of non-overlapping whole-word occurrences in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// All terms of a lexicon, in scan order: positive, negative, then neutral,
/// each table in declaration order.
#[derive(Debug)]
pub struct CompiledLexicon {
    pub terms: Vec<CompiledTerm>,
}

impl CompiledLexicon {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

lazy_static! {
    /// Process-wide cache of compiled lexicons, keyed by `Lexicon::content_hash`.
    static ref COMPILED_LEXICON_CACHE: RwLock<HashMap<u64, Arc<CompiledLexicon>>> = RwLock::new(HashMap::new());
}

/// Builds the matcher for one term.
pub fn compile_term(term: &str, sentiment: Sentiment) -> Result<CompiledTerm, ReelmoodError> {
    if term.len() > MAX_TERM_LENGTH {
        return Err(ReelmoodError::TermLengthExceeded(term.to_string(), term.len(), MAX_TERM_LENGTH));
    }

    let pattern = format!(r"\b{}\b", regex::escape(term));
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(1 << 20)
        .build()
        .map_err(|e| ReelmoodError::TermCompilationError(term.to_string(), e))?;

    Ok(CompiledTerm {
        term: term.to_string(),
        sentiment,
        regex,
    })
}

/// Compiles every term of `lexicon` in scan order.
///
/// This is the low-level function; most callers want [`get_or_compile_lexicon`].
pub fn compile_lexicon(lexicon: &Lexicon) -> Result<CompiledLexicon, ReelmoodError> {
    debug!("Starting compilation of {} lexicon terms.", lexicon.term_count());

    let mut terms = Vec::with_capacity(lexicon.term_count());
    let mut compilation_errors = Vec::new();

    for sentiment in TABLE_ORDER {
        for term in lexicon.terms(sentiment) {
            match compile_term(term, sentiment) {
                Ok(compiled) => terms.push(compiled),
                Err(e) => compilation_errors.push(e),
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(ReelmoodError::InvalidLexicon(format!(
            "Failed to compile {} term(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling lexicon '{}'. Total terms: {}.", lexicon.name, terms.len());
    Ok(CompiledLexicon { terms })
}

/// Returns the compiled form of `lexicon`, compiling and caching it on first use.
pub fn get_or_compile_lexicon(lexicon: &Lexicon) -> Result<Arc<CompiledLexicon>> {
    let cache_key = lexicon.content_hash();

    {
        let cache = COMPILED_LEXICON_CACHE.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled lexicon from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled lexicon not found in cache. Compiling now.");
    let compiled = Arc::new(compile_lexicon(lexicon)?);

    COMPILED_LEXICON_CACHE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached lexicon for key: {}", cache_key);
    Ok(compiled)
}
