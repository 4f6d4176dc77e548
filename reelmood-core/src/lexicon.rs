//! Lexicon management for `reelmood-core`.
//!
//! A lexicon is the set of three keyword tables (positive, negative, neutral)
//! the scorer counts against. The built-in tables live in this module as
//! constant data; custom lexicons are YAML documents that can be loaded,
//! validated and merged on top of the built-in ones.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::analysis::Sentiment;
use crate::errors::ReelmoodError;

/// Maximum allowed byte length of a single lexicon term.
pub const MAX_TERM_LENGTH: usize = 64;

/// Name reported for the built-in lexicon.
pub const BUILTIN_LEXICON_NAME: &str = "builtin";

/// Stands in for the name of a user lexicon that declares none.
pub const UNNAMED_LEXICON_NAME: &str = "custom";

pub const DEFAULT_POSITIVE_TERMS: &[&str] = &[
    "amazing", "excellent", "fantastic", "brilliant", "outstanding", "superb",
    "wonderful", "incredible", "spectacular", "perfect", "love", "loved",
    "great", "good", "awesome", "best", "beautiful", "impressive",
    "entertaining", "enjoyable", "hilarious", "heartwarming", "thrilling",
];

pub const DEFAULT_NEGATIVE_TERMS: &[&str] = &[
    "terrible", "awful", "horrible", "worst", "bad", "disappointing",
    "boring", "waste", "poor", "pathetic", "ridiculous", "stupid",
    "hate", "hated", "annoying", "confusing", "meaningless", "shallow",
    "predictable", "cliché", "overrated", "underwhelming", "forgettable",
];

pub const DEFAULT_NEUTRAL_TERMS: &[&str] = &[
    "okay", "average", "decent", "fine", "watchable", "mediocre",
    "standard", "typical", "normal", "ordinary", "regular",
];

/// Scan order of the three tables. Key phrases are collected in this order.
pub const TABLE_ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

/// Three ordered keyword tables plus descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Lexicon {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "1.0.0".to_string(),
            description: None,
            positive: Vec::new(),
            negative: Vec::new(),
            neutral: Vec::new(),
        }
    }
}

fn to_owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Lexicon {
    /// The built-in movie review vocabulary.
    pub fn builtin() -> Self {
        Self {
            name: BUILTIN_LEXICON_NAME.to_string(),
            version: "1.0.0".to_string(),
            description: Some("Built-in movie review vocabulary".to_string()),
            positive: to_owned_terms(DEFAULT_POSITIVE_TERMS),
            negative: to_owned_terms(DEFAULT_NEGATIVE_TERMS),
            neutral: to_owned_terms(DEFAULT_NEUTRAL_TERMS),
        }
    }

    /// Loads and validates a lexicon from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading lexicon from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let lexicon = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load lexicon file {}", path.display()))?;
        info!(
            "Loaded lexicon '{}' with {} terms from {}.",
            lexicon.name,
            lexicon.term_count(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Parses and validates a lexicon from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_yml::from_str(text).context("Failed to parse lexicon YAML")?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yml::to_string(self).context("Failed to serialize lexicon")
    }

    /// The ordered terms of one table.
    pub fn terms(&self, sentiment: Sentiment) -> &[String] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    fn terms_mut(&mut self, sentiment: Sentiment) -> &mut Vec<String> {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
            Sentiment::Neutral => &mut self.neutral,
        }
    }

    pub fn term_count(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }

    /// Stable key identifying the lexicon contents, used by the compile cache.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for sentiment in TABLE_ORDER {
            self.terms(sentiment).hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Checks term shape, per-table duplicates and cross-table disjointness.
    ///
    /// Every problem found is reported in a single error.
    pub fn validate(&self) -> Result<(), ReelmoodError> {
        let mut errors = Vec::new();
        let mut owner: HashMap<&str, Sentiment> = HashMap::new();

        for sentiment in TABLE_ORDER {
            let mut seen = HashSet::new();
            for term in self.terms(sentiment) {
                if let Some(problem) = term_problem(term) {
                    errors.push(format!("{} term '{}': {}", sentiment.display_label(), term, problem));
                    continue;
                }
                if !seen.insert(term.as_str()) {
                    errors.push(format!("Duplicate {} term '{}'.", sentiment, term));
                    continue;
                }
                if let Some(first) = owner.insert(term.as_str(), sentiment) {
                    errors.push(
                        ReelmoodError::LexiconConflict {
                            term: term.clone(),
                            first: first.as_str(),
                            second: sentiment.as_str(),
                        }
                        .to_string(),
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ReelmoodError::InvalidLexicon(errors.join("\n")))
        }
    }
}

/// Returns a description of what is wrong with `term`, if anything.
fn term_problem(term: &str) -> Option<String> {
    if term.is_empty() {
        return Some("term is empty".to_string());
    }
    if term.len() > MAX_TERM_LENGTH {
        return Some(ReelmoodError::TermLengthExceeded(term.to_string(), term.len(), MAX_TERM_LENGTH).to_string());
    }
    if term.trim() != term {
        return Some("term has leading or trailing whitespace".to_string());
    }
    if term.to_lowercase() != term {
        return Some("term must be lowercase".to_string());
    }
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let starts = term.chars().next().is_some_and(is_word);
    let ends = term.chars().next_back().is_some_and(is_word);
    if !starts || !ends {
        return Some("term must start and end with a letter or digit".to_string());
    }
    None
}

/// Merges a user lexicon into the defaults.
///
/// Default terms keep their positions; user terms not already present are
/// appended to the matching table. The merged lexicon takes the user's name
/// and version when one is given, and is called `<default>+custom` otherwise.
pub fn merge_lexicons(default: Lexicon, user: Option<Lexicon>) -> Result<Lexicon, ReelmoodError> {
    let Some(user) = user else {
        debug!("No user lexicon provided; using '{}' unchanged.", default.name);
        return Ok(default);
    };

    debug!(
        "Merging user lexicon '{}' ({} terms) into '{}' ({} terms).",
        user.name,
        user.term_count(),
        default.name,
        default.term_count()
    );

    let mut merged = default;
    for sentiment in TABLE_ORDER {
        let table = merged.terms_mut(sentiment);
        for term in user.terms(sentiment) {
            if table.contains(term) {
                debug!("Term '{}' already present in the {} table.", term, sentiment);
            } else {
                table.push(term.clone());
            }
        }
    }

    if user.name.is_empty() {
        merged.name = format!("{}+{}", merged.name, UNNAMED_LEXICON_NAME);
    } else {
        merged.name = user.name;
        merged.version = user.version;
        merged.description = user.description.or(merged.description);
    }

    merged.validate()?;
    debug!("Final lexicon '{}' has {} terms.", merged.name, merged.term_count());
    Ok(merged)
}

/// Locations searched for a lexicon given by name, in priority order.
pub fn lexicon_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".reelmood").join("lexicons")),
        dirs::config_dir().map(|p| p.join("reelmood").join("lexicons")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Loads a lexicon from a direct file path, or by name from the lookup directories.
pub fn load_lexicon_by_name(name_or_path: &str) -> Result<Lexicon> {
    debug!("Attempting to load lexicon from: '{}'", name_or_path);

    let path = Path::new(name_or_path);
    let found = if path.is_file() {
        debug!("Input is a valid file path. Loading directly from: {}", path.display());
        Some(path.to_path_buf())
    } else {
        lexicon_candidate_paths(name_or_path).into_iter().find(|p| p.exists())
    };
    let path_to_load = found.with_context(|| {
        format!(
            "Lexicon '{}' not found. It is not a valid file path, and was not found in expected locations.",
            name_or_path
        )
    })?;

    let mut lexicon = Lexicon::load_from_file(&path_to_load)?;
    if lexicon.name.is_empty() {
        let stem = path_to_load
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNNAMED_LEXICON_NAME.to_string());
        warn!("Lexicon at {} has no name; using '{}'.", path_to_load.display(), stem);
        lexicon.name = stem;
    }
    Ok(lexicon)
}
