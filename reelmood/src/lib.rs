// reelmood/src/lib.rs
//! # reelmood CLI Application
//!
//! This crate provides the terminal interface for the reelmood sentiment
//! scorer: argument parsing, review input handling, themed rendering of the
//! verdict and lexicon tooling. All scoring lives in `reelmood-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::analyze::{run_analyze_opts, AnalysisReport, AnalyzeOptions};
