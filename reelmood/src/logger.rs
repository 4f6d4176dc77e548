//! Logger initialisation for the reelmood binary.
//!
//! Logging goes through the `log` facade and is printed to stderr by
//! `env_logger`. `RUST_LOG` is honoured unless the caller passes an explicit
//! level (from `--quiet` or `--debug`).

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises the global logger. Calling it again is a no-op.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
