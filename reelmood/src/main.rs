// reelmood/src/main.rs
//! reelmood entry point.
//!
//! Parses the command line, sets up logging and the theme, then hands off to
//! the selected subcommand. Failures are reported as a themed `Error:` line
//! on stderr with exit code 1.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, LevelFilter};

use reelmood::cli::Cli;
use reelmood::commands;
use reelmood::logger;
use reelmood::ui::output_format;
use reelmood::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};

fn error_msg(msg: &str, theme_map: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg, theme_map, stderr_supports_color);
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("reelmood started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(args.theme.as_ref()) {
        Ok(theme_map) => theme_map,
        Err(e) => {
            error_msg(&format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match commands::run(args.command, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(&format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
