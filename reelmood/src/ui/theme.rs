//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of various output elements. It supports 16-color
//! ANSI named colors for foreground styling and provides functionality to
//! load themes from YAML files and manage default theme settings.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use owo_colors::{AnsiColors, OwoColorize};
use reelmood_core::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    /// Successful operation messages.
    Success,
    /// Error messages.
    Error,
    /// The verdict label and bar segment for positive reviews.
    SentimentPositive,
    /// The verdict label and bar segment for negative reviews.
    SentimentNegative,
    /// The verdict label and bar segment for neutral reviews.
    SentimentNeutral,
    /// The confidence figure.
    Confidence,
    /// Key phrase tokens.
    KeyPhrase,
}

pub const ALL_THEME_ENTRIES: [ThemeEntry; 8] = [
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Error,
    ThemeEntry::SentimentPositive,
    ThemeEntry::SentimentNegative,
    ThemeEntry::SentimentNeutral,
    ThemeEntry::Confidence,
    ThemeEntry::KeyPhrase,
];

impl ThemeEntry {
    /// The entry used to colour a given sentiment.
    pub fn for_sentiment(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => ThemeEntry::SentimentPositive,
            Sentiment::Negative => ThemeEntry::SentimentNegative,
            Sentiment::Neutral => ThemeEntry::SentimentNeutral,
        }
    }
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    /// Converts the `ThemeColor` into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

fn named(color: &str) -> ThemeStyle {
    ThemeStyle { fg: Some(ThemeColor::Named(color.to_string())) }
}

static DEFAULT_THEME: Lazy<ThemeMap> = Lazy::new(|| {
    let mut theme = HashMap::new();
    theme.insert(ThemeEntry::Header, named("brightwhite"));
    theme.insert(ThemeEntry::Success, named("green"));
    theme.insert(ThemeEntry::Error, named("red"));
    theme.insert(ThemeEntry::SentimentPositive, named("green"));
    theme.insert(ThemeEntry::SentimentNegative, named("red"));
    theme.insert(ThemeEntry::SentimentNeutral, named("yellow"));
    theme.insert(ThemeEntry::Confidence, named("brightblue"));
    theme.insert(ThemeEntry::KeyPhrase, named("magenta"));
    theme
});

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme from a YAML file; entries the file omits keep their default style.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for style in custom.values() {
            if let Some(ThemeColor::Named(name)) = &style.fg {
                name.parse::<ThemeColor>()
                    .with_context(|| format!("Invalid color '{}' in theme file {}", name, path.display()))?;
            }
        }

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        DEFAULT_THEME.clone()
    }
}

/// Applies the theme colour for `entry` to `text` when colour output is enabled.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ALL_THEME_ENTRIES {
            assert!(theme.contains_key(&entry), "missing {:?}", entry);
        }
    }

    #[test]
    fn custom_theme_overrides_and_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sentiment_positive:\n  fg: brightcyan").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(
            theme[&ThemeEntry::SentimentPositive].fg,
            Some(ThemeColor::Named("brightcyan".to_string()))
        );
        assert_eq!(theme[&ThemeEntry::Error], named("red"));
    }

    #[test]
    fn custom_theme_rejects_unknown_color() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "error:\n  fg: chartreuse").unwrap();
        assert!(ThemeStyle::load_from_file(file.path()).is_err());
    }

    #[test]
    fn custom_theme_rejects_unknown_entry() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "warn:\n  fg: yellow").unwrap();
        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse theme file"));
    }

    #[test]
    fn paint_is_plain_without_color_support() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(paint("Positive", ThemeEntry::SentimentPositive, &theme, false), "Positive");
        assert_ne!(paint("Positive", ThemeEntry::SentimentPositive, &theme, true), "Positive");
    }
}
