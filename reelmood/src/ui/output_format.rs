//! Themed one-line status messages written to a terminal stream.

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_prefixed_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, msg);
    writeln!(writer, "{}", paint(&line, entry, theme_map, supports_color))
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed_message(writer, "", msg, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, supports_color)
}
