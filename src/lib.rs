#![allow(clippy::module_inception)]

use std::{rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into a source, plus the label of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Offsets past `u32::MAX` saturate.
    pub fn at(offset: usize, file: Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=corvus=debug` or
/// `RUST_LOG=corvus=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Returns `(line number, line text, column)` for a byte offset, or `None`
/// when the offset is past the end of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}


/// Renders an error as a caret-style report against the source it came from.
///
/// ```text
/// Error: InvalidCharacter
/// -> main.cv
///   |
/// 2 | y = @;
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("{}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Strips leading whitespace, returning the rest and how many chars were removed.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let rest = string.trim_start();
    let removed = string[..string.len() - rest.len()].chars().count();

    (rest, removed)
}
