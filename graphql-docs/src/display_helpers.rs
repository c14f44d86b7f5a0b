use std::fmt;
use std::fmt::Display;

use serde_json::Value;

/// Writes `items` separated by `separator`.
pub(crate) struct DisplaySeparated<'a, T>(pub(crate) &'a [T], pub(crate) &'a str);

impl<T: Display> Display for DisplaySeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(item) = iter.next() {
            write!(f, "{item}")?;
        }
        iter.try_for_each(|item| write!(f, "{}{item}", self.1))
    }
}

/// A JSON literal as a reader would write it: strings without their quotes.
pub(crate) struct DisplayLiteral<'a>(pub(crate) &'a Value);

impl Display for DisplayLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(value) => write!(f, "{value}"),
            value => write!(f, "{value}"),
        }
    }
}

/// Text that is safe to put inside a Markdown table cell.
///
/// Angle brackets and pipes are escaped, line breaks collapse into spaces.
pub(crate) struct MarkdownCell<'a>(pub(crate) &'a str);

impl Display for MarkdownCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.lines().map(str::trim).filter(|line| !line.is_empty());
        if let Some(line) = lines.next() {
            write_escaped(f, line)?;
        }
        lines.try_for_each(|line| {
            f.write_str(" ")?;
            write_escaped(f, line)
        })
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '<' => f.write_str("\\<")?,
            '>' => f.write_str("\\>")?,
            '|' => f.write_str("\\|")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}
