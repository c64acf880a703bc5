//! `%` line comments.
//!
//! Tried by the driver before any frame: optional whitespace and a `%`
//! consume the rest of the line as `comment`.

use crate::stream::LineStream;
use crate::token::Style;
use crate::util::char::whitespace;

/// Try the comment matcher at the cursor.
///
/// ```latex
/// > | foo % bar
///         ^^^^^
/// ```
pub fn resolve(stream: &mut LineStream) -> Option<Style> {
    if stream
        .rest()
        .trim_start_matches(whitespace)
        .starts_with('%')
    {
        stream.skip_to_end();
        return Some(Style::Comment);
    }

    None
}
