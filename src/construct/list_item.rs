//! Content of `itemize` and `enumerate`: the `\item` bullet.
//!
//! `\item` is the item form only at column 0, followed by a space or the
//! end of the line; anything else (including `x \item` and `\item[…]`)
//! degrades to text.
//! The mark opens and immediately closes, so its inner range is empty and
//! its outer range covers the bullet.
//!
//! Numbering scans the closed marks from newest to oldest, stopping at the
//! first mark that starts on a line before the enclosing list opened;
//! among those scanned, the most recent sibling (same kind, same parent)
//! provides the predecessor, so nested lists count independently.

use crate::construct::text;
use crate::mark::{CheckedProperties, MarkId, Name as MarkName};
use crate::state::State;
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;

/// Tokenize one token of list content.
///
/// ```latex
///   | \begin{enumerate}
/// > | \item okok
///     ^^^^^^
/// ```
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if stream.at_start_of_line() {
        if let Some(trailing_space) = lookahead(stream) {
            return item(stream, tokenizer, trailing_space);
        }
    }

    text::resolve(stream, tokenizer)
}

/// Whether the item form is at the cursor; `Some(true)` when a space
/// follows `\item`.
fn lookahead(stream: &LineStream) -> Option<bool> {
    let rest = stream.rest().strip_prefix("\\item")?;
    if rest.is_empty() {
        Some(false)
    } else if rest.starts_with(' ') {
        Some(true)
    } else {
        None
    }
}

/// Consume the bullet and produce its mark.
fn item(stream: &mut LineStream, tokenizer: &mut Tokenizer, trailing_space: bool) -> State {
    let from = tokenizer.point(stream);
    stream.eat("\\item");
    if trailing_space {
        stream.eat(" ");
    }

    let list = *tokenizer
        .open_marks
        .last()
        .expect("list content implies an open list mark");
    let kind = if list.kind == MarkName::Enumerate {
        MarkName::EnumerateItem
    } else {
        MarkName::Item
    };
    let number = next_number(tokenizer, kind, list.id, list.from.line);

    let at = tokenizer.point(stream);
    tokenizer.open_mark(kind, from, at);
    let checked = CheckedProperties {
        kind: Some(kind),
        number: Some(number),
        open_marks_count: Some(tokenizer.open_marks.len() - 1),
        ..CheckedProperties::default()
    };
    tokenizer.close_mark(at, at, checked);

    State::Ok(Some(Style::Tag))
}

/// 1-based number of the next item: one past the most recent sibling, if
/// any closed since the enclosing list opened.
fn next_number(tokenizer: &Tokenizer, kind: MarkName, list: MarkId, list_line: usize) -> u32 {
    for mark in tokenizer.marks.iter().rev() {
        if mark.from.line < list_line {
            break;
        }
        if mark.kind == kind && mark.open_parent == Some(list) {
            return mark.checked_properties.number.unwrap_or(0) + 1;
        }
    }

    1
}
