//! `\verb`, with any non-letter delimiter.
//!
//! ```latex
//! > | \verb|x & y|
//!     ^^^^^^^^^^^^
//! > | \verb*!a b!
//!     ^^^^^^^^^^^
//! ```
//!
//! The opener (`\verb`, the optional star, and the delimiter) is one `tag`
//! token; the content is `string` up to the next delimiter, which is `tag`
//! again.
//! A delimiter that never shows up on the current line leaves the frame on
//! the stack, so scanning resumes on the next line.
//!
//! `\verbatim` (a letter after `\verb`) is not this construct: the
//! delimiter must be a non-letter, which is also what keeps `\verbaXa` a
//! generic command.

use crate::state::{Frame, State};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;

/// Whether `\verb*?X` with a non-letter `X` is at the cursor.
pub fn lookahead(stream: &LineStream) -> bool {
    stream.rest().strip_prefix("\\verb").map_or(false, |rest| {
        let rest = rest.strip_prefix('*').unwrap_or(rest);
        rest.chars()
            .next()
            .map_or(false, |char| !char.is_ascii_alphabetic())
    })
}

/// Consume the opener and start scanning for the delimiter.
pub fn begin(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    stream.eat("\\verb");
    stream.eat("*");
    let delim = stream.next().expect("delimiter checked by the lookahead");
    tokenizer.push(Frame::Verb { delim });
    State::Ok(Some(Style::Tag))
}

/// Inside `\verb`, scanning for the delimiter.
///
/// ```latex
/// > | \verb|x & y|
///           ^^^^^^
/// ```
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer, delim: char) -> State {
    if stream.at_end_of_line() {
        // Blank line; keep scanning on the next one.
        return State::Stay;
    }

    if stream.peek() == Some(delim) {
        stream.next();
        tokenizer.pop();
        return State::Ok(Some(Style::Tag));
    }

    if !stream.skip_to(delim) {
        stream.skip_to_end();
    }
    State::Ok(Some(Style::String))
}
