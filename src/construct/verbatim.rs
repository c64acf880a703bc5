//! Content of the verbatim family and the `comment` environment.
//!
//! Runs of non-backslash characters are one token; a backslash is consumed
//! on its own.
//! Splitting at backslashes puts `\end{…}` at a call boundary, where the
//! environment frame's end lookahead sees it.

use crate::state::State;
use crate::stream::LineStream;
use crate::token::Style;

/// Tokenize one run of verbatim content.
///
/// ```latex
///   | \begin{verbatim}
/// > |   x & y \ z
///       ^^^^^^
/// ```
pub fn resolve(stream: &mut LineStream, style: Style) -> State {
    if stream.peek() == Some('\\') {
        stream.next();
        return State::Ok(Some(style));
    }

    let eaten = stream.eat_while(|char| char != '\\');
    debug_assert!(eaten > 0, "expected content before the end of the line");
    State::Ok(Some(style))
}
