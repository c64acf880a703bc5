//! Content of the `figure` environment.
//!
//! Recognizes `\caption{…}` and `\includegraphics[…]{…}` (the latter with
//! both arguments marked) and otherwise behaves like text.

use crate::construct::{command, text};
use crate::state::State;
use crate::stream::LineStream;
use crate::tokenizer::Tokenizer;

/// Tokenize one token of figure content.
///
/// ```latex
///   | \begin{figure}
/// > |   \includegraphics[width=5cm]{img.png}
///       ^
/// ```
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if let Some(spec) = command::lookahead(stream, command::FIGURE) {
        return command::begin(stream, tokenizer, spec);
    }

    text::resolve(stream, tokenizer)
}
