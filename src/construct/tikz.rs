//! Content of `tikzpicture`.
//!
//! Nothing inside a tikz picture is marked: nested environments pass
//! through, commands are styled, and everything else goes to the shared
//! fallback.

use crate::construct::{command, environment, text};
use crate::state::State;
use crate::stream::LineStream;
use crate::tokenizer::Tokenizer;

/// Tokenize one token of tikz content.
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if let Some(keyword) = environment::lookahead_pass(stream) {
        return environment::pass(tokenizer, keyword);
    }

    if command::lookahead_generic(stream) {
        return command::generic(stream);
    }

    text::other(stream)
}
