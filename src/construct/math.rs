//! The math content tokenizer.
//!
//! Math is the inside of `$…$`, `$$…$$`, `\[…\]`, `\(…\)`, and the
//! display-math environments.
//! It knows `\verb`, the generic environment pass-through, commands, the
//! operators `^ _ & ~`, and numeric literals; everything else is one
//! unstyled character.

use crate::construct::{command, environment, verb};
use crate::state::State;
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;

/// Tokenize one token of math.
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if verb::lookahead(stream) {
        return verb::begin(stream, tokenizer);
    }

    if let Some(keyword) = environment::lookahead_pass(stream) {
        return environment::pass(tokenizer, keyword);
    }

    if command::lookahead_generic(stream) {
        return command::generic(stream);
    }

    match stream.peek() {
        Some('^' | '_' | '&' | '~') => {
            stream.next();
            State::Ok(Some(Style::Tag))
        }
        Some(char) if char.is_ascii_digit() => number(stream),
        _ => {
            stream.next();
            State::Ok(None)
        }
    }
}

/// Consume a numeric literal.
///
/// Dotted continuations stay in the literal only when a digit follows, so
/// `1024.00` is one token and the dot of `3.` is not.
///
/// ```latex
/// > | $1024.00$
///      ^^^^^^^
/// ```
fn number(stream: &mut LineStream) -> State {
    stream.eat_while(|char| char.is_ascii_digit());

    loop {
        let mut chars = stream.rest().chars();
        if chars.next() == Some('.') && chars.next().map_or(false, |char| char.is_ascii_digit()) {
            stream.eat(".");
            stream.eat_while(|char| char.is_ascii_digit());
        } else {
            break;
        }
    }

    State::Ok(Some(Style::Number))
}
