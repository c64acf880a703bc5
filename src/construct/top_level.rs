//! The top level: the bottom of the stack, guaranteed to consume.
//!
//! Tries, in order: `\title` and `\author`, `\maketitle` (only when it
//! ends the line), the sectioning commands, the `abstract` environment,
//! the `\end{document}` trailer, then falls through to text.

use crate::construct::{command, environment, text};
use crate::mark::{CheckedProperties, Name as MarkName};
use crate::state::{Action, Frame, Sequence, State};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;
use crate::util::char::whitespace;

/// Tokenize one token at the top level.
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if stream.at_end_of_line() {
        // Blank line with nothing open.
        return State::Stay;
    }

    if let Some(spec) = command::lookahead(stream, command::TOP_LEVEL) {
        return command::begin(stream, tokenizer, spec);
    }

    if lookahead_maketitle(stream) {
        return maketitle(stream, tokenizer);
    }

    if let Some(env) = environment::lookahead_begin(stream, environment::TOP_LEVEL) {
        return environment::begin(stream, tokenizer, env);
    }

    if environment::lookahead_end(stream, "document") {
        tokenizer.push(Frame::Sequence(Sequence {
            step: 0,
            keyword: "\\end",
            name: Some("document"),
            action: Action::Trailer,
        }));
        return State::Retry;
    }

    text::resolve(stream, tokenizer)
}

/// Whether `\maketitle` ends the line at the cursor.
fn lookahead_maketitle(stream: &LineStream) -> bool {
    stream
        .rest()
        .strip_prefix("\\maketitle")
        .map_or(false, |rest| rest.chars().all(whitespace))
}

/// Consume `\maketitle`, marking it.
///
/// ```latex
/// > | \maketitle
///     ^^^^^^^^^^
/// ```
fn maketitle(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    let from = tokenizer.point(stream);
    stream.eat("\\maketitle");
    let at = tokenizer.point(stream);
    tokenizer.open_mark(MarkName::Maketitle, from, at);
    tokenizer.close_mark(at, at, CheckedProperties::default());
    State::Ok(Some(Style::Tag))
}
