//! The text content tokenizer.
//!
//! Text is the inside of arguments, groups, and most environments, and the
//! fallback of the top level.
//! The constructs found in text, in the order tried:
//!
//! * Argument-taking commands (`\textbf`, `\textit`, `\ref`, citations,
//!   `\label`, `\input`, `\include`)
//! * Display math `\[…\]`, inline math `\(…\)`
//! * Recognized environments (figure, lists, math, verbatim family,
//!   `comment`, `tikzpicture`)
//! * `\verb`
//! * The generic `\begin`/`\end` pass-through
//! * The generic command
//! * Brace groups (recursing into text)
//! * `$$…$$` display math, then `$…$` inline math (whose abandon set is
//!   literally `$$`)
//! * The "other" fallback

use crate::construct::{command, environment, verb};
use crate::mark::Name as MarkName;
use crate::state::{ContentKind, Delimited, Frame, State};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;

/// Tokenize one token of text.
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    if let Some(spec) = command::lookahead(stream, command::TEXT) {
        return command::begin(stream, tokenizer, spec);
    }

    if stream.lookahead("\\[") {
        return math_open(stream, tokenizer, "\\[", "\\]", MarkName::DisplayMath, None);
    }

    if stream.lookahead("\\(") {
        return math_open(stream, tokenizer, "\\(", "\\)", MarkName::InlineMath, None);
    }

    if let Some(env) = environment::lookahead_begin(stream, environment::TEXT) {
        return environment::begin(stream, tokenizer, env);
    }

    if verb::lookahead(stream) {
        return verb::begin(stream, tokenizer);
    }

    if let Some(keyword) = environment::lookahead_pass(stream) {
        return environment::pass(tokenizer, keyword);
    }

    if command::lookahead_generic(stream) {
        return command::generic(stream);
    }

    if stream.eat("{") {
        tokenizer.push(Frame::Delimited(Delimited {
            closer: "}",
            close_style: Some(Style::Bracket),
            abandon: None,
            content: ContentKind::Text,
            marked: false,
        }));
        return State::Ok(Some(Style::Bracket));
    }

    if stream.lookahead("$$") {
        return math_open(stream, tokenizer, "$$", "$$", MarkName::DisplayMath, None);
    }

    if stream.lookahead("$") {
        return math_open(stream, tokenizer, "$", "$", MarkName::InlineMath, Some("$$"));
    }

    other(stream)
}

/// Open a marked math span.
///
/// ```latex
/// > | foo $x + y$
///         ^
/// ```
fn math_open(
    stream: &mut LineStream,
    tokenizer: &mut Tokenizer,
    opener: &str,
    closer: &'static str,
    kind: MarkName,
    abandon: Option<&'static str>,
) -> State {
    let from = tokenizer.point(stream);
    stream.eat(opener);
    tokenizer.open_mark(kind, from, tokenizer.point(stream));
    tokenizer.push(Frame::Delimited(Delimited {
        closer,
        close_style: Some(Style::Keyword),
        abandon,
        content: ContentKind::Math,
        marked: true,
    }));
    State::Ok(Some(Style::Keyword))
}

/// The fallback: brackets, active characters, or a run of plain text.
///
/// Always consumes at least one character.
pub fn other(stream: &mut LineStream) -> State {
    match stream.peek() {
        Some('{' | '}' | '[' | ']') => {
            stream.next();
            State::Ok(Some(Style::Bracket))
        }
        Some('&' | '~' | '^' | '_') => {
            stream.next();
            State::Ok(Some(Style::Tag))
        }
        _ => {
            let eaten = stream.eat_while(|char| {
                !matches!(
                    char,
                    '\\' | '{' | '}' | '[' | ']' | '$' | '%' | '&' | '~' | '^' | '_'
                )
            });
            if eaten == 0 {
                stream.next();
            }
            State::Ok(None)
        }
    }
}
