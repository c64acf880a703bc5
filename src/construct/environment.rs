//! Environments: `\begin{name}…\end{name}`, potentially multi-line.
//!
//! Recognized environments are described by a static table entry; anything
//! else is consumed by the generic pass-through, which styles the
//! begin/end sequence without entering anything.
//!
//! A begin or end sequence is consumed one step per call ([`Sequence`][]):
//! the keyword with trailing whitespace (`tag`), the opening brace
//! (`bracket`), the name (no style), the closing brace (`bracket`), then
//! the after-action runs: opening the environment's mark and entering it,
//! or recording the inner end and closing the mark.
//!
//! Math and list environments only match when `\begin{…}` ends its line;
//! the end lookahead is anchored at the cursor but never line-anchored, so
//! trailing text after `\end{…}` is tolerated everywhere.

use crate::mark::{CheckedProperties, Name as MarkName};
use crate::state::{content, Action, ContentKind, Frame, Sequence, State};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;
use crate::util::char::{environment_name, whitespace};

/// A recognized environment.
#[derive(Debug, Eq, PartialEq)]
pub struct EnvSpec {
    /// Name between the braces (`figure*` includes its star).
    pub name: &'static str,
    /// Mark opened over the whole environment, if any.
    pub kind: Option<MarkName>,
    /// Content tokenizer for the inside.
    pub content: ContentKind,
    /// Whether blank lines are part of the content (otherwise they abandon
    /// the environment).
    pub allow_blank_lines: bool,
    /// Whether `\begin{name}` must end its line to match.
    pub begin_ends_line: bool,
}

const fn math(name: &'static str) -> EnvSpec {
    EnvSpec {
        name,
        kind: Some(MarkName::OuterDisplayMath),
        content: ContentKind::Math,
        allow_blank_lines: false,
        begin_ends_line: true,
    }
}

const fn ignored(name: &'static str) -> EnvSpec {
    EnvSpec {
        name,
        kind: None,
        content: ContentKind::Verbatim,
        allow_blank_lines: true,
        begin_ends_line: false,
    }
}

/// Environments recognized at the top level.
pub static TOP_LEVEL: &[EnvSpec] = &[EnvSpec {
    name: "abstract",
    kind: Some(MarkName::Abstract),
    content: ContentKind::Text,
    allow_blank_lines: true,
    begin_ends_line: false,
}];

/// Environments recognized in text.
pub static TEXT: &[EnvSpec] = &[
    EnvSpec {
        name: "figure",
        kind: Some(MarkName::Figure),
        content: ContentKind::Figure,
        allow_blank_lines: false,
        begin_ends_line: false,
    },
    EnvSpec {
        name: "itemize",
        kind: Some(MarkName::Itemize),
        content: ContentKind::List,
        allow_blank_lines: false,
        begin_ends_line: true,
    },
    EnvSpec {
        name: "enumerate",
        kind: Some(MarkName::Enumerate),
        content: ContentKind::List,
        allow_blank_lines: false,
        begin_ends_line: true,
    },
    math("equation"),
    math("equation*"),
    math("eqnarray"),
    math("eqnarray*"),
    math("align"),
    math("align*"),
    math("gather"),
    math("gather*"),
    math("multline"),
    math("multline*"),
    math("alignat"),
    math("alignat*"),
    math("xalignat"),
    math("xalignat*"),
    math("math"),
    math("displaymath"),
    ignored("verbatim"),
    ignored("verbatim*"),
    ignored("lstlisting"),
    ignored("minted"),
    EnvSpec {
        name: "comment",
        kind: None,
        content: ContentKind::Comment,
        allow_blank_lines: true,
        begin_ends_line: false,
    },
    EnvSpec {
        name: "tikzpicture",
        kind: None,
        content: ContentKind::Tikz,
        allow_blank_lines: true,
        begin_ends_line: false,
    },
];

/// Find the environment whose `\begin\s*{name}` lookahead matches at the
/// cursor.
///
/// When the table entry requires it, the rest of the line after `{name}`
/// must be blank.
pub fn lookahead_begin<'e>(stream: &LineStream, environments: &'e [EnvSpec]) -> Option<&'e EnvSpec> {
    let rest = stream.rest().strip_prefix("\\begin")?;
    let rest = rest.trim_start_matches(whitespace);
    let rest = rest.strip_prefix('{')?;

    for env in environments {
        if let Some(after) = rest.strip_prefix(env.name) {
            if let Some(after) = after.strip_prefix('}') {
                if !env.begin_ends_line || after.chars().all(whitespace) {
                    return Some(env);
                }
            }
        }
    }

    None
}

/// Whether `\end\s*{name}` is at the cursor.
///
/// Anchored at the cursor only; trailing text on the `\end` line is fine.
pub fn lookahead_end(stream: &LineStream, name: &str) -> bool {
    stream
        .rest()
        .strip_prefix("\\end")
        .map(|rest| rest.trim_start_matches(whitespace))
        .and_then(|rest| rest.strip_prefix('{'))
        .and_then(|rest| rest.strip_prefix(name))
        .map_or(false, |rest| rest.starts_with('}'))
}

/// Whether a `\begin`/`\end` of *any* environment is at the cursor,
/// returning the keyword.
///
/// Used for the generic pass-through in text, math, and tikz content.
pub fn lookahead_pass(stream: &LineStream) -> Option<&'static str> {
    for keyword in ["\\begin", "\\end"] {
        if let Some(rest) = stream.rest().strip_prefix(keyword) {
            let rest = rest.trim_start_matches(whitespace);
            if let Some(rest) = rest.strip_prefix('{') {
                let after = rest.trim_start_matches(|char: char| {
                    char.is_ascii_alphanumeric() || char == '_'
                });
                if after.len() < rest.len() {
                    let after = after.strip_prefix('*').unwrap_or(after);
                    if after.starts_with('}') {
                        return Some(keyword);
                    }
                }
            }
        }
    }

    None
}

/// Start a recognized environment.
///
/// ```latex
/// > | \begin{enumerate}
///     ^
/// ```
pub fn begin(stream: &LineStream, tokenizer: &mut Tokenizer, env: &'static EnvSpec) -> State {
    let from = tokenizer.point(stream);
    tokenizer.push(Frame::Sequence(Sequence {
        step: 0,
        keyword: "\\begin",
        name: Some(env.name),
        action: Action::Enter { env, from },
    }));
    State::Retry
}

/// Start a generic `\begin`/`\end` pass-through.
pub fn pass(tokenizer: &mut Tokenizer, keyword: &'static str) -> State {
    tokenizer.push(Frame::Sequence(Sequence {
        step: 0,
        keyword,
        name: None,
        action: Action::Pass,
    }));
    State::Retry
}

/// Inside an environment.
///
/// ```latex
///   | \begin{equation}
/// > |   \alpha
///       ^
/// > | \end{equation}
///     ^
/// ```
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer, env: &'static EnvSpec) -> State {
    if stream.blank() {
        if !env.allow_blank_lines {
            if env.kind.is_some() {
                tokenizer.abandon_mark();
            }
            return State::Nok;
        }
        if stream.at_end_of_line() {
            return State::Stay;
        }
    }

    if lookahead_end(stream, env.name) {
        let content_to = tokenizer.point(stream);
        tokenizer.pop();
        tokenizer.push(Frame::Sequence(Sequence {
            step: 0,
            keyword: "\\end",
            name: Some(env.name),
            action: Action::Exit { env, content_to },
        }));
        return State::Retry;
    }

    content(env.content, stream, tokenizer)
}

/// Replace the sequence frame with its next step.
fn advance(tokenizer: &mut Tokenizer, sequence: Sequence) {
    *tokenizer
        .stack
        .last_mut()
        .expect("sequence frame is on top") = Frame::Sequence(Sequence {
        step: sequence.step + 1,
        ..sequence
    });
}

/// One step of a begin/end sequence.
///
/// ```latex
/// > | \begin{enumerate}
///     ^^^^^^
/// > | \begin{enumerate}
///           ^
/// > | \begin{enumerate}
///            ^^^^^^^^^
/// > | \begin{enumerate}
///                     ^
/// ```
pub fn sequence(stream: &mut LineStream, tokenizer: &mut Tokenizer, seq: Sequence) -> State {
    match seq.step {
        0 => {
            if !stream.eat(seq.keyword) {
                return State::Nok;
            }
            stream.eat_while(whitespace);
            advance(tokenizer, seq);
            State::Ok(Some(Style::Tag))
        }
        1 => {
            if !stream.eat("{") {
                return State::Nok;
            }
            advance(tokenizer, seq);
            State::Ok(Some(Style::Bracket))
        }
        2 => {
            let eaten = match seq.name {
                Some(name) => {
                    if stream.eat(name) {
                        name.len()
                    } else {
                        0
                    }
                }
                None => stream.eat_while(environment_name),
            };
            advance(tokenizer, seq);
            if eaten == 0 {
                State::Retry
            } else {
                State::Ok(None)
            }
        }
        _ => {
            if !stream.eat("}") {
                return State::Nok;
            }
            tokenizer.pop();
            match seq.action {
                Action::Pass => {}
                Action::Enter { env, from } => {
                    if let Some(kind) = env.kind {
                        tokenizer.open_mark(kind, from, tokenizer.point(stream));
                    }
                    tokenizer.push(Frame::Environment(env));
                }
                Action::Exit { env, content_to } => {
                    if env.kind.is_some() {
                        let to = tokenizer.point(stream);
                        let from_line = tokenizer
                            .open_marks
                            .last()
                            .expect("environment mark is open")
                            .from
                            .line;
                        let checked = CheckedProperties {
                            open_marks_count: Some(tokenizer.open_marks.len() - 1),
                            from_line: Some(from_line),
                            to_line: Some(to.line),
                            ..CheckedProperties::default()
                        };
                        tokenizer.close_mark(content_to, to, checked);
                    }
                }
                Action::Trailer => tokenizer.push(Frame::DocumentEnd),
            }
            State::Ok(Some(Style::Bracket))
        }
    }
}
