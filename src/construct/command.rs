//! Commands that take a braced argument, and the generic command fallback.
//!
//! A recognized command matches only with the lookahead `\name\s*[\[{]`:
//! the exact name followed (after optional whitespace) by an opening
//! bracket.
//! That keeps prefixed commands (`\authorblockN`, `\titlestyle`) out of
//! `\author` and `\title`.
//!
//! After the command token, [`Frame::Arguments`][] consumes any `[…]`
//! groups and then the required `{…}` argument, which carries the mark.

use crate::mark::Name as MarkName;
use crate::state::{Arguments, ContentKind, Delimited, Frame, State};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;
use crate::util::char::{command_letter, whitespace};

/// A command taking a braced argument.
#[derive(Debug, Eq, PartialEq)]
pub struct CommandSpec {
    /// Name, without the backslash (`section*` includes its star).
    pub name: &'static str,
    /// Mark kind of the required argument; `None` styles the argument
    /// without marking it.
    pub kind: Option<MarkName>,
    /// Mark kind of the optional argument, if that is marked too.
    pub optional_kind: Option<MarkName>,
}

const fn marked(name: &'static str, kind: MarkName) -> CommandSpec {
    CommandSpec {
        name,
        kind: Some(kind),
        optional_kind: None,
    }
}

/// Commands recognized at the top level.
pub static TOP_LEVEL: &[CommandSpec] = &[
    marked("title", MarkName::Title),
    // The host has no use for an author mark; the argument is only styled.
    CommandSpec {
        name: "author",
        kind: None,
        optional_kind: None,
    },
    marked("chapter", MarkName::Chapter),
    marked("chapter*", MarkName::ChapterStar),
    marked("section", MarkName::Section),
    marked("section*", MarkName::SectionStar),
    marked("subsection", MarkName::Subsection),
    marked("subsection*", MarkName::SubsectionStar),
    marked("subsubsection", MarkName::Subsubsection),
    marked("subsubsection*", MarkName::SubsubsectionStar),
];

/// Commands recognized in text.
pub static TEXT: &[CommandSpec] = &[
    marked("textbf", MarkName::Textbf),
    marked("textit", MarkName::Textit),
    marked("ref", MarkName::Ref),
    marked("cite", MarkName::Cite),
    marked("citep", MarkName::Citep),
    marked("citet", MarkName::Citet),
    marked("footcite", MarkName::Footcite),
    marked("nocite", MarkName::Nocite),
    marked("autocite", MarkName::Autocite),
    marked("autocites", MarkName::Autocites),
    marked("citeauthor", MarkName::Citeauthor),
    marked("citeyear", MarkName::Citeyear),
    marked("parencite", MarkName::Parencite),
    marked("citealt", MarkName::Citealt),
    marked("textcite", MarkName::Textcite),
    marked("cref", MarkName::Cref),
    marked("Cref", MarkName::CrefUpper),
    marked("label", MarkName::Label),
    marked("input", MarkName::Input),
    marked("include", MarkName::Include),
];

/// Commands recognized in figure content.
pub static FIGURE: &[CommandSpec] = &[
    marked("caption", MarkName::Caption),
    CommandSpec {
        name: "includegraphics",
        kind: Some(MarkName::Includegraphics),
        optional_kind: Some(MarkName::IncludegraphicsOptional),
    },
];

/// Find the command whose `\name\s*[\[{]` lookahead matches at the cursor.
pub fn lookahead<'c>(stream: &LineStream, commands: &'c [CommandSpec]) -> Option<&'c CommandSpec> {
    let rest = stream.rest().strip_prefix('\\')?;

    for spec in commands {
        if let Some(after) = rest.strip_prefix(spec.name) {
            let after = after.trim_start_matches(whitespace);
            if after.starts_with('[') || after.starts_with('{') {
                return Some(spec);
            }
        }
    }

    None
}

/// Consume a recognized command and start looking for its arguments.
///
/// ```latex
/// > | \title[Short]{The Long Title}
///     ^^^^^^
/// ```
pub fn begin(stream: &mut LineStream, tokenizer: &mut Tokenizer, spec: &CommandSpec) -> State {
    let from = tokenizer.point(stream);
    stream.eat("\\");
    stream.eat(spec.name);
    stream.eat_while(whitespace);

    tokenizer.push(Frame::Arguments(Arguments {
        kind: spec.kind,
        optional_kind: spec.optional_kind,
        from,
    }));

    State::Ok(Some(Style::Tag))
}

/// After a command, before its arguments.
///
/// ```latex
/// > | \title[Short]{The Long Title}
///           ^      ^
/// ```
pub fn arguments(stream: &mut LineStream, tokenizer: &mut Tokenizer, frame: Arguments) -> State {
    if stream.blank() {
        return State::Nok;
    }

    if stream.eat("[") {
        if let Some(kind) = frame.optional_kind {
            tokenizer.open_mark(kind, frame.from, tokenizer.point(stream));
        }
        tokenizer.push(Frame::Delimited(Delimited {
            closer: "]",
            close_style: Some(Style::Bracket),
            abandon: None,
            content: ContentKind::Text,
            marked: frame.optional_kind.is_some(),
        }));
        return State::Ok(Some(Style::Bracket));
    }

    if stream.lookahead("{") {
        tokenizer.pop();
        stream.eat("{");
        if let Some(kind) = frame.kind {
            tokenizer.open_mark(kind, frame.from, tokenizer.point(stream));
        }
        tokenizer.push(Frame::Delimited(Delimited {
            closer: "}",
            close_style: Some(Style::Bracket),
            abandon: None,
            content: ContentKind::Text,
            marked: frame.kind.is_some(),
        }));
        return State::Ok(Some(Style::Bracket));
    }

    State::Nok
}

/// Whether a generic command (`\alpha`, `\%`, `\\`) is at the cursor.
pub fn lookahead_generic(stream: &LineStream) -> bool {
    let rest = stream.rest();
    rest.starts_with('\\') && rest.chars().nth(1).is_some()
}

/// Consume a generic command.
///
/// A letter run with an optional star, or a single control symbol.
///
/// ```latex
/// > | \alpha + 50\%
///     ^^^^^^     ^^
/// ```
pub fn generic(stream: &mut LineStream) -> State {
    stream.eat("\\");
    if stream.eat_while(command_letter) > 0 {
        stream.eat("*");
    } else {
        stream.next();
    }
    State::Ok(Some(Style::Tag))
}
