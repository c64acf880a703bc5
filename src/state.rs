//! Frames of the pushdown stack, and how they dispatch.
//!
//! The tokenizer keeps a stack of frames; the frame on top decides what the
//! next token is.
//! Frames are small `Copy` records rather than closures, so the whole state
//! clones cheaply at line boundaries.

use crate::construct;
use crate::construct::environment::EnvSpec;
use crate::mark::{Name as MarkName, Point};
use crate::stream::LineStream;
use crate::token::Style;
use crate::tokenizer::Tokenizer;

/// Result of dispatching a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State {
    /// Input was consumed; emit this style.
    Ok(Option<Style>),
    /// Nothing was consumed; pop the frame and retry the one below.
    ///
    /// A frame that owns an open mark must abandon it before returning
    /// this.
    Nok,
    /// The frame restructured the stack; dispatch the new top without
    /// consuming.
    Retry,
    /// A blank line was observed by a frame that survives blank lines;
    /// keep the stack and yield no token.
    Stay,
}

/// Which content tokenizer runs inside a region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentKind {
    /// Ordinary text.
    Text,
    /// Math.
    Math,
    /// Verbatim-family content, styled as `string`.
    Verbatim,
    /// `comment`-environment content, styled as `comment`.
    Comment,
    /// `tikzpicture` content.
    Tikz,
    /// `itemize`/`enumerate` content.
    List,
    /// `figure` content.
    Figure,
}

/// A delimited region: an argument, a group, or a math span.
///
/// On each call the frame checks for a blank line (abandon), then its
/// abandon pattern, then its closing literal, and otherwise delegates to
/// the inner content tokenizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delimited {
    /// Closing literal (`}`, `]`, `$`, `$$`, `\]`, `\)`).
    pub closer: &'static str,
    /// Style of the closing token.
    pub close_style: Option<Style>,
    /// Lookahead that abandons the region (`$$` inside `$…$`).
    pub abandon: Option<&'static str>,
    /// Content tokenizer for the inside.
    pub content: ContentKind,
    /// Whether this region owns the top open mark.
    pub marked: bool,
}

/// The argument dispatcher after a recognized command.
///
/// Consumes `[…]` groups until the required `{…}` argument opens the mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arguments {
    /// Mark kind of the required argument, if the command is marked.
    pub kind: Option<MarkName>,
    /// Mark kind of the optional argument (`\includegraphics` only).
    pub optional_kind: Option<MarkName>,
    /// First character of the command, the mark's outer start.
    pub from: Point,
}

/// What to do after the last step of a [`Sequence`][].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Nothing: a generic `\begin`/`\end` pass-through.
    Pass,
    /// Open the environment's mark (if any) and enter the environment.
    Enter {
        /// Environment entered.
        env: &'static EnvSpec,
        /// First character of `\begin`, the mark's outer start.
        from: Point,
    },
    /// Close the environment's mark (if any).
    Exit {
        /// Environment left.
        env: &'static EnvSpec,
        /// First character of `\end`, the mark's inner end.
        content_to: Point,
    },
    /// Enter the end-of-document trailer.
    Trailer,
}

/// A `\begin{name}`/`\end{name}` sequence in progress.
///
/// One step per call: the keyword (with trailing whitespace), the opening
/// brace, the name, the closing brace; then the action runs.
/// Callers verify the whole sequence with a lookahead before pushing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sequence {
    /// Next step, 0 through 3.
    pub step: u8,
    /// `\begin` or `\end`.
    pub keyword: &'static str,
    /// Exact environment name, or `None` to accept any.
    pub name: Option<&'static str>,
    /// What to do after the closing brace.
    pub action: Action,
}

/// One entry of the sub-tokenizer stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Bottom of the stack; always consumes.
    TopLevel,
    /// Inside `\begin{name}…\end{name}`.
    Environment(&'static EnvSpec),
    /// Consuming a begin/end sequence.
    Sequence(Sequence),
    /// Inside a delimited region.
    Delimited(Delimited),
    /// Looking for a command's arguments.
    Arguments(Arguments),
    /// Inside `\verb`, scanning for the delimiter.
    Verb {
        /// The delimiter character.
        delim: char,
    },
    /// After `\end{document}`.
    DocumentEnd,
}

/// Dispatch the frame on top of the stack.
pub fn call(stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    let frame = *tokenizer
        .stack
        .last()
        .expect("expected a frame on the stack");

    match frame {
        Frame::TopLevel => construct::top_level::resolve(stream, tokenizer),
        Frame::Environment(env) => construct::environment::resolve(stream, tokenizer, env),
        Frame::Sequence(sequence) => construct::environment::sequence(stream, tokenizer, sequence),
        Frame::Delimited(region) => construct::partial_delimited::resolve(stream, tokenizer, region),
        Frame::Arguments(arguments) => construct::command::arguments(stream, tokenizer, arguments),
        Frame::Verb { delim } => construct::verb::resolve(stream, tokenizer, delim),
        Frame::DocumentEnd => construct::document_end::resolve(stream),
    }
}

/// Run the content tokenizer of a region.
pub fn content(kind: ContentKind, stream: &mut LineStream, tokenizer: &mut Tokenizer) -> State {
    match kind {
        ContentKind::Text => construct::text::resolve(stream, tokenizer),
        ContentKind::Math => construct::math::resolve(stream, tokenizer),
        ContentKind::Verbatim => construct::verbatim::resolve(stream, Style::String),
        ContentKind::Comment => construct::verbatim::resolve(stream, Style::Comment),
        ContentKind::Tikz => construct::tikz::resolve(stream, tokenizer),
        ContentKind::List => construct::list_item::resolve(stream, tokenizer),
        ContentKind::Figure => construct::figure::resolve(stream, tokenizer),
    }
}
