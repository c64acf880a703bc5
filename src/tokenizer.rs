//! The tokenizer glues frames together and keeps the restartable state.
//!
//! The host drives it one line at a time: a [`LineStream`][] over the line,
//! then [`Tokenizer::token`][] until the stream is exhausted (or
//! [`Tokenizer::blank_line`][] for an empty line).
//! At every line boundary the state may be cloned and kept; re-tokenizing
//! from such a clone yields the same styles and marks as tokenizing from
//! scratch, so edits only re-tokenize the affected suffix.
//!
//! [`LineStream`]: crate::stream::LineStream
//! [`Tokenizer::token`]: Tokenizer::token
//! [`Tokenizer::blank_line`]: Tokenizer::blank_line

use crate::construct;
use crate::mark::{CheckedProperties, Mark, MarkId, Name as MarkName, OpenMark, Point};
use crate::message::{Message, Place};
use crate::state::{call, Frame, State};
use crate::stream::LineStream;
use crate::token::Style;
use alloc::{boxed::Box, vec, vec::Vec};

/// The restartable tokenizer state.
///
/// Everything reachable from here is treated as immutable at line
/// boundaries: frames, marks, and positions are plain values, so a `clone`
/// is a valid restart point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tokenizer {
    /// Stack of frames, bottom always the top level.
    pub(crate) stack: Vec<Frame>,
    /// Most recently entered line index.
    ///
    /// Starts at −1; pre-incremented whenever a call starts at the start of
    /// a line.
    pub line: isize,
    /// Stack of open marks, innermost on top.
    pub open_marks: Vec<OpenMark>,
    /// Closed marks, in closing order (ascending `to`).
    pub marks: Vec<Mark>,
    /// Next mark id.
    next_mark: u32,
}

impl Tokenizer {
    /// Create the start state.
    pub fn new() -> Tokenizer {
        Tokenizer {
            stack: vec![Frame::TopLevel],
            line: -1,
            open_marks: vec![],
            marks: vec![],
            next_mark: 0,
        }
    }

    /// The current place: the entered line and the stream's column.
    pub fn point(&self, stream: &LineStream) -> Point {
        debug_assert!(self.line >= 0, "expected a line to have been entered");
        Point {
            line: self.line as usize,
            column: stream.column(),
        }
    }

    /// Push a frame.
    pub(crate) fn push(&mut self, frame: Frame) {
        log::trace!("stack: push `{:?}`", frame);
        self.stack.push(frame);
    }

    /// Pop the top frame.
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        let frame = self.stack.pop();
        log::trace!("stack: pop `{:?}`", frame);
        frame
    }

    /// Open a mark.
    ///
    /// `from` is the caller-chosen outer start; `content_from` the first
    /// character after the opening delimiter.
    /// The innermost open mark at this moment becomes the parent.
    pub(crate) fn open_mark(&mut self, kind: MarkName, from: Point, content_from: Point) {
        let id = MarkId(self.next_mark);
        self.next_mark += 1;
        let parent = self.open_marks.last().map(|mark| mark.id);

        log::debug!("mark: open `{:?}` at {:?}", kind, from);

        self.open_marks.push(OpenMark {
            id,
            kind,
            from,
            content_from,
            parent,
        });
    }

    /// Discard the innermost open mark without closing it.
    pub(crate) fn abandon_mark(&mut self) {
        let mark = self
            .open_marks
            .pop()
            .expect("cannot abandon without an open mark");
        log::debug!("mark: abandon `{:?}` from {:?}", mark.kind, mark.from);
    }

    /// Close the innermost open mark.
    ///
    /// `content_to` is the first character of the closing delimiter and
    /// `to` the first character past it.
    pub(crate) fn close_mark(&mut self, content_to: Point, to: Point, checked: CheckedProperties) {
        let open = self
            .open_marks
            .pop()
            .expect("cannot close without an open mark");

        debug_assert!(open.from < to, "expected a non-empty outer range");
        debug_assert!(
            open.from <= open.content_from && open.content_from <= content_to && content_to <= to,
            "expected nested ranges"
        );

        log::debug!("mark: close `{:?}` at {:?}", open.kind, to);

        self.marks.push(Mark {
            id: open.id,
            kind: open.kind,
            from: open.from,
            content_from: open.content_from,
            content_to,
            to,
            open_parent: open.parent,
            checked_properties: checked,
        });
    }

    /// Tokenize one token from the stream.
    ///
    /// Returns the style of the consumed text, or `None` for unstyled text
    /// (and for an observed blank line).
    pub fn token(&mut self, stream: &mut LineStream) -> Result<Option<Style>, Message> {
        stream.set_start();

        if stream.at_start_of_line() {
            self.line += 1;
        }

        if let Some(style) = construct::line_comment::resolve(stream) {
            return Ok(Some(style));
        }

        loop {
            if self.stack.is_empty() {
                return Err(Message {
                    place: Some(Box::new(Place::Point(Point {
                        line: if self.line < 0 { 0 } else { self.line as usize },
                        column: stream.column(),
                    }))),
                    reason: "expected the sub-tokenizer stack to be non-empty".into(),
                    rule_id: Box::new("empty-stack".into()),
                    source: Box::new("texmark".into()),
                });
            }

            match call(stream, self) {
                State::Ok(style) => {
                    log::trace!("emit: `{:?}` for {:?}", style, stream.current());
                    return Ok(style);
                }
                State::Nok => {
                    self.pop();
                }
                State::Retry => {}
                State::Stay => {
                    // Cancel the speculative line increment if the call
                    // returns mid-line without consuming.
                    if stream.at_start_of_line() && !stream.at_end_of_line() {
                        self.line -= 1;
                    }
                    return Ok(None);
                }
            }
        }
    }

    /// Observe a blank line.
    ///
    /// Equivalent to tokenizing an empty stream: frames that do not survive
    /// blank lines abandon their marks and pop.
    pub fn blank_line(&mut self) -> Result<(), Message> {
        let mut stream = LineStream::new("");
        self.token(&mut stream).map(|_| ())
    }
}

impl Default for Tokenizer {
    fn default() -> Tokenizer {
        Tokenizer::new()
    }
}
