//! Public API of `texmark`.
//!
//! `texmark` is an incremental, resumable tokenizer and structural marker
//! for LaTeX source, meant to be driven by a line-oriented host editor.
//! For each line it emits style tokens for highlighting and collects
//! [`Mark`][]s: position-annotated regions for titles, sections, math
//! zones, list items, figures, and the like, which the host can decorate,
//! fold, or render as rich text.
//!
//! The host owns the state:
//!
//! * [`Tokenizer::new()`][] — the start state
//! * [`Tokenizer::token()`][Tokenizer::token] — one style per call, driven
//!   over a [`LineStream`][] until the line is exhausted
//! * [`Tokenizer::blank_line()`][Tokenizer::blank_line] — observe an empty
//!   line
//!
//! The state is cheaply cloneable and treated as immutable at line
//! boundaries: keep a clone per line, and after an edit resume from the
//! last clone before it; re-tokenizing the suffix yields exactly what
//! tokenizing from scratch would.
//!
//! ## Examples
//!
//! ```
//! use texmark::marks;
//!
//! # fn main() -> Result<(), texmark::Message> {
//! let marks = marks("\\section{Introduction}")?;
//!
//! assert_eq!(marks.len(), 1);
//! assert_eq!(marks[0].kind.as_str(), "section");
//! # Ok(())
//! # }
//! ```
//!
//! Driving the tokenizer by hand:
//!
//! ```
//! use texmark::{LineStream, Tokenizer};
//!
//! # fn main() -> Result<(), texmark::Message> {
//! let mut tokenizer = Tokenizer::new();
//! let mut stream = LineStream::new("$x$");
//!
//! while !stream.at_end_of_line() {
//!     let _style = tokenizer.token(&mut stream)?;
//! }
//!
//! assert_eq!(tokenizer.marks.len(), 1);
//! # Ok(())
//! # }
//! ```

#![no_std]
#![deny(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

extern crate alloc;

mod construct;
pub mod mark;
mod message;
mod state;
mod stream;
mod token;
mod tokenizer;
mod util;

use alloc::vec::Vec;

pub use crate::mark::{CheckedProperties, Mark, MarkId, Point};
pub use crate::message::{Message, Place};
pub use crate::stream::LineStream;
pub use crate::token::Style;
pub use crate::tokenizer::Tokenizer;

/// The single-character line-comment delimiter.
pub const LINE_COMMENT: char = '%';

/// Tokenize a whole document and return its marks.
///
/// Splits `value` on line feeds (tolerating CRLF), observing empty lines
/// as blank lines.
/// Hosts that need per-token styles drive [`Tokenizer::token`][] line by
/// line instead.
///
/// ## Examples
///
/// ```
/// use texmark::marks;
///
/// # fn main() -> Result<(), texmark::Message> {
/// let marks = marks("\\begin{enumerate}\n\\item a\n\\end{enumerate}")?;
///
/// assert_eq!(marks.len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// ## Errors
///
/// Only a programming error in a sub-tokenizer (an exhausted stack) turns
/// into a [`Message`][]; no input does.
pub fn marks(value: &str) -> Result<Vec<Mark>, Message> {
    let mut tokenizer = Tokenizer::new();

    for line in value.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            tokenizer.blank_line()?;
        } else {
            let mut stream = LineStream::new(line);
            while !stream.at_end_of_line() {
                tokenizer.token(&mut stream)?;
            }
        }
    }

    Ok(tokenizer.marks)
}
