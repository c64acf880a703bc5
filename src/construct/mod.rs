//! Constructs found in LaTeX.

pub mod command;
pub mod document_end;
pub mod environment;
pub mod figure;
pub mod line_comment;
pub mod list_item;
pub mod math;
pub mod partial_delimited;
pub mod text;
pub mod tikz;
pub mod top_level;
pub mod verb;
pub mod verbatim;
