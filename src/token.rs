//! Style tokens emitted to the host.
//!
//! Every call to [`Tokenizer::token`][crate::tokenizer::Tokenizer::token]
//! yields one of these (or `None`, the neutral "no style" sentinel) for
//! the text consumed by that call.

/// Style of one emitted token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// Commands (`\section`), math operators, `\item` bullets.
    Tag,
    /// Braces and square brackets.
    Bracket,
    /// Math delimiters (`$`, `$$`, `\[`, `\]`, `\(`, `\)`).
    Keyword,
    /// `%` line comments, `comment` environments, everything after
    /// `\end{document}`.
    Comment,
    /// `\verb` and verbatim-environment content.
    String,
    /// Numeric literals in math.
    Number,
}

impl Style {
    /// CSS-class-style name of the style, as hosts map them.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Tag => "tag",
            Style::Bracket => "bracket",
            Style::Keyword => "keyword",
            Style::Comment => "comment",
            Style::String => "string",
            Style::Number => "number",
        }
    }
}
