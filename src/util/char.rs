//! Deal with characters.

/// Whether `char` is whitespace for blank-line detection and pattern
/// lookaheads.
///
/// The Unicode `White_Space` class, which includes the no-break space
/// (U+00A0) that hosts paste into documents.
pub fn whitespace(char: char) -> bool {
    char.is_whitespace()
}

/// Whether `char` can appear in a command name (`\section`).
pub fn command_letter(char: char) -> bool {
    char.is_ascii_alphabetic()
}

/// Whether `char` can appear in an environment name (`figure*`,
/// `tikzpicture`).
pub fn environment_name(char: char) -> bool {
    char.is_ascii_alphanumeric() || char == '_' || char == '*'
}
