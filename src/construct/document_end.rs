//! The trailer after `\end{document}`.
//!
//! Everything from here to the end of the stream is `comment`; the frame
//! never pops.

use crate::state::State;
use crate::stream::LineStream;
use crate::token::Style;

/// Tokenize one trailer line.
///
/// ```latex
///   | \end{document}
/// > | \textbf{ignored}
///     ^^^^^^^^^^^^^^^^
/// ```
pub fn resolve(stream: &mut LineStream) -> State {
    if stream.at_end_of_line() {
        return State::Stay;
    }

    stream.skip_to_end();
    State::Ok(Some(Style::Comment))
}
