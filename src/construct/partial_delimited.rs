//! A delimited region: an argument, a group, or a math span.
//!
//! Covers required arguments `{…}`, optional arguments `[…]`, plain brace
//! groups, and the math spans `$…$`, `$$…$$`, `\[…\]`, `\(…\)`.
//! Each call checks, in order:
//!
//! * a blank line — abandon the mark (if any) and pop;
//! * the abandon pattern — same (this is how `$$` inside `$…$` hands the
//!   position back to text, which then opens display math);
//! * the closing literal — close the mark, pop, emit the close style;
//! * otherwise, delegate to the inner content tokenizer.

use crate::mark::CheckedProperties;
use crate::state::{content, Delimited, State};
use crate::stream::LineStream;
use crate::tokenizer::Tokenizer;

/// Inside a delimited region.
///
/// ```latex
/// > | \section{test $x$}
///              ^^^^^^^^^
/// ```
pub fn resolve(stream: &mut LineStream, tokenizer: &mut Tokenizer, region: Delimited) -> State {
    if stream.blank() {
        if region.marked {
            tokenizer.abandon_mark();
        }
        return State::Nok;
    }

    if let Some(pattern) = region.abandon {
        if stream.lookahead(pattern) {
            if region.marked {
                tokenizer.abandon_mark();
            }
            return State::Nok;
        }
    }

    if stream.lookahead(region.closer) {
        let content_to = tokenizer.point(stream);
        stream.eat(region.closer);
        tokenizer.pop();
        if region.marked {
            let to = tokenizer.point(stream);
            tokenizer.close_mark(content_to, to, CheckedProperties::default());
        }
        return State::Ok(region.close_style);
    }

    content(region.content, stream, tokenizer)
}
