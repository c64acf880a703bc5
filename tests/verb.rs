use pretty_assertions::assert_eq;
use texmark::{LineStream, Style, Tokenizer};

fn drive(document: &str) -> (Vec<Option<Style>>, Tokenizer) {
    let mut tokenizer = Tokenizer::new();
    let mut styles = vec![];

    for line in document.split('\n') {
        if line.is_empty() {
            tokenizer.blank_line().unwrap();
        } else {
            let mut stream = LineStream::new(line);
            while !stream.at_end_of_line() {
                styles.push(tokenizer.token(&mut stream).unwrap());
            }
        }
    }

    (styles, tokenizer)
}

#[test]
fn verb() {
    let (styles, tokenizer) = drive("\\verb|x & y|");
    assert_eq!(
        styles,
        vec![Some(Style::Tag), Some(Style::String), Some(Style::Tag)],
        "should style opener, content, and closing delimiter"
    );
    assert_eq!(tokenizer.marks, vec![], "should not mark verb");
}

#[test]
fn verb_empty() {
    let (styles, _) = drive("\\verb||");
    assert_eq!(
        styles,
        vec![Some(Style::Tag), Some(Style::Tag)],
        "should support empty content"
    );
}

#[test]
fn verb_star() {
    let (styles, _) = drive("\\verb*!a b!");
    assert_eq!(
        styles,
        vec![Some(Style::Tag), Some(Style::String), Some(Style::Tag)],
        "should support the starred form"
    );
}

#[test]
fn verb_needs_a_non_letter_delimiter() {
    let (styles, _) = drive("\\verbaXa");
    assert_eq!(
        styles,
        vec![Some(Style::Tag)],
        "should take `\\verbaXa` as one generic command"
    );

    let (styles, _) = drive("\\verb*ax*");
    assert_eq!(
        styles[0],
        Some(Style::Tag),
        "should reject a letter delimiter after the star"
    );
}

#[test]
fn verb_resumes_on_the_next_line() {
    let (styles, _) = drive("\\verb|abc\ndef|x");
    assert_eq!(
        styles,
        vec![
            Some(Style::Tag),
            Some(Style::String),
            Some(Style::String),
            Some(Style::Tag),
            None,
        ],
        "should keep scanning for the delimiter on following lines"
    );
}

#[test]
fn verb_survives_a_blank_line() {
    let (styles, _) = drive("\\verb|abc\n\ndef|");
    assert_eq!(
        styles,
        vec![
            Some(Style::Tag),
            Some(Style::String),
            Some(Style::String),
            Some(Style::Tag),
        ],
        "should not cancel at a blank line"
    );
}

#[test]
fn verb_in_math() {
    let (styles, _) = drive("$\\verb|y|$");
    assert_eq!(
        styles,
        vec![
            Some(Style::Keyword),
            Some(Style::Tag),
            Some(Style::String),
            Some(Style::Tag),
            Some(Style::Keyword),
        ],
        "should work inside math"
    );
}
