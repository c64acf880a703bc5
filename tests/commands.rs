use pretty_assertions::assert_eq;
use texmark::mark::Name;
use texmark::{LineStream, Point, Style, Tokenizer};

/// Tokenize a document, returning every emitted style and the final state.
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

fn p(line: usize, column: usize) -> Point {
    Point { line, column }
}

#[test]
fn title() {
    let (styles, tokenizer) = drive("\\title[Short Title]{Long Title}");

    assert_eq!(
        styles,
        vec![
            Some(Style::Tag),
            Some(Style::Bracket),
            None,
            Some(Style::Bracket),
            Some(Style::Bracket),
            None,
            Some(Style::Bracket),
        ],
        "should style the command, brackets, and plain argument text"
    );

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(mark.kind, Name::Title, "should mark the title");
    assert_eq!(mark.from, p(0, 0), "should start at the command");
    assert_eq!(mark.content_from, p(0, 20), "should open after the brace");
    assert_eq!(mark.content_to, p(0, 30), "should close at the brace");
    assert_eq!(mark.to, p(0, 31), "should end past the brace");
}

#[test]
fn author() {
    let (styles, tokenizer) = drive("\\author{Jane Doe}");

    assert_eq!(
        styles,
        vec![
            Some(Style::Tag),
            Some(Style::Bracket),
            None,
            Some(Style::Bracket),
        ],
        "should style the author command like any argument command"
    );
    assert_eq!(
        tokenizer.marks, vec![],
        "should not mark the author (no such kind)"
    );
}

#[test]
fn sectioning() {
    let (_, tokenizer) = drive("\\section{test}");
    assert_eq!(tokenizer.marks.len(), 1, "should mark a section");
    assert_eq!(tokenizer.marks[0].kind, Name::Section);
    assert_eq!(tokenizer.marks[0].from, p(0, 0));
    assert_eq!(tokenizer.marks[0].content_from, p(0, 9));
    assert_eq!(tokenizer.marks[0].to, p(0, 14));

    let (_, tokenizer) = drive("\\subsection*{x}");
    assert_eq!(
        tokenizer.marks[0].kind,
        Name::SubsectionStar,
        "should tell starred variants apart"
    );

    let (_, tokenizer) = drive("\\chapter{One}");
    assert_eq!(tokenizer.marks[0].kind, Name::Chapter, "should mark chapters");
}

#[test]
fn marked_prefixes() {
    let (styles, tokenizer) = drive("\\authorblockN{x}");
    assert_eq!(
        tokenizer.marks, vec![],
        "should not match `\\author` inside `\\authorblockN`"
    );
    assert_eq!(
        styles,
        vec![
            Some(Style::Tag),
            Some(Style::Bracket),
            None,
            Some(Style::Bracket),
        ],
        "should still style it as a generic command with a group"
    );

    let (_, tokenizer) = drive("\\titlestyle{x}");
    assert_eq!(
        tokenizer.marks, vec![],
        "should not match `\\title` inside `\\titlestyle`"
    );
}

#[test]
fn maketitle() {
    let (styles, tokenizer) = drive("\\maketitle");
    assert_eq!(styles, vec![Some(Style::Tag)], "should be one token");
    assert_eq!(tokenizer.marks.len(), 1, "should mark it");
    assert_eq!(tokenizer.marks[0].kind, Name::Maketitle);
    assert_eq!(tokenizer.marks[0].from, p(0, 0));
    assert_eq!(tokenizer.marks[0].to, p(0, 10));

    let (_, tokenizer) = drive("\\maketitle but not alone");
    assert_eq!(
        tokenizer.marks, vec![],
        "should only match when it ends the line"
    );
}

#[test]
fn text_commands() {
    let (_, tokenizer) = drive("x \\textbf{bold} y");
    assert_eq!(tokenizer.marks.len(), 1, "should mark textbf in text");
    assert_eq!(tokenizer.marks[0].kind, Name::Textbf);
    assert_eq!(tokenizer.marks[0].from, p(0, 2));

    let (_, tokenizer) = drive("\\textit{it}");
    assert_eq!(tokenizer.marks[0].kind, Name::Textit);

    let (_, tokenizer) = drive("\\label{sec:intro}");
    assert_eq!(tokenizer.marks[0].kind, Name::Label);

    let (_, tokenizer) = drive("\\input{ch1}");
    assert_eq!(tokenizer.marks[0].kind, Name::Input);

    let (_, tokenizer) = drive("\\include{appendix}");
    assert_eq!(tokenizer.marks[0].kind, Name::Include);
}

#[test]
fn citations() {
    let (_, tokenizer) = drive("\\ref{fig:a} \\citep{k} \\label{l}");
    let kinds: Vec<_> = tokenizer.marks.iter().map(|mark| mark.kind).collect();
    assert_eq!(
        kinds,
        vec![Name::Ref, Name::Citep, Name::Label],
        "should close marks in source order"
    );

    let (_, tokenizer) = drive("\\cref{eq:1}");
    assert_eq!(tokenizer.marks[0].kind, Name::Cref);

    let (_, tokenizer) = drive("\\Cref{eq:1}");
    assert_eq!(
        tokenizer.marks[0].kind,
        Name::CrefUpper,
        "should be case-sensitive about `\\Cref`"
    );

    let (_, tokenizer) = drive("\\autocites{a}{b}");
    assert_eq!(
        tokenizer.marks[0].kind,
        Name::Autocites,
        "should not stop at the `\\autocite` prefix"
    );
}

#[test]
fn command_whitespace() {
    let (_, tokenizer) = drive("\\title {Spaced}");
    assert_eq!(
        tokenizer.marks.len(),
        1,
        "should allow whitespace before the first bracket"
    );
    assert_eq!(tokenizer.marks[0].kind, Name::Title);
    assert_eq!(tokenizer.marks[0].from, p(0, 0));
    assert_eq!(tokenizer.marks[0].content_from, p(0, 8));
}

#[test]
fn abandoned_argument() {
    let (_, tokenizer) = drive("\\section{never closed\n\nplain");
    assert_eq!(
        tokenizer.marks, vec![],
        "should abandon an argument at a blank line"
    );
}
