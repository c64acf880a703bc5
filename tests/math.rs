use pretty_assertions::assert_eq;
use texmark::mark::Name;
use texmark::{LineStream, Point, Style, Tokenizer};

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
fn inline_across_lines() {
    let (_, tokenizer) = drive("foo $x\n+y\n$");

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(mark.kind, Name::InlineMath, "should be inline math");
    assert_eq!(mark.from, p(0, 4), "should start at the dollar");
    assert_eq!(mark.content_from, p(0, 5), "should open after the dollar");
    assert_eq!(mark.content_to, p(2, 0), "should close at the last dollar");
    assert_eq!(mark.to, p(2, 1), "should end past the last dollar");
}

#[test]
fn double_dollar_abandons_inline() {
    let (_, tokenizer) = drive("foo $x bar $$x$$");

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(
        mark.kind,
        Name::DisplayMath,
        "should abandon the inline mark and open display math instead"
    );
    assert_eq!(mark.from, p(0, 11));
    assert_eq!(mark.content_from, p(0, 13));
    assert_eq!(mark.content_to, p(0, 14));
    assert_eq!(mark.to, p(0, 16));
}

#[test]
fn math_inside_section() {
    let (_, tokenizer) = drive("\\section{test $x$}");

    assert_eq!(tokenizer.marks.len(), 2, "should produce two marks");
    assert_eq!(tokenizer.marks[0].kind, Name::InlineMath);
    assert_eq!(tokenizer.marks[0].from, p(0, 14));
    assert_eq!(tokenizer.marks[0].to, p(0, 17));
    assert_eq!(tokenizer.marks[1].kind, Name::Section);
    assert_eq!(tokenizer.marks[1].from, p(0, 0));
    assert_eq!(tokenizer.marks[1].to, p(0, 18));
    assert_eq!(
        tokenizer.marks[0].open_parent,
        Some(tokenizer.marks[1].id),
        "should parent the math to the open section"
    );
}

#[test]
fn blank_line_abandons_equation() {
    let (_, tokenizer) = drive("\\begin{equation}\n\\alpha\n\n\\end{equation}");
    assert_eq!(tokenizer.marks, vec![], "should abandon at the blank line");
}

#[test]
fn equation() {
    let (_, tokenizer) = drive("\\begin{equation}\nE = mc^2\n\\end{equation}");

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(mark.kind, Name::OuterDisplayMath, "should mark the environment");
    assert_eq!(mark.from, p(0, 0));
    assert_eq!(mark.content_from, p(0, 16));
    assert_eq!(mark.content_to, p(2, 0));
    assert_eq!(mark.to, p(2, 14));
    assert_eq!(mark.checked_properties.from_line, Some(0));
    assert_eq!(mark.checked_properties.to_line, Some(2));
    assert_eq!(mark.checked_properties.open_marks_count, Some(0));
}

#[test]
fn equation_must_end_its_line() {
    let (_, tokenizer) = drive("\\begin{equation} x \\end{equation}");
    assert_eq!(
        tokenizer.marks, vec![],
        "should pass the sequence through when the begin does not end the line"
    );
}

#[test]
fn starred_environments() {
    let (_, tokenizer) = drive("\\begin{align*}\na &= b \\\\\nc &= d\n\\end{align*}");
    assert_eq!(tokenizer.marks.len(), 1, "should recognize `align*`");
    assert_eq!(tokenizer.marks[0].kind, Name::OuterDisplayMath);
}

#[test]
fn display_brackets() {
    let (_, tokenizer) = drive("\\[\nz\n\\]");

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(mark.kind, Name::DisplayMath, "should be display math");
    assert_eq!(mark.from, p(0, 0));
    assert_eq!(mark.content_from, p(0, 2));
    assert_eq!(mark.content_to, p(2, 0));
    assert_eq!(mark.to, p(2, 2));
}

#[test]
fn inline_parens() {
    let (_, tokenizer) = drive("\\(x\\)");

    assert_eq!(tokenizer.marks.len(), 1, "should produce one mark");
    let mark = &tokenizer.marks[0];
    assert_eq!(mark.kind, Name::InlineMath, "should be inline math");
    assert_eq!(mark.from, p(0, 0));
    assert_eq!(mark.content_from, p(0, 2));
    assert_eq!(mark.content_to, p(0, 3));
    assert_eq!(mark.to, p(0, 5));
}

#[test]
fn number_styles() {
    let (styles, tokenizer) = drive("$1024.00$");
    assert_eq!(
        styles,
        vec![Some(Style::Keyword), Some(Style::Number), Some(Style::Keyword)],
        "should emit keyword, number, keyword"
    );
    assert_eq!(tokenizer.marks.len(), 1);
    assert_eq!(tokenizer.marks[0].kind, Name::InlineMath);
}

#[test]
fn operator_styles() {
    let (styles, _) = drive("$a^2_b$");
    assert_eq!(
        styles,
        vec![
            Some(Style::Keyword),
            None,
            Some(Style::Tag),
            Some(Style::Number),
            Some(Style::Tag),
            None,
            Some(Style::Keyword),
        ],
        "should style `^` and `_` as operators"
    );
}

#[test]
fn blank_line_abandons_inline() {
    let (_, tokenizer) = drive("foo $x\n\nbar");
    assert_eq!(tokenizer.marks, vec![], "should abandon at the blank line");
}

#[test]
fn comment_in_math() {
    let (styles, _) = drive("$x % y");
    assert_eq!(
        styles,
        vec![Some(Style::Keyword), None, Some(Style::Comment)],
        "should let `%` comment out the rest of the line inside math"
    );
}
