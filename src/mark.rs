//! Semantic marks over regions of the source.
//!
//! Marks are what the host consumes after highlighting a region of
//! interest: each one tags a construct (a section, a math zone, a list
//! item) with its outer and inner ranges, so the host can decorate, fold,
//! or render it as rich text.
//!
//! A mark is **open** while its closing delimiter is pending and **closed**
//! once both ends are known; only closed marks appear in
//! [`Tokenizer::marks`][crate::tokenizer::Tokenizer].

/// A place in the source.
///
/// Both fields are 0-based; `column` counts characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Point {
    /// Line index.
    pub line: usize,
    /// Character offset into the line.
    pub column: usize,
}

/// Stable handle of a mark.
///
/// An open mark and the closed mark that replaces it share the same id, so
/// parent references stay valid across state clones and after the open-mark
/// stack has unwound.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MarkId(pub u32);

/// Kind of a mark.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Name {
    /// `\title{…}`, the whole command with its required argument.
    ///
    /// ```latex
    /// > | \title[Short]{The Long Title}
    ///     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
    /// ```
    Title,
    /// `\chapter{…}`.
    Chapter,
    /// `\chapter*{…}`.
    ChapterStar,
    /// `\section{…}`.
    ///
    /// ```latex
    /// > | \section{Introduction}
    ///     ^^^^^^^^^^^^^^^^^^^^^^
    /// ```
    Section,
    /// `\section*{…}`.
    SectionStar,
    /// `\subsection{…}`.
    Subsection,
    /// `\subsection*{…}`.
    SubsectionStar,
    /// `\subsubsection{…}`.
    Subsubsection,
    /// `\subsubsection*{…}`.
    SubsubsectionStar,
    /// `\textbf{…}`.
    Textbf,
    /// `\textit{…}`.
    Textit,
    /// `\caption{…}`, inside figure content.
    Caption,
    /// `\label{…}`.
    Label,
    /// `\ref{…}`.
    Ref,
    /// `\input{…}`.
    Input,
    /// `\include{…}`.
    Include,
    /// `\includegraphics[…]{…}`, spanning the required argument.
    Includegraphics,
    /// The optional argument of `\includegraphics`.
    ///
    /// Both marks share the command start as their outer `from`:
    ///
    /// ```latex
    /// > | \includegraphics[width=5cm]{img.png}
    ///     ^^^^^^^^^^^^^^^^^^^^^^^^^^^
    ///     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
    /// ```
    IncludegraphicsOptional,
    /// Inline math: `$…$` or `\(…\)`.
    ///
    /// ```latex
    /// > | foo $x + y$ bar
    ///         ^^^^^^^
    /// ```
    InlineMath,
    /// Display math: `$$…$$` or `\[…\]`.
    DisplayMath,
    /// A display-math environment (`equation`, `align`, …).
    OuterDisplayMath,
    /// The `abstract` environment.
    Abstract,
    /// The `figure` environment.
    Figure,
    /// The `itemize` environment.
    Itemize,
    /// The `enumerate` environment.
    Enumerate,
    /// `\item` inside `itemize` (or any non-enumerate list).
    Item,
    /// `\item` inside `enumerate`; carries its 1-based number in
    /// [`CheckedProperties::number`][].
    EnumerateItem,
    /// `\maketitle` on a line of its own.
    Maketitle,
    /// `\cite{…}`.
    Cite,
    /// `\citep{…}`.
    Citep,
    /// `\citet{…}`.
    Citet,
    /// `\footcite{…}`.
    Footcite,
    /// `\nocite{…}`.
    Nocite,
    /// `\autocite{…}`.
    Autocite,
    /// `\autocites{…}`.
    Autocites,
    /// `\citeauthor{…}`.
    Citeauthor,
    /// `\citeyear{…}`.
    Citeyear,
    /// `\parencite{…}`.
    Parencite,
    /// `\citealt{…}`.
    Citealt,
    /// `\textcite{…}`.
    Textcite,
    /// `\cref{…}`.
    Cref,
    /// `\Cref{…}`.
    CrefUpper,
}

impl Name {
    /// The literal kind string, as hosts know it.
    ///
    /// Starred kinds render with an escaped star (`section\*`), matching
    /// the historical tag set hosts key on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Name::Title => "title",
            Name::Chapter => "chapter",
            Name::ChapterStar => "chapter\\*",
            Name::Section => "section",
            Name::SectionStar => "section\\*",
            Name::Subsection => "subsection",
            Name::SubsectionStar => "subsection\\*",
            Name::Subsubsection => "subsubsection",
            Name::SubsubsectionStar => "subsubsection\\*",
            Name::Textbf => "textbf",
            Name::Textit => "textit",
            Name::Caption => "caption",
            Name::Label => "label",
            Name::Ref => "ref",
            Name::Input => "input",
            Name::Include => "include",
            Name::Includegraphics => "includegraphics",
            Name::IncludegraphicsOptional => "includegraphics-optional",
            Name::InlineMath => "inline-math",
            Name::DisplayMath => "display-math",
            Name::OuterDisplayMath => "outer-display-math",
            Name::Abstract => "abstract",
            Name::Figure => "figure",
            Name::Itemize => "itemize",
            Name::Enumerate => "enumerate",
            Name::Item => "item",
            Name::EnumerateItem => "enumerate-item",
            Name::Maketitle => "maketitle",
            Name::Cite => "cite",
            Name::Citep => "citep",
            Name::Citet => "citet",
            Name::Footcite => "footcite",
            Name::Nocite => "nocite",
            Name::Autocite => "autocite",
            Name::Autocites => "autocites",
            Name::Citeauthor => "citeauthor",
            Name::Citeyear => "citeyear",
            Name::Parencite => "parencite",
            Name::Citealt => "citealt",
            Name::Textcite => "textcite",
            Name::Cref => "cref",
            Name::CrefUpper => "Cref",
        }
    }
}

/// Auxiliary fields some consumers key on.
///
/// Items carry `kind`, `number`, and `open_marks_count`; environment closes
/// carry `open_marks_count`, `from_line`, and `to_line`; other marks leave
/// the bag empty.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CheckedProperties {
    /// Duplicate of the mark kind.
    pub kind: Option<Name>,
    /// 1-based enumeration index of a list item.
    pub number: Option<u32>,
    /// Number of enclosing open marks at close time.
    pub open_marks_count: Option<usize>,
    /// Line the mark opened on.
    pub from_line: Option<usize>,
    /// Line the mark closed on.
    pub to_line: Option<usize>,
}

/// A mark still waiting for its closing delimiter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OpenMark {
    /// Stable handle, shared with the closed mark that replaces this.
    pub id: MarkId,
    /// Kind.
    pub kind: Name,
    /// Outer start: first character of the opening delimiter.
    pub from: Point,
    /// Inner start: first character after the opening delimiter.
    pub content_from: Point,
    /// Innermost enclosing open mark when this one was opened.
    pub parent: Option<MarkId>,
}

/// A closed mark: a region with both ends known.
///
/// Immutable once produced; closed marks are appended in closing order,
/// which is ascending `to`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mark {
    /// Stable handle.
    pub id: MarkId,
    /// Kind.
    pub kind: Name,
    /// Outer start: first character of the opening delimiter.
    pub from: Point,
    /// Inner start: first character after the opening delimiter.
    pub content_from: Point,
    /// Inner end: first character of the closing delimiter.
    pub content_to: Point,
    /// Outer end: first character past the closing delimiter.
    pub to: Point,
    /// Innermost enclosing open mark at the time this mark was opened.
    pub open_parent: Option<MarkId>,
    /// Auxiliary fields.
    pub checked_properties: CheckedProperties,
}
