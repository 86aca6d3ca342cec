//! Rendered preview line types.

/// Type of a rendered line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Normal paragraph text
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    /// Code block line
    CodeBlock,
    /// Block quote line
    BlockQuote,
    /// List item with nesting level
    ListItem(usize),
    /// Horizontal rule
    HorizontalRule,
    /// Empty separator line
    Empty,
}

/// Inline styling flags for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub emphasis: bool,
    pub strong: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
}

impl InlineStyle {
    /// Style for inline and fenced code.
    pub const fn code() -> Self {
        Self {
            emphasis: false,
            strong: false,
            code: true,
            strikethrough: false,
            link: false,
        }
    }
}

/// A styled inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    text: String,
    style: InlineStyle,
}

impl InlineSpan {
    pub const fn new(text: String, style: InlineStyle) -> Self {
        Self { text, style }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn style(&self) -> InlineStyle {
        self.style
    }
}

/// One visual line of the rendered preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    kind: LineType,
    spans: Vec<InlineSpan>,
}

impl RenderedLine {
    pub const fn new(kind: LineType, spans: Vec<InlineSpan>) -> Self {
        Self { kind, spans }
    }

    pub const fn kind(&self) -> LineType {
        self.kind
    }

    pub(super) const fn set_kind(&mut self, kind: LineType) {
        self.kind = kind;
    }

    pub fn spans(&self) -> &[InlineSpan] {
        &self.spans
    }

    pub(super) fn prepend(&mut self, span: InlineSpan) {
        self.spans.insert(0, span);
    }

    /// Concatenated plain text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(InlineSpan::text).collect()
    }
}

/// A navigable link collected from the rendered document.
///
/// The editor has no link navigation yet; the list is the observable record
/// of which destinations passed the scheme check, and what a future
/// follow-link action would consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// Link text
    pub text: String,
    /// Link URL
    pub url: String,
    /// Line number in the rendered preview
    pub line: usize,
}
