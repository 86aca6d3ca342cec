//! Markdown rendering for the preview pane, built on comrak.
//!
//! [`render`] is pure and total: the same source always produces the same
//! [`Preview`], and no input can make it fail. Three contract points matter
//! beyond ordinary markdown:
//!
//! - raw HTML is never interpreted; it is shown as literal text,
//! - single (soft) line breaks become visual line breaks,
//! - links with a `javascript:`, `vbscript:` or `data:` scheme are rendered
//!   inert: plain styling and no entry in the navigable link list. The check
//!   is case-insensitive and ignores surrounding whitespace.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};

mod types;

pub use types::{InlineSpan, InlineStyle, LineType, LinkRef, RenderedLine};

/// A rendered preview: styled terminal lines plus the navigable links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    lines: Vec<RenderedLine>,
    links: Vec<LinkRef>,
}

impl Preview {
    /// Rendered lines, top to bottom.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Links a user could navigate to; sanitized-away links never appear.
    /// See [`LinkRef`] for why the list is kept without a consumer.
    pub fn links(&self) -> &[LinkRef] {
        &self.links
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Whether a link destination may be presented as navigable.
///
/// Mirrors the host-side rule: reject `javascript:`, `vbscript:` and `data:`
/// schemes after trimming whitespace, case-insensitively. Everything else
/// passes through unmodified.
pub fn is_safe_link_url(url: &str) -> bool {
    let normalized = url.trim().to_lowercase();
    !(normalized.starts_with("javascript:")
        || normalized.starts_with("vbscript:")
        || normalized.starts_with("data:"))
}

/// Render markdown source into preview lines.
pub fn render(source: &str) -> Preview {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);

    let mut out = Builder::default();
    for child in root.children() {
        process_block(child, &mut out, 0);
    }
    out.trim_trailing_blanks();
    let Builder { lines, mut links } = out;
    // Setext headings can fold multi-line content into one rendered line;
    // keep link line numbers inside the rendered range.
    let last = lines.len().saturating_sub(1);
    for link in &mut links {
        link.line = link.line.min(last);
    }
    Preview { lines, links }
}

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // Raw HTML stays disabled: with `render.unsafe_` off comrak would escape
    // it, but we never reach HTML output at all — html nodes are shown as
    // literal text in the AST walk below.
    options
}

/// Accumulates rendered lines and navigable links during the AST walk.
#[derive(Default)]
struct Builder {
    lines: Vec<RenderedLine>,
    links: Vec<LinkRef>,
}

impl Builder {
    fn push(&mut self, kind: LineType, spans: Vec<InlineSpan>) {
        self.lines.push(RenderedLine::new(kind, spans));
    }

    /// Ensure exactly one blank separator line after a block.
    fn blank(&mut self) {
        if matches!(self.lines.last(), Some(line) if line.kind() != LineType::Empty) {
            self.lines.push(RenderedLine::new(LineType::Empty, Vec::new()));
        }
    }

    fn trim_trailing_blanks(&mut self) {
        while matches!(self.lines.last(), Some(line) if line.kind() == LineType::Empty) {
            self.lines.pop();
        }
    }
}

/// Inline content of one block, split into visual lines at soft/hard breaks.
#[derive(Default)]
struct InlineFlow {
    visual_lines: Vec<Vec<InlineSpan>>,
    /// Navigable links, with the index of the visual line they start on.
    links: Vec<(String, String, usize)>,
}

impl InlineFlow {
    fn current(&mut self) -> &mut Vec<InlineSpan> {
        if self.visual_lines.is_empty() {
            self.visual_lines.push(Vec::new());
        }
        // Just pushed if empty, so the unwrap-free form below is safe.
        let idx = self.visual_lines.len() - 1;
        &mut self.visual_lines[idx]
    }

    fn break_line(&mut self) {
        if self.visual_lines.is_empty() {
            self.visual_lines.push(Vec::new());
        }
        self.visual_lines.push(Vec::new());
    }

    fn line_index(&self) -> usize {
        self.visual_lines.len().saturating_sub(1)
    }
}

fn process_block<'a>(node: &'a AstNode<'a>, out: &mut Builder, list_depth: usize) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            let mut spans = vec![InlineSpan::new(
                format!("{} ", "#".repeat(heading.level as usize)),
                InlineStyle::default(),
            )];
            let flow = collect_inline_flow(node, out);
            if let Some(first) = flow.into_iter().next() {
                spans.extend(first);
            }
            out.push(LineType::Heading(heading.level), spans);
            out.blank();
        }

        NodeValue::Paragraph => {
            for line in collect_inline_flow(node, out) {
                out.push(LineType::Paragraph, line);
            }
            out.blank();
        }

        NodeValue::CodeBlock(code) => {
            for line in code.literal.trim_end_matches('\n').split('\n') {
                out.push(
                    LineType::CodeBlock,
                    vec![InlineSpan::new(line.to_string(), InlineStyle::code())],
                );
            }
            out.blank();
        }

        NodeValue::BlockQuote => {
            let start = out.lines.len();
            for child in node.children() {
                process_block(child, out, list_depth);
            }
            // Re-tag and prefix the quoted block's lines.
            for line in &mut out.lines[start..] {
                if line.kind() == LineType::Empty {
                    continue;
                }
                line.set_kind(LineType::BlockQuote);
                line.prepend(InlineSpan::new("│ ".to_string(), InlineStyle::default()));
            }
            out.blank();
        }

        NodeValue::List(list) => {
            let ordered = list.list_type == ListType::Ordered;
            let mut index = list.start.max(1);
            for item in node.children() {
                process_list_item(item, out, list_depth, ordered, index);
                index += 1;
            }
            if list_depth == 0 {
                out.blank();
            }
        }

        NodeValue::ThematicBreak => {
            out.push(
                LineType::HorizontalRule,
                vec![InlineSpan::new("─".repeat(40), InlineStyle::default())],
            );
            out.blank();
        }

        // Raw HTML passthrough is disabled: show the source text verbatim.
        NodeValue::HtmlBlock(html) => {
            for line in html.literal.trim_end_matches('\n').split('\n') {
                out.push(
                    LineType::Paragraph,
                    vec![InlineSpan::new(line.to_string(), InlineStyle::default())],
                );
            }
            out.blank();
        }

        _ => {
            for child in node.children() {
                process_block(child, out, list_depth);
            }
        }
    }
}

fn process_list_item<'a>(
    item: &'a AstNode<'a>,
    out: &mut Builder,
    depth: usize,
    ordered: bool,
    index: usize,
) {
    let indent = "  ".repeat(depth);
    let marker = if ordered {
        format!("{indent}{index}. ")
    } else {
        format!("{indent}• ")
    };
    let continuation = " ".repeat(marker.len());

    let mut first_line_done = false;
    for child in item.children() {
        match &child.data.borrow().value {
            NodeValue::Paragraph => {
                for line in collect_inline_flow(child, out) {
                    let prefix = if first_line_done {
                        continuation.clone()
                    } else {
                        first_line_done = true;
                        marker.clone()
                    };
                    let mut spans = vec![InlineSpan::new(prefix, InlineStyle::default())];
                    spans.extend(line);
                    out.push(LineType::ListItem(depth), spans);
                }
            }
            NodeValue::List(_) => {
                process_block(child, out, depth + 1);
            }
            _ => process_block(child, out, depth),
        }
    }
    if !first_line_done {
        out.push(
            LineType::ListItem(depth),
            vec![InlineSpan::new(marker, InlineStyle::default())],
        );
    }
}

/// Collect a block's inline content as visual lines, registering navigable
/// links against the builder with absolute line numbers.
fn collect_inline_flow<'a>(node: &'a AstNode<'a>, out: &mut Builder) -> Vec<Vec<InlineSpan>> {
    let mut flow = InlineFlow::default();
    for child in node.children() {
        collect_inlines(child, InlineStyle::default(), &mut flow);
    }
    let base = out.lines.len();
    for (text, url, rel_line) in flow.links {
        out.links.push(LinkRef {
            text,
            url,
            line: base + rel_line,
        });
    }
    flow.visual_lines
}

fn collect_inlines<'a>(node: &'a AstNode<'a>, style: InlineStyle, flow: &mut InlineFlow) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => {
            flow.current().push(InlineSpan::new(t.clone(), style));
        }
        NodeValue::Code(code) => {
            let mut code_style = InlineStyle::code();
            code_style.link = style.link;
            flow.current()
                .push(InlineSpan::new(code.literal.clone(), code_style));
        }
        NodeValue::Emph => {
            let mut next = style;
            next.emphasis = true;
            for child in node.children() {
                collect_inlines(child, next, flow);
            }
        }
        NodeValue::Strong => {
            let mut next = style;
            next.strong = true;
            for child in node.children() {
                collect_inlines(child, next, flow);
            }
        }
        NodeValue::Strikethrough => {
            let mut next = style;
            next.strikethrough = true;
            for child in node.children() {
                collect_inlines(child, next, flow);
            }
        }
        NodeValue::Link(link) => {
            if is_safe_link_url(&link.url) {
                let mut next = style;
                next.link = true;
                flow.links
                    .push((extract_text(node), link.url.clone(), flow.line_index()));
                for child in node.children() {
                    collect_inlines(child, next, flow);
                }
            } else {
                // Dangerous scheme: render the text inert, no link styling,
                // no navigable entry.
                for child in node.children() {
                    collect_inlines(child, style, flow);
                }
            }
        }
        NodeValue::Image(_) => {
            let alt = extract_text(node);
            let label = if alt.is_empty() {
                "[image]".to_string()
            } else {
                format!("[image: {alt}]")
            };
            flow.current()
                .push(InlineSpan::new(label, InlineStyle::default()));
        }
        // Single line breaks become visual breaks, per the renderer contract.
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            flow.break_line();
        }
        // Raw inline HTML passthrough is disabled: literal text.
        NodeValue::HtmlInline(html) => {
            flow.current()
                .push(InlineSpan::new(html.clone(), InlineStyle::default()));
        }
        _ => {
            for child in node.children() {
                collect_inlines(child, style, flow);
            }
        }
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    extract_text_recursive(node, &mut text);
    text
}

fn extract_text_recursive<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => text.push_str(t),
        NodeValue::Code(c) => text.push_str(&c.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {
            for child in node.children() {
                extract_text_recursive(child, text);
            }
        }
    }
}
