//! Markdown rendering with comrak.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::styled::{BlockStyle, SpanStyle, StyledLine, StyledSpan, StyledText};
use super::MarkdownRenderer;

/// Renders GitHub-flavoured markdown into [`StyledText`].
///
/// # Example
///
/// ```
/// use markdraft::preview::{ComrakRenderer, MarkdownRenderer, strip_presentation_only};
///
/// let styled = ComrakRenderer.render("# Title\n\n**bold** text");
/// assert_eq!(strip_presentation_only(&styled), "Title\n\nbold text");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakRenderer;

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, text: &str) -> StyledText {
        let arena = Arena::new();
        let options = create_options();
        let root = parse_document(&arena, text, &options);

        let mut lines = Vec::new();
        render_block(root, 0, &mut lines);
        while lines.last().is_some_and(|l: &StyledLine| l.block == BlockStyle::Blank) {
            lines.pop();
        }
        tracing::trace!(lines = lines.len(), "rendered preview");
        StyledText::new(lines)
    }
}

fn create_options() -> Options {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options
}

fn render_block<'a>(node: &'a AstNode<'a>, quote_depth: usize, lines: &mut Vec<StyledLine>) {
    match &node.data.borrow().value {
        NodeValue::Document => {
            for child in node.children() {
                render_block(child, quote_depth, lines);
            }
        }

        NodeValue::Heading(heading) => {
            for spans in collect_inline_lines(node) {
                push_line(lines, BlockStyle::Heading(heading.level), quote_depth, spans);
            }
            push_blank(lines, quote_depth);
        }

        NodeValue::Paragraph => {
            for spans in collect_inline_lines(node) {
                push_line(lines, BlockStyle::Paragraph, quote_depth, spans);
            }
            push_blank(lines, quote_depth);
        }

        NodeValue::BlockQuote => {
            for child in node.children() {
                render_block(child, quote_depth + 1, lines);
            }
        }

        NodeValue::List(list) => {
            for (index, item) in node.children().enumerate() {
                let marker = match &item.data.borrow().value {
                    NodeValue::TaskItem(Some(_)) => "☑ ".to_string(),
                    NodeValue::TaskItem(None) => "☐ ".to_string(),
                    _ => match list.list_type {
                        ListType::Bullet => "• ".to_string(),
                        ListType::Ordered => format!("{}. ", list.start + index),
                    },
                };
                render_list_item(item, &marker, quote_depth, lines);
            }
            push_blank(lines, quote_depth);
        }

        NodeValue::CodeBlock(code_block) => {
            let code = SpanStyle {
                code: true,
                ..SpanStyle::default()
            };
            for raw in code_block.literal.lines() {
                push_line(
                    lines,
                    BlockStyle::Code,
                    quote_depth,
                    vec![StyledSpan::new(raw, code)],
                );
            }
            push_blank(lines, quote_depth);
        }

        NodeValue::HtmlBlock(html) => {
            for raw in html.literal.lines() {
                push_line(
                    lines,
                    BlockStyle::Paragraph,
                    quote_depth,
                    vec![StyledSpan::plain(raw)],
                );
            }
            push_blank(lines, quote_depth);
        }

        NodeValue::ThematicBreak => {
            push_line(lines, BlockStyle::Rule, quote_depth, Vec::new());
            push_blank(lines, quote_depth);
        }

        NodeValue::Table(_) => {
            for row in node.children() {
                let cells: Vec<String> = row.children().map(extract_text).collect();
                push_line(
                    lines,
                    BlockStyle::Table,
                    quote_depth,
                    vec![StyledSpan::plain(cells.join(" │ "))],
                );
            }
            push_blank(lines, quote_depth);
        }

        _ => {
            for child in node.children() {
                render_block(child, quote_depth, lines);
            }
        }
    }
}

/// Render a list item, hanging its continuation lines under the marker.
fn render_list_item<'a>(
    item: &'a AstNode<'a>,
    marker: &str,
    quote_depth: usize,
    lines: &mut Vec<StyledLine>,
) {
    let mut inner = Vec::new();
    for child in item.children() {
        render_block(child, quote_depth, &mut inner);
    }
    inner.retain(|line| line.block != BlockStyle::Blank);

    let indent = " ".repeat(marker.chars().count());
    for (i, mut line) in inner.into_iter().enumerate() {
        let prefix = if i == 0 { marker.to_string() } else { indent.clone() };
        line.spans.insert(0, StyledSpan::plain(prefix));
        if line.block == BlockStyle::Paragraph {
            line.block = BlockStyle::ListItem;
        }
        lines.push(line);
    }
}

fn push_line(
    lines: &mut Vec<StyledLine>,
    block: BlockStyle,
    quote_depth: usize,
    spans: Vec<StyledSpan>,
) {
    let mut line = StyledLine::new(block, spans);
    line.quote_depth = quote_depth;
    lines.push(line);
}

fn push_blank(lines: &mut Vec<StyledLine>, quote_depth: usize) {
    if lines.last().is_some_and(|l| l.block != BlockStyle::Blank) {
        let mut blank = StyledLine::blank();
        blank.quote_depth = quote_depth;
        lines.push(blank);
    }
}

/// Collect a block's inline content, split at hard line breaks.
fn collect_inline_lines<'a>(node: &'a AstNode<'a>) -> Vec<Vec<StyledSpan>> {
    let mut lines = vec![Vec::new()];
    for child in node.children() {
        collect_inline_recursive(child, SpanStyle::default(), &mut lines);
    }
    lines
}

fn collect_inline_recursive<'a>(
    node: &'a AstNode<'a>,
    style: SpanStyle,
    lines: &mut Vec<Vec<StyledSpan>>,
) {
    let push = |lines: &mut Vec<Vec<StyledSpan>>, span: StyledSpan| {
        if let Some(current) = lines.last_mut() {
            current.push(span);
        }
    };

    match &node.data.borrow().value {
        NodeValue::Text(t) => push(lines, StyledSpan::new(t.clone(), style)),
        NodeValue::Code(code) => {
            let code_style = SpanStyle {
                code: true,
                ..SpanStyle::default()
            };
            push(lines, StyledSpan::new(code.literal.clone(), code_style));
        }
        NodeValue::HtmlInline(html) => push(lines, StyledSpan::new(html.clone(), style)),
        NodeValue::SoftBreak => push(lines, StyledSpan::new(" ", style)),
        NodeValue::LineBreak => lines.push(Vec::new()),
        NodeValue::Emph => {
            let next = SpanStyle {
                italic: true,
                ..style
            };
            for child in node.children() {
                collect_inline_recursive(child, next, lines);
            }
        }
        NodeValue::Strong => {
            let next = SpanStyle { bold: true, ..style };
            for child in node.children() {
                collect_inline_recursive(child, next, lines);
            }
        }
        NodeValue::Strikethrough => {
            let next = SpanStyle {
                strikethrough: true,
                ..style
            };
            for child in node.children() {
                collect_inline_recursive(child, next, lines);
            }
        }
        NodeValue::Link(_) | NodeValue::Image(_) => {
            let next = SpanStyle { link: true, ..style };
            for child in node.children() {
                collect_inline_recursive(child, next, lines);
            }
        }
        _ => {
            for child in node.children() {
                collect_inline_recursive(child, style, lines);
            }
        }
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    collect_inline_lines(node)
        .iter()
        .flatten()
        .map(|span| span.text.as_str())
        .collect()
}
