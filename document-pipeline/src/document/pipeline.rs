use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use super::content_tree::{ContentNode, NodeKind};
use super::embed::parse_embed_tag;

/// Markdown renderer producing a presentation-ready content tree.
///
/// The pipeline applies, in order: GitHub-flavoured extensions (tables,
/// strikethrough, task lists), math-span parsing, fenced-code language
/// annotation, and raw-markup passthrough with `voxel-art` embed detection.
/// Rendering is deterministic and never fails; unparseable syntax degrades to
/// literal text.
pub struct DocumentRenderer {
    options: Options,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_GFM);
        options.insert(Options::ENABLE_MATH);
        Self { options }
    }

    pub fn render(&self, markdown: &str) -> ContentNode {
        let parser = Parser::new_ext(markdown, self.options);
        let mut builder = TreeBuilder::new();
        for event in parser {
            builder.handle(event);
        }
        builder.finish()
    }
}

/// Stack-based assembly of the content tree from the parser event stream.
struct TreeBuilder {
    stack: Vec<ContentNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![ContentNode::new(NodeKind::Document)],
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(ContentNode::new(kind_for_tag(tag))),
            Event::End(_) => self.close_container(),
            Event::Text(text) => self.append(ContentNode::text(text.into_string())),
            Event::Code(text) => {
                let mut code = ContentNode::new(NodeKind::InlineCode);
                code.push(ContentNode::text(text.into_string()));
                self.append(code);
            }
            Event::InlineMath(tex) => {
                self.append(ContentNode::new(NodeKind::InlineMath(tex.into_string())));
            }
            Event::DisplayMath(tex) => {
                self.append(ContentNode::new(NodeKind::DisplayMath(tex.into_string())));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.append(classify_raw(&html)),
            Event::Rule => self.append(ContentNode::new(NodeKind::HorizontalRule)),
            Event::TaskListMarker(checked) => {
                self.append(ContentNode::new(NodeKind::TaskMarker(checked)));
            }
            Event::SoftBreak => self.append(ContentNode::text("\n")),
            Event::HardBreak => self.append(ContentNode::new(NodeKind::HardBreak)),
            Event::FootnoteReference(name) => {
                self.append(ContentNode::text(format!("[{name}]")));
            }
        }
    }

    fn append(&mut self, node: ContentNode) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push(node);
        }
    }

    fn close_container(&mut self) {
        if self.stack.len() > 1 {
            if let Some(node) = self.stack.pop() {
                self.append(node);
            }
        }
    }

    fn finish(mut self) -> ContentNode {
        while self.stack.len() > 1 {
            self.close_container();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| ContentNode::new(NodeKind::Document))
    }
}

/// Raw markup passes through structurally; a lone `voxel-art` tag becomes an
/// embed node sized from its attributes.
fn classify_raw(html: &str) -> ContentNode {
    match parse_embed_tag(html) {
        Some(attrs) => ContentNode::new(NodeKind::VoxelEmbed {
            width: attrs.width,
            height: attrs.height,
        }),
        None => ContentNode::new(NodeKind::RawHtml(html.to_string())),
    }
}

fn kind_for_tag(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(level as u8),
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        // Block treatment requires an explicit language class on the fence;
        // anything else keeps the inline badge presentation.
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => match fence_language(&info) {
            Some(language) => NodeKind::BlockCode {
                language: Some(language),
            },
            None => NodeKind::InlineCode,
        },
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::InlineCode,
        Tag::List(Some(start)) => NodeKind::OrderedList { start },
        Tag::List(None) => NodeKind::UnorderedList,
        Tag::Item => NodeKind::ListItem,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            href: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            src: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::HtmlBlock => NodeKind::HtmlBlock,
        // Remaining container kinds have no dedicated presentation; they pass
        // through as transparent containers under the host's defaults.
        _ => NodeKind::Document,
    }
}

fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> ContentNode {
        DocumentRenderer::new().render(markdown)
    }

    #[test]
    fn headings_keep_their_levels() {
        let tree = render("# one\n\n## two\n\n### three\n");
        let levels: Vec<u8> = tree
            .children
            .iter()
            .filter_map(|node| match node.kind {
                NodeKind::Heading(level) => Some(level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn fenced_block_without_language_renders_inline() {
        let tree = render("```\nlet x = 1;\n```\n");
        let code = tree
            .find(&|k| matches!(k, NodeKind::InlineCode))
            .expect("code node");
        assert_eq!(code.plain_text(), "let x = 1;\n");
        assert!(tree.find(&|k| matches!(k, NodeKind::BlockCode { .. })).is_none());
    }

    #[test]
    fn fenced_block_with_language_renders_block() {
        let tree = render("```rust\nlet x = 1;\n```\n");
        let code = tree
            .find(&|k| matches!(k, NodeKind::BlockCode { .. }))
            .expect("block code node");
        assert_eq!(
            code.kind,
            NodeKind::BlockCode {
                language: Some("rust".to_string())
            }
        );
    }

    #[test]
    fn inline_code_span_is_inline() {
        let tree = render("use `cargo` here\n");
        assert!(tree.find(&|k| matches!(k, NodeKind::InlineCode)).is_some());
    }

    #[test]
    fn math_spans_carry_raw_tex() {
        let tree = render("inline $e = mc^2$ and\n\n$$\\int_0^1 x\\,dx$$\n");
        let inline = tree
            .find(&|k| matches!(k, NodeKind::InlineMath(_)))
            .expect("inline math");
        assert_eq!(inline.kind, NodeKind::InlineMath("e = mc^2".to_string()));
        assert!(tree.find(&|k| matches!(k, NodeKind::DisplayMath(_))).is_some());
    }

    #[test]
    fn voxel_art_tag_becomes_embed_node() {
        let tree = render("before\n\n<voxel-art width=\"300px\" height=\"200px\" />\n\nafter\n");
        let embed = tree
            .find(&|k| matches!(k, NodeKind::VoxelEmbed { .. }))
            .expect("embed node");
        assert_eq!(
            embed.kind,
            NodeKind::VoxelEmbed {
                width: "300px".to_string(),
                height: "200px".to_string()
            }
        );
    }

    #[test]
    fn other_raw_markup_passes_through_structurally() {
        let tree = render("<aside>note</aside>\n");
        assert!(tree.find(&|k| matches!(k, NodeKind::RawHtml(_))).is_some());
    }

    #[test]
    fn gfm_table_and_task_list_parse() {
        let tree = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n- [ ] open\n");
        assert!(tree.find(&|k| matches!(k, NodeKind::Table)).is_some());
        assert!(
            tree.find(&|k| matches!(k, NodeKind::TaskMarker(true)))
                .is_some()
        );
    }

    #[test]
    fn horizontal_rule_is_a_leaf() {
        let tree = render("a\n\n---\n\nb\n");
        assert!(
            tree.find(&|k| matches!(k, NodeKind::HorizontalRule))
                .is_some()
        );
    }

    #[test]
    fn links_keep_destination() {
        let tree = render("[site](https://example.org)\n");
        let link = tree
            .find(&|k| matches!(k, NodeKind::Link { .. }))
            .expect("link node");
        assert_eq!(
            link.kind,
            NodeKind::Link {
                href: "https://example.org".to_string(),
                title: String::new()
            }
        );
        assert_eq!(link.plain_text(), "site");
    }
}
