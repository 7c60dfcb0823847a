//! Document root and the mdast node union
//!
//! [`Node`] is a closed sum type over every mdast node mdpdf recognizes.
//! Consumers match on it exhaustively, so adding a variant here is a compile
//! error everywhere a handler is missing.

use serde::{Deserialize, Serialize};

use crate::block::{
    Blockquote, Code, Definition, FootnoteDefinition, Heading, Html, List, ListItem, Math,
    Paragraph, Table, TableCell, TableRow, Toml, Yaml,
};
use crate::inline::{
    Delete, Emphasis, Footnote, FootnoteReference, Image, ImageReference, InlineCode, InlineMath,
    Link, LinkReference, Strong, Text,
};

/// Root node of an mdast document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    /// Document content, in source order
    pub children: Vec<Node>,
}

/// An mdast node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // Block nodes
    Paragraph(Paragraph),
    Heading(Heading),
    ThematicBreak,
    Blockquote(Blockquote),
    List(List),
    ListItem(ListItem),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
    Html(Html),
    Code(Code),
    Math(Math),

    // Front matter and definitions
    Yaml(Yaml),
    Toml(Toml),
    Definition(Definition),
    FootnoteDefinition(FootnoteDefinition),

    // Inline nodes
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    Delete(Delete),
    InlineCode(InlineCode),
    Break,
    Link(Link),
    Image(Image),
    LinkReference(LinkReference),
    ImageReference(ImageReference),
    Footnote(Footnote),
    FootnoteReference(FootnoteReference),
    InlineMath(InlineMath),
}

impl Root {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its top-level nodes
    pub fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Add a node to the document
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Check if the document is empty (no nodes)
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the number of top-level nodes
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl Node {
    /// A text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// A paragraph
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    /// A heading of the given depth
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    pub fn delete(children: Vec<Node>) -> Self {
        Node::Delete(Delete { children })
    }

    /// A link without a title
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(Link {
            url: url.into(),
            title: None,
            children,
        })
    }

    /// The mdast `type` name of this node
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::ThematicBreak => "thematicBreak",
            Node::Blockquote(_) => "blockquote",
            Node::List(_) => "list",
            Node::ListItem(_) => "listItem",
            Node::Table(_) => "table",
            Node::TableRow(_) => "tableRow",
            Node::TableCell(_) => "tableCell",
            Node::Html(_) => "html",
            Node::Code(_) => "code",
            Node::Math(_) => "math",
            Node::Yaml(_) => "yaml",
            Node::Toml(_) => "toml",
            Node::Definition(_) => "definition",
            Node::FootnoteDefinition(_) => "footnoteDefinition",
            Node::Text(_) => "text",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::Delete(_) => "delete",
            Node::InlineCode(_) => "inlineCode",
            Node::Break => "break",
            Node::Link(_) => "link",
            Node::Image(_) => "image",
            Node::LinkReference(_) => "linkReference",
            Node::ImageReference(_) => "imageReference",
            Node::Footnote(_) => "footnote",
            Node::FootnoteReference(_) => "footnoteReference",
            Node::InlineMath(_) => "inlineMath",
        }
    }

    /// Child nodes of a parent node.
    ///
    /// Tables and rows hold typed rows and cells rather than nodes, so they
    /// return `None` like literals do.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph(Paragraph { children })
            | Node::Heading(Heading { children, .. })
            | Node::Blockquote(Blockquote { children })
            | Node::List(List { children, .. })
            | Node::ListItem(ListItem { children, .. })
            | Node::TableCell(TableCell { children })
            | Node::FootnoteDefinition(FootnoteDefinition { children, .. })
            | Node::Emphasis(Emphasis { children })
            | Node::Strong(Strong { children })
            | Node::Delete(Delete { children })
            | Node::Link(Link { children, .. })
            | Node::LinkReference(LinkReference { children, .. })
            | Node::Footnote(Footnote { children }) => Some(children),
            _ => None,
        }
    }

    /// Append the textual content of this node to `out`.
    ///
    /// Literal nodes contribute their `value`, images their `alt`, and
    /// parents the content of their children. Markup is ignored.
    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(Text { value })
            | Node::InlineCode(InlineCode { value })
            | Node::InlineMath(InlineMath { value })
            | Node::Html(Html { value })
            | Node::Code(Code { value, .. })
            | Node::Math(Math { value, .. })
            | Node::Yaml(Yaml { value })
            | Node::Toml(Toml { value }) => out.push_str(value),

            Node::Image(Image { alt, .. }) | Node::ImageReference(ImageReference { alt, .. }) => {
                if let Some(alt) = alt {
                    out.push_str(alt);
                }
            }

            Node::Paragraph(_)
            | Node::Heading(_)
            | Node::Blockquote(_)
            | Node::List(_)
            | Node::ListItem(_)
            | Node::TableCell(_)
            | Node::FootnoteDefinition(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::Delete(_)
            | Node::Link(_)
            | Node::LinkReference(_)
            | Node::Footnote(_) => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(out);
                }
            }

            Node::Table(table) => {
                for row in &table.children {
                    collect_row_text(row, out);
                }
            }
            Node::TableRow(row) => collect_row_text(row, out),

            Node::ThematicBreak
            | Node::Break
            | Node::Definition(_)
            | Node::FootnoteReference(_) => {}
        }
    }
}

fn collect_row_text(row: &TableRow, out: &mut String) {
    for cell in &row.children {
        cell.children.iter().for_each(|child| child.collect_text(out));
    }
}

/// Flatten nodes into their plain text content, ignoring markup.
///
/// ```
/// use mdpdf_ast::{plain_text, Node};
///
/// let nodes = vec![Node::text("Hello "), Node::strong(vec![Node::text("world")])];
/// assert_eq!(plain_text(&nodes), "Hello world");
/// ```
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.collect_text(&mut out);
    }
    out
}
