//! Content nodes of the document definition
//!
//! These mirror the layout engine's primitives: styled text runs, lists,
//! tables, vector canvases and images. They serialize to the engine's JSON
//! shape (camelCase keys, optional properties omitted).

use serde::Serialize;

use crate::style::{Margin, Style};

/// A content node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(ContentText),
    OrderedList(ContentOrderedList),
    UnorderedList(ContentUnorderedList),
    Table(ContentTable),
    Canvas(ContentCanvas),
    Image(ContentImage),
}

/// Body of a text run: a literal string or nested content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Runs(Vec<Content>),
}

/// Reference to a style: by name, inline, or a stack of both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleRef {
    Name(String),
    Inline(Style),
    Stack(Vec<StyleRef>),
}

/// A styled text run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentText {
    pub text: TextValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleRef>,
    /// Anchor target for internal links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Hyperlink target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Heading level seen by the page-break predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_level: Option<u8>,
    /// Style properties set directly on the node
    #[serde(flatten)]
    pub props: Style,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentOrderedList {
    pub ol: Vec<Content>,
    /// Number of the first item, when not 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentUnorderedList {
    pub ul: Vec<Content>,
}

/// A table cell holds a stack of content
pub type TableCell = Vec<Content>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTable {
    pub table: TableBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBody {
    pub body: Vec<Vec<TableCell>>,
}

/// Vector drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCanvas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    pub canvas: Vec<CanvasElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CanvasElement {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        #[serde(rename = "lineColor", skip_serializing_if = "Option::is_none")]
        line_color: Option<String>,
    },
}

/// Image reference; `image` is a key of the document's images map or a URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentImage {
    pub image: String,
}

impl ContentText {
    /// An unstyled run
    pub fn new(text: TextValue) -> Self {
        Self {
            text,
            style: None,
            id: None,
            link: None,
            headline_level: None,
            props: Style::default(),
        }
    }

    /// An unstyled run of literal text
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(TextValue::Plain(text.into()))
    }
}

impl Content {
    pub fn as_text(&self) -> Option<&ContentText> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Heading level of this node, if it is a heading seen by the
    /// page-break predicate
    pub fn headline_level(&self) -> Option<u8> {
        self.as_text().and_then(|text| text.headline_level)
    }
}

impl From<ContentText> for Content {
    fn from(text: ContentText) -> Self {
        Content::Text(text)
    }
}
