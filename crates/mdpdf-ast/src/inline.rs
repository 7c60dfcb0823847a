//! Inline (phrasing) mdast nodes
//!
//! This module defines nodes that appear within blocks, such as text,
//! emphasis, links, and images.

use serde::{Deserialize, Serialize};

use crate::document::Node;

/// Plain text content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Emphasized content (`*text*` or `_text_`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strongly emphasized content (`**text**`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Struck-through content (`~~text~~`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Delete {
    pub children: Vec<Node>,
}

/// Inline code span
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

/// Inline math (`$...$`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineMath {
    pub value: String,
}

/// A hyperlink
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    /// The URL target
    pub url: String,
    /// Advisory title
    #[serde(default)]
    pub title: Option<String>,
    /// The link text (can contain nested inline elements)
    pub children: Vec<Node>,
}

/// An image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    /// Image source path or URL
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Alternative text for accessibility
    #[serde(default)]
    pub alt: Option<String>,
}

/// Inline footnote (`^[content]`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Footnote {
    pub children: Vec<Node>,
}

/// How a reference was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// `[label]`
    #[default]
    Shortcut,
    /// `[label][]`
    Collapsed,
    /// `[text][label]`
    Full,
}

/// A link through a definition (`[text][label]`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReference {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub reference_type: ReferenceKind,
    pub children: Vec<Node>,
}

/// An image through a definition (`![alt][label]`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub reference_type: ReferenceKind,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A footnote marker (`[^label]`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FootnoteReference {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
}
