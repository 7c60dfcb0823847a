//! Block-level mdast nodes
//!
//! This module defines block-level nodes that form the document structure,
//! such as paragraphs, headings, lists, tables, and literal blocks.

use serde::{Deserialize, Serialize};

use crate::document::Node;

/// A paragraph of phrasing content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content within the paragraph
    pub children: Vec<Node>,
}

/// A section heading (`#` to `######`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading rank (1-6, where 1 is the highest)
    pub depth: u8,
    /// Heading content
    pub children: Vec<Node>,
}

/// A block quotation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Blockquote {
    pub children: Vec<Node>,
}

/// An ordered or unordered list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct List {
    /// Whether the items are numbered
    #[serde(default)]
    pub ordered: bool,
    /// Number of the first item of an ordered list
    #[serde(default)]
    pub start: Option<u32>,
    /// Whether items are separated by blank lines
    #[serde(default)]
    pub spread: Option<bool>,
    /// List items
    pub children: Vec<Node>,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Task list state (`[x]` / `[ ]`), absent for plain items
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub spread: Option<bool>,
    /// Item content (can contain nested blocks)
    pub children: Vec<Node>,
}

/// A GFM table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Alignment per column; `None` means no alignment was given
    #[serde(default)]
    pub align: Vec<Option<AlignKind>>,
    /// Table rows, the first one being the header row
    pub children: Vec<TableRow>,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub children: Vec<TableCell>,
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (phrasing)
    pub children: Vec<Node>,
}

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignKind {
    Left,
    Right,
    Center,
}

/// Raw HTML
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
}

/// A fenced or indented code block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Code {
    /// Language of the code, from the info string
    #[serde(default)]
    pub lang: Option<String>,
    /// Remainder of the info string after the language
    #[serde(default)]
    pub meta: Option<String>,
    /// The literal content
    pub value: String,
}

/// A display math block (`$$ ... $$`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Math {
    #[serde(default)]
    pub meta: Option<String>,
    pub value: String,
}

/// YAML front matter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Yaml {
    pub value: String,
}

/// TOML front matter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toml {
    pub value: String,
}

/// A link reference definition (`[label]: url "title"`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Definition {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A footnote definition (`[^label]: content`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FootnoteDefinition {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    pub children: Vec<Node>,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            depth: 1,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_default() {
        let para = Paragraph::default();
        assert!(para.children.is_empty());
    }

    #[test]
    fn test_heading_default_depth() {
        assert_eq!(Heading::default().depth, 1);
    }

    #[test]
    fn test_list_fields_default_when_missing() {
        let list: List = serde_json::from_str(r#"{"children": []}"#).unwrap();
        assert!(!list.ordered);
        assert_eq!(list.start, None);
        assert_eq!(list.spread, None);
    }

    #[test]
    fn test_table_align_with_nulls() {
        let table: Table = serde_json::from_str(
            r#"{"align": ["left", null, "right"], "children": []}"#,
        )
        .unwrap();
        assert_eq!(
            table.align,
            vec![Some(AlignKind::Left), None, Some(AlignKind::Right)]
        );
    }

    #[test]
    fn test_code_block_without_lang() {
        let code: Code = serde_json::from_str(r#"{"lang": null, "value": "x = 1"}"#).unwrap();
        assert_eq!(code.lang, None);
        assert_eq!(code.value, "x = 1");
    }
}
