//! mdpdf-ast - mdast (Markdown Abstract Syntax Tree) definitions
//!
//! This crate provides the node types mdpdf consumes. Trees are produced
//! by an upstream markdown parser and usually arrive as mdast JSON, so every
//! type derives serde with the `type`-tagged, camelCase layout of the
//! [mdast](https://github.com/syntax-tree/mdast) format.

pub mod block;
pub mod document;
pub mod inline;

pub use block::{
    AlignKind, Blockquote, Code, Definition, FootnoteDefinition, Heading, Html, List, ListItem,
    Math, Paragraph, Table, TableCell, TableRow, Toml, Yaml,
};
pub use document::{plain_text, Node, Root};
pub use inline::{
    Delete, Emphasis, Footnote, FootnoteReference, Image, ImageReference, InlineCode, InlineMath,
    Link, LinkReference, ReferenceKind, Strong, Text,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
