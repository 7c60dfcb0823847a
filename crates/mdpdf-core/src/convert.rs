//! mdast to document-definition converter
//!
//! Walks the markdown tree depth-first and maps every node onto layout
//! primitives. Conversion always yields a sequence: most nodes produce one
//! content node, but inline wrappers (emphasis, strong, delete, link,
//! footnote) and list items splice their children into the parent's
//! result instead of wrapping them.

use mdpdf_ast::{
    plain_text, AlignKind, Blockquote, Code, Delete, Emphasis, Footnote, Heading, Html, Image,
    InlineCode, InlineMath, Link, List, ListItem, Math, Node, Paragraph, Strong, Table, Text,
};

use crate::content::{
    CanvasElement, Content, ContentCanvas, ContentImage, ContentOrderedList, ContentTable,
    ContentText, ContentUnorderedList, StyleRef, TableBody, TableCell, TextValue,
};
use crate::context::Context;
use crate::error::{PdfError, Result};
use crate::style::{
    heading_style, Alignment, Style, TextDecoration, HRULE_STYLE, LINK_STYLE, LIST_ITEM_STYLE,
    PARAGRAPH_STYLE,
};

/// Width of the content area a horizontal rule spans, in points
pub const RULE_WIDTH: f64 = 514.0;

/// Converter from mdast nodes to content nodes
pub struct Converter;

impl Converter {
    /// Convert a sequence of sibling nodes, preserving document order.
    ///
    /// Fails only when a table row or cell is reached outside its table.
    pub fn convert(nodes: &[Node], ctx: &Context<'_>) -> Result<Vec<Content>> {
        let mut results = Vec::with_capacity(nodes.len());

        for node in nodes {
            match node {
                Node::Paragraph(paragraph) => {
                    results.push(Self::build_paragraph(paragraph, ctx)?);
                }
                Node::Heading(heading) => results.push(Self::build_heading(heading, ctx)?),
                Node::ThematicBreak => results.push(Self::build_thematic_break(ctx)),
                Node::Blockquote(quote) => results.push(Self::build_blockquote(quote, ctx)?),
                Node::List(list) => results.push(Self::build_list(list, ctx)?),
                Node::ListItem(item) => results.extend(Self::build_list_item(item, ctx)?),
                Node::Table(table) => results.push(Self::build_table(table, ctx)?),
                Node::TableRow(_) | Node::TableCell(_) => {
                    return Err(PdfError::MisplacedNode(node.kind()));
                }

                // Literal blocks render their source as plain text for now
                Node::Html(Html { value })
                | Node::Code(Code { value, .. })
                | Node::Math(Math { value, .. }) => results.push(Self::build_literal(value, ctx)),

                Node::Text(Text { value })
                | Node::InlineCode(InlineCode { value })
                | Node::InlineMath(InlineMath { value }) => {
                    results.push(Self::build_text(value, ctx).into());
                }
                Node::Break => results.push(Self::build_text("", ctx).into()),

                Node::Emphasis(Emphasis { children }) => {
                    let ctx = ctx.with_deco(ctx.deco.with_emphasis());
                    results.extend(Self::convert(children, &ctx)?);
                }
                Node::Strong(Strong { children }) => {
                    let ctx = ctx.with_deco(ctx.deco.with_strong());
                    results.extend(Self::convert(children, &ctx)?);
                }
                Node::Delete(Delete { children }) => {
                    let ctx = ctx.with_deco(ctx.deco.with_delete());
                    results.extend(Self::convert(children, &ctx)?);
                }
                Node::Link(link) => results.extend(Self::build_link(link, ctx)?),
                Node::Image(image) => results.push(Self::build_image(image, ctx)),
                Node::Footnote(Footnote { children }) => {
                    results.extend(Self::convert(children, ctx)?);
                }

                Node::Yaml(_)
                | Node::Toml(_)
                | Node::Definition(_)
                | Node::FootnoteDefinition(_)
                | Node::LinkReference(_)
                | Node::ImageReference(_)
                | Node::FootnoteReference(_) => {
                    log::trace!("Skipping unsupported {} node", node.kind());
                }
            }
        }

        Ok(results)
    }

    fn build_paragraph(paragraph: &Paragraph, ctx: &Context<'_>) -> Result<Content> {
        let mut run = ContentText::new(TextValue::Runs(Self::convert(&paragraph.children, ctx)?));
        run.props = ctx.style(PARAGRAPH_STYLE).cloned().unwrap_or_default();
        Ok(run.into())
    }

    fn build_heading(heading: &Heading, ctx: &Context<'_>) -> Result<Content> {
        let mut run = ContentText::new(TextValue::Runs(Self::convert(&heading.children, ctx)?));
        run.style = heading_style(heading.depth).map(|name| StyleRef::Name(name.to_string()));
        run.id = Some(ctx.slugs.borrow_mut().slug(&plain_text(&heading.children)));
        if ctx.prevent_orphans {
            run.headline_level = Some(heading.depth);
        }
        Ok(run.into())
    }

    fn build_thematic_break(ctx: &Context<'_>) -> Content {
        let style = ctx.style(HRULE_STYLE);

        Content::Canvas(ContentCanvas {
            margin: style.and_then(|s| s.margin).map(|m| m.expand_uniform()),
            canvas: vec![CanvasElement::Line {
                x1: 0.0,
                y1: 0.0,
                x2: RULE_WIDTH,
                y2: 0.0,
                line_color: style.and_then(|s| s.color.clone()),
            }],
        })
    }

    fn build_blockquote(quote: &Blockquote, ctx: &Context<'_>) -> Result<Content> {
        // TODO: give quotes their own style (indent + left rule) once a
        // "blockquote" entry exists in the base table
        let children = Self::convert(&quote.children, ctx)?;
        Ok(ContentText::new(TextValue::Runs(children)).into())
    }

    fn build_list(list: &List, ctx: &Context<'_>) -> Result<Content> {
        let items = Self::convert(&list.children, ctx)?;

        Ok(if list.ordered {
            Content::OrderedList(ContentOrderedList {
                ol: items,
                start: list.start.filter(|&start| start != 1),
            })
        } else {
            Content::UnorderedList(ContentUnorderedList { ul: items })
        })
    }

    /// List items are flattened: the layout engine expects each item's
    /// content directly inside the list, not under a wrapper node.
    fn build_list_item(item: &ListItem, ctx: &Context<'_>) -> Result<Vec<Content>> {
        let style = ctx.style(LIST_ITEM_STYLE);

        Ok(Self::convert(&item.children, ctx)?
            .into_iter()
            .map(|child| match child {
                Content::Text(mut run) => {
                    run.style = style.cloned().map(StyleRef::Inline);
                    Content::Text(run)
                }
                other => other,
            })
            .collect())
    }

    fn build_table(table: &Table, ctx: &Context<'_>) -> Result<Content> {
        let aligns: Vec<Alignment> = table
            .align
            .iter()
            .map(|align| match align {
                Some(AlignKind::Right) => Alignment::Right,
                Some(AlignKind::Center) => Alignment::Center,
                _ => Alignment::Left,
            })
            .collect();

        let body = table
            .children
            .iter()
            .map(|row| {
                row.children
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| -> Result<TableCell> {
                        let ctx = ctx.with_deco(ctx.deco.with_align(aligns.get(i).copied()));
                        Self::convert(&cell.children, &ctx)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Content::Table(ContentTable {
            table: TableBody { body },
        }))
    }

    fn build_literal(value: &str, ctx: &Context<'_>) -> Content {
        ContentText::new(TextValue::Runs(vec![Self::build_text(value, ctx).into()])).into()
    }

    /// A text run carrying every active decoration
    fn build_text(text: &str, ctx: &Context<'_>) -> ContentText {
        let deco = &ctx.deco;
        let mut run = ContentText::plain(text);

        let mut inline = Style::default();
        if deco.strong {
            inline.bold = Some(true);
        }
        if deco.emphasis {
            inline.italics = Some(true);
        }
        if let Some(align) = deco.align {
            inline.alignment = Some(align);
        }
        if deco.delete {
            run.props.decoration = Some(TextDecoration::LineThrough);
        }

        run.style = match &deco.link {
            Some(url) => {
                run.link = Some(url.clone());
                let link_style = StyleRef::Name(LINK_STYLE.to_string());
                if inline.is_empty() {
                    Some(link_style)
                } else {
                    Some(StyleRef::Stack(vec![link_style, StyleRef::Inline(inline)]))
                }
            }
            None if inline.is_empty() => None,
            None => Some(StyleRef::Inline(inline)),
        };

        run
    }

    fn build_link(link: &Link, ctx: &Context<'_>) -> Result<Vec<Content>> {
        let url = ctx.transform_urls.apply(&link.url, link);
        let ctx = ctx.with_deco(ctx.deco.with_link(url));
        Self::convert(&link.children, &ctx)
    }

    fn build_image(image: &Image, ctx: &Context<'_>) -> Content {
        if !ctx.images.contains_key(&image.url) {
            log::warn!("No image data resolved for {}", image.url);
        }
        Content::Image(ContentImage {
            image: image.url.clone(),
        })
    }
}
