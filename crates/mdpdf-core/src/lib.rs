//! mdpdf-core - markdown tree to PDF document definition
//!
//! This crate turns an mdast tree into the declarative document definition
//! a PDF layout engine consumes: styled text runs, lists, tables and
//! canvases, with heading anchors and a two-level style table.
//!
//! # Architecture
//!
//! The pipeline consists of three stages:
//!
//! 1. **Style resolver** - Merges user styles over the built-in table
//! 2. **Converter** - Walks the `mdpdf_ast::Root` and emits `Content` nodes
//! 3. **Builder** - Receives the assembled `DocumentDefinition` and renders it
//!
//! # Example
//!
//! ```ignore
//! use mdpdf_ast::Root;
//! use mdpdf_core::{render_pdf, JsonRenderer, PdfOptions};
//!
//! let root: Root = serde_json::from_str(&mdast_json)?;
//! let output = render_pdf(&root, &PdfOptions::default(), &JsonRenderer::new()).await?;
//! ```

pub mod content;
pub mod context;
pub mod convert;
pub mod document;
mod error;
pub mod images;
pub mod render;
pub mod slug;
pub mod style;

use std::cell::RefCell;
use std::future::Future;

use mdpdf_ast::Root;

pub use content::{Content, ContentText, StyleRef, TextValue};
pub use context::{Context, Decoration, ImageDataMap, UrlTransform};
pub use convert::Converter;
pub use document::{DocumentDefinition, OutputMode, PageBreakBefore, PdfOptions};
pub use error::{PdfError, Result};
pub use images::{resolve_images, ImageResolver, MapImageResolver};
pub use render::{Blob, JsonRenderer, RenderOutput, Renderer};
pub use slug::Slugger;
pub use style::{base_styles, resolve, Style, StyleDictionary};

/// Font of the built-in default style
pub const DEFAULT_FONT: &str = "Helvetica";

/// Convert `root` into its content nodes with a fresh slug generator.
pub fn convert_root(
    root: &Root,
    styles: &StyleDictionary,
    images: &ImageDataMap,
    options: &PdfOptions,
) -> Result<Vec<Content>> {
    let slugs = RefCell::new(Slugger::new());
    let ctx = Context::new(
        images,
        styles,
        &slugs,
        &options.transform_urls,
        options.prevent_orphans,
    );
    Converter::convert(&root.children, &ctx)
}

/// Assemble the full document definition for `root`.
///
/// # Arguments
/// * `root` - The markdown tree
/// * `options` - Styles, hooks and passthrough settings
/// * `images` - Resolved image data, keyed by URL
pub fn document_definition(
    root: &Root,
    options: &PdfOptions,
    images: &ImageDataMap,
) -> Result<DocumentDefinition> {
    let styles = resolve(&base_styles(), Some(&options.styles));
    let content = convert_root(root, &styles, images, options)?;
    log::debug!(
        "Converted {} markdown nodes into {} content nodes",
        root.len(),
        content.len()
    );

    let base_default = Style {
        font: Some(DEFAULT_FONT.to_string()),
        ..Default::default()
    };
    let default_style = match &options.default_style {
        Some(style) => base_default.merged(style),
        None => base_default,
    };

    Ok(DocumentDefinition {
        info: options.info.clone(),
        page_break_before: options.prevent_orphans.then_some(PageBreakBefore),
        page_margins: options.page_margins,
        page_orientation: options.page_orientation,
        page_size: options.page_size.clone(),
        user_password: options.user_password.clone(),
        owner_password: options.owner_password.clone(),
        permissions: options.permissions.clone(),
        version: options.version.clone(),
        watermark: options.watermark.clone(),
        content,
        images: images.clone(),
        default_style,
        styles,
    })
}

/// Build the document definition and hand it to `build`.
///
/// The builder is the only asynchronous step; its failure is returned
/// unchanged.
pub async fn mdast_to_pdf<F, Fut, T>(
    root: &Root,
    options: &PdfOptions,
    images: &ImageDataMap,
    build: F,
) -> Result<T>
where
    F: FnOnce(DocumentDefinition) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let def = document_definition(root, options, images)?;
    build(def).await
}

/// Convenience function to render a document with `renderer`
///
/// Resolves images through the configured resolver, then shapes the
/// rendered bytes according to the output mode.
pub async fn render_pdf<R: Renderer + ?Sized>(
    root: &Root,
    options: &PdfOptions,
    renderer: &R,
) -> Result<RenderOutput> {
    let images = match &options.image_resolver {
        Some(resolver) => resolve_images(root, resolver.as_ref())?,
        None => ImageDataMap::new(),
    };
    let mode = options.output;

    mdast_to_pdf(root, options, &images, |def| async move {
        let data = renderer.render(&def)?;
        Ok::<_, PdfError>(RenderOutput::new(mode, renderer.mime_type(), data))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpdf_ast::Node;

    #[test]
    fn test_module_structure() {
        // Verify exports are accessible
        let _ = Converter::convert;
        let _ = document_definition;
        let _ = resolve;
    }

    #[test]
    fn test_default_style_overlay() {
        let options = PdfOptions {
            default_style: Some(Style {
                font_size: Some(11.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let def = document_definition(&Root::new(), &options, &ImageDataMap::new()).unwrap();
        assert_eq!(def.default_style.font.as_deref(), Some(DEFAULT_FONT));
        assert_eq!(def.default_style.font_size, Some(11.0));
    }

    #[test]
    fn test_page_break_predicate_only_with_orphan_prevention() {
        let root = Root::with_children(vec![Node::heading(1, vec![Node::text("Title")])]);

        let def = document_definition(&root, &PdfOptions::default(), &ImageDataMap::new()).unwrap();
        assert!(def.page_break_before.is_none());
        assert_eq!(def.content[0].headline_level(), None);

        let options = PdfOptions {
            prevent_orphans: true,
            ..Default::default()
        };
        let def = document_definition(&root, &options, &ImageDataMap::new()).unwrap();
        let predicate = def.page_break_before.unwrap();
        assert!(predicate.should_break(&def.content[0], &[]));
    }

    #[test]
    fn test_user_styles_reach_definition() {
        let mut options = PdfOptions::default();
        options.styles.insert(
            "p".into(),
            Style {
                line_height: Some(1.5),
                ..Default::default()
            },
        );
        let root = Root::with_children(vec![Node::paragraph(vec![Node::text("x")])]);

        let def = document_definition(&root, &options, &ImageDataMap::new()).unwrap();
        assert_eq!(def.styles["p"].line_height, Some(1.5));
        let run = def.content[0].as_text().unwrap();
        assert_eq!(run.props.line_height, Some(1.5));
        assert!(run.props.margin.is_some());
    }
}
