//! Conversion options and the final document definition
//!
//! [`PdfOptions`] is what callers configure (usually from `mdpdf.toml`);
//! [`DocumentDefinition`] is what the render step receives. Page, security
//! and metadata options are passed through verbatim, in the layout
//! engine's own vocabulary (camelCase keys).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::context::{ImageDataMap, UrlTransform};
use crate::images::ImageResolver;
use crate::style::{Margin, Style, StyleDictionary};

/// Shape of the render step's result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Raw bytes
    #[default]
    Buffer,
    /// Bytes tagged with a MIME type
    Blob,
}

/// Document metadata written to the PDF info dictionary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

/// Page size: a standard name (`"A4"`, `"LETTER"`) or explicit dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageSize {
    Named(String),
    Custom { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrintPermission {
    LowResolution,
    HighResolution,
}

/// Permissions granted to users opening an encrypted PDF
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printing: Option<PrintPermission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifying: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copying: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filling_forms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_accessibility: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_assembly: Option<bool>,
}

/// Text stamped across every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Watermark {
    Text(String),
    Styled(WatermarkSpec),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkSpec {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

/// Options for one conversion
///
/// # Configuration File
///
/// ```toml
/// output = "buffer"
/// prevent_orphans = true
/// page_size = "A4"
/// page_margins = [40, 60, 40, 60]
///
/// [info]
/// title = "Handbook"
///
/// [styles.head1]
/// fontSize = 28
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub output: OutputMode,
    pub info: Option<DocumentInfo>,
    pub page_margins: Option<Margin>,
    pub page_orientation: Option<PageOrientation>,
    pub page_size: Option<PageSize>,
    pub user_password: Option<String>,
    pub owner_password: Option<String>,
    pub permissions: Option<Permissions>,
    /// PDF version, e.g. `"1.7"`
    pub version: Option<String>,
    pub watermark: Option<Watermark>,
    /// Overlaid on the built-in default font
    pub default_style: Option<Style>,
    /// Overlaid on the built-in style table
    pub styles: StyleDictionary,
    /// Break pages before level-1 headings left alone at a page bottom
    pub prevent_orphans: bool,
    #[serde(skip)]
    pub transform_urls: UrlTransform,
    /// Required when the document contains images
    #[serde(skip)]
    pub image_resolver: Option<Arc<dyn ImageResolver>>,
}

impl PdfOptions {
    /// Parse options from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn with_transform_urls(mut self, transform: UrlTransform) -> Self {
        self.transform_urls = transform;
        self
    }

    pub fn with_image_resolver(mut self, resolver: Arc<dyn ImageResolver>) -> Self {
        self.image_resolver = Some(resolver);
        self
    }
}

/// What the layout engine knows about a node when deciding page breaks
pub trait LayoutNode {
    fn headline_level(&self) -> Option<u8>;
}

impl LayoutNode for Content {
    fn headline_level(&self) -> Option<u8> {
        Content::headline_level(self)
    }
}

/// Page-break predicate installed when orphan prevention is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageBreakBefore;

impl PageBreakBefore {
    /// Break before a level-1 heading that would end its page
    pub fn should_break<N: LayoutNode>(&self, current: &N, following_nodes_on_page: &[N]) -> bool {
        current.headline_level() == Some(1) && following_nodes_on_page.is_empty()
    }
}

/// The complete input of the render step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<DocumentInfo>,
    /// Not serializable; renderers call it directly
    #[serde(skip)]
    pub page_break_before: Option<PageBreakBefore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_margins: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_orientation: Option<PageOrientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Watermark>,
    pub content: Vec<Content>,
    pub images: ImageDataMap,
    pub default_style: Style,
    pub styles: StyleDictionary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentText;

    #[test]
    fn test_options_from_toml() {
        let toml = r##"
output = "blob"
prevent_orphans = true
page_size = "A4"
page_orientation = "landscape"
page_margins = [40, 60]
version = "1.7"
watermark = "DRAFT"

[info]
title = "Handbook"
author = "Docs Team"

[permissions]
printing = "highResolution"
copying = false

[default_style]
fontSize = 11

[styles.head1]
fontSize = 28
color = "#333333"
"##;

        let options = PdfOptions::from_toml_str(toml).unwrap();
        assert_eq!(options.output, OutputMode::Blob);
        assert!(options.prevent_orphans);
        assert_eq!(options.page_size, Some(PageSize::Named("A4".into())));
        assert_eq!(options.page_orientation, Some(PageOrientation::Landscape));
        assert_eq!(options.page_margins, Some(Margin::Symmetric([40.0, 60.0])));
        assert_eq!(options.watermark, Some(Watermark::Text("DRAFT".into())));
        assert_eq!(options.info.unwrap().title.as_deref(), Some("Handbook"));
        let permissions = options.permissions.unwrap();
        assert_eq!(permissions.printing, Some(PrintPermission::HighResolution));
        assert_eq!(permissions.copying, Some(false));
        assert_eq!(options.default_style.unwrap().font_size, Some(11.0));
        assert_eq!(options.styles["head1"].font_size, Some(28.0));
        assert_eq!(options.styles["head1"].color.as_deref(), Some("#333333"));
    }

    #[test]
    fn test_default_options() {
        let options = PdfOptions::default();
        assert_eq!(options.output, OutputMode::Buffer);
        assert!(!options.prevent_orphans);
        assert!(options.styles.is_empty());
        assert!(options.image_resolver.is_none());
    }

    #[test]
    fn test_styled_watermark_from_toml() {
        let toml = r#"
[watermark]
text = "CONFIDENTIAL"
opacity = 0.2
fontSize = 60
"#;
        let options = PdfOptions::from_toml_str(toml).unwrap();
        match options.watermark {
            Some(Watermark::Styled(spec)) => {
                assert_eq!(spec.text, "CONFIDENTIAL");
                assert_eq!(spec.opacity, Some(0.2));
                assert_eq!(spec.font_size, Some(60.0));
            }
            other => panic!("Expected styled watermark, got {:?}", other),
        }
    }

    #[test]
    fn test_page_break_before_lone_title() {
        let mut title = ContentText::plain("Title");
        title.headline_level = Some(1);
        let title = Content::Text(title);
        let body = Content::Text(ContentText::plain("body"));

        let predicate = PageBreakBefore;
        assert!(predicate.should_break(&title, &[]));
        assert!(!predicate.should_break(&title, std::slice::from_ref(&body)));
        assert!(!predicate.should_break(&body, &[]));
    }
}
