//! Conversion context threaded through the tree walk
//!
//! A [`Context`] is passed down by reference and never mutated. Nodes that
//! introduce inline formatting derive a child context with an extended
//! [`Decoration`]; siblings never see each other's decoration. The slug
//! generator is the one shared, mutable piece and lives for a single
//! conversion.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use mdpdf_ast::Link;

use crate::slug::Slugger;
use crate::style::{Alignment, Style, StyleDictionary};

/// Image URL → resolved image data reference (data URL, file path, ...)
pub type ImageDataMap = BTreeMap<String, String>;

/// Inline formatting accumulated while descending into inline nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoration {
    pub strong: bool,
    pub emphasis: bool,
    pub delete: bool,
    /// Active hyperlink target
    pub link: Option<String>,
    /// Alignment of the enclosing table column
    pub align: Option<Alignment>,
}

impl Decoration {
    pub fn with_strong(&self) -> Self {
        Self {
            strong: true,
            ..self.clone()
        }
    }

    pub fn with_emphasis(&self) -> Self {
        Self {
            emphasis: true,
            ..self.clone()
        }
    }

    pub fn with_delete(&self) -> Self {
        Self {
            delete: true,
            ..self.clone()
        }
    }

    pub fn with_link(&self, url: String) -> Self {
        Self {
            link: Some(url),
            ..self.clone()
        }
    }

    pub fn with_align(&self, align: Option<Alignment>) -> Self {
        Self {
            align,
            ..self.clone()
        }
    }
}

type UrlTransformFn = dyn Fn(&str, &Link) -> String + Send + Sync;

/// Hook rewriting link URLs before they become hyperlink targets.
///
/// Receives the raw URL and the link node; the default returns the URL
/// unchanged.
#[derive(Clone)]
pub struct UrlTransform(Arc<UrlTransformFn>);

impl UrlTransform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Link) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn identity() -> Self {
        Self::new(|url, _| url.to_string())
    }

    pub fn apply(&self, url: &str, link: &Link) -> String {
        (self.0)(url, link)
    }
}

impl Default for UrlTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for UrlTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UrlTransform")
    }
}

/// Per-path conversion state
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub deco: Decoration,
    pub images: &'a ImageDataMap,
    pub styles: &'a StyleDictionary,
    pub slugs: &'a RefCell<Slugger>,
    pub transform_urls: &'a UrlTransform,
    pub prevent_orphans: bool,
}

impl<'a> Context<'a> {
    /// Root context with an empty decoration
    pub fn new(
        images: &'a ImageDataMap,
        styles: &'a StyleDictionary,
        slugs: &'a RefCell<Slugger>,
        transform_urls: &'a UrlTransform,
        prevent_orphans: bool,
    ) -> Self {
        Self {
            deco: Decoration::default(),
            images,
            styles,
            slugs,
            transform_urls,
            prevent_orphans,
        }
    }

    /// Child context carrying `deco`; everything else is shared
    pub fn with_deco(&self, deco: Decoration) -> Self {
        Self {
            deco,
            ..self.clone()
        }
    }

    /// Look up a resolved style by name
    pub fn style(&self, name: &str) -> Option<&'a Style> {
        self.styles.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::base_styles;

    #[test]
    fn test_decoration_extension_leaves_parent_untouched() {
        let parent = Decoration::default().with_strong();
        let child = parent.with_link("https://example.com".into());

        assert!(child.strong);
        assert_eq!(child.link.as_deref(), Some("https://example.com"));
        assert!(parent.link.is_none());
    }

    #[test]
    fn test_with_deco_shares_everything_else() {
        let images = ImageDataMap::new();
        let styles = base_styles();
        let slugs = RefCell::new(Slugger::new());
        let transform = UrlTransform::default();
        let root = Context::new(&images, &styles, &slugs, &transform, true);

        let child = root.with_deco(root.deco.with_emphasis());
        assert!(child.deco.emphasis);
        assert!(!root.deco.emphasis);
        assert!(child.prevent_orphans);
        assert!(std::ptr::eq(child.styles, root.styles));
        assert!(child.style("p").is_some());
    }

    #[test]
    fn test_url_transform() {
        let link = Link {
            url: "/docs".into(),
            title: None,
            children: vec![],
        };
        assert_eq!(UrlTransform::default().apply("/docs", &link), "/docs");

        let absolute = UrlTransform::new(|url, _| format!("https://example.com{}", url));
        assert_eq!(absolute.apply("/docs", &link), "https://example.com/docs");
    }
}
