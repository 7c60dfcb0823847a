//! Image resolution hook
//!
//! Images are referenced by URL in the markdown tree. Before conversion an
//! [`ImageResolver`] maps every URL to image data the layout engine can
//! load (a data URL, a path, ...); the result becomes the document's images
//! map. How the data is produced is up to the resolver.

use std::fmt;

use mdpdf_ast::{Node, Root};

use crate::context::ImageDataMap;
use crate::error::{PdfError, Result};

/// Maps an image URL to resolved image data
pub trait ImageResolver: fmt::Debug + Send + Sync {
    fn resolve(&self, url: &str) -> Result<String>;
}

/// Resolver backed by a fixed URL → data table
#[derive(Debug, Clone, Default)]
pub struct MapImageResolver {
    images: ImageDataMap,
}

impl MapImageResolver {
    pub fn new(images: ImageDataMap) -> Self {
        Self { images }
    }
}

impl ImageResolver for MapImageResolver {
    fn resolve(&self, url: &str) -> Result<String> {
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| PdfError::ImageNotFound(url.to_string()))
    }
}

/// Every image URL in the tree, in document order, without duplicates
pub fn collect_image_urls(nodes: &[Node]) -> Vec<String> {
    let mut urls = Vec::new();
    collect_recursive(nodes, &mut urls);
    urls
}

fn collect_recursive(nodes: &[Node], urls: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Image(image) => {
                if !urls.contains(&image.url) {
                    urls.push(image.url.clone());
                }
            }
            Node::Table(table) => {
                for cell in table.children.iter().flat_map(|row| &row.children) {
                    collect_recursive(&cell.children, urls);
                }
            }
            Node::TableRow(row) => {
                for cell in &row.children {
                    collect_recursive(&cell.children, urls);
                }
            }
            _ => {
                if let Some(children) = node.children() {
                    collect_recursive(children, urls);
                }
            }
        }
    }
}

/// Resolve every image of `root` into an images map.
///
/// Fails on the first URL the resolver cannot handle.
pub fn resolve_images(root: &Root, resolver: &dyn ImageResolver) -> Result<ImageDataMap> {
    let mut images = ImageDataMap::new();
    for url in collect_image_urls(&root.children) {
        let data = resolver.resolve(&url)?;
        log::debug!("Resolved image {}", url);
        images.insert(url, data);
    }
    Ok(images)
}
