//! Render step
//!
//! A [`Renderer`] turns a finished [`DocumentDefinition`] into bytes. The
//! actual PDF layout engine lives outside this crate; [`JsonRenderer`]
//! emits the definition in the engine's JSON input format.

use crate::document::{DocumentDefinition, OutputMode};
use crate::error::Result;

/// Turns a document definition into output bytes
pub trait Renderer {
    /// MIME type of the produced bytes
    fn mime_type(&self) -> &'static str;

    fn render(&self, def: &DocumentDefinition) -> Result<Vec<u8>>;
}

/// Renderer writing the document definition as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, def: &DocumentDefinition) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(def)?
        } else {
            serde_json::to_vec(def)?
        };
        Ok(bytes)
    }
}

/// Bytes tagged with their MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Result of the render step, shaped by [`OutputMode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    Buffer(Vec<u8>),
    Blob(Blob),
}

impl RenderOutput {
    /// Wrap rendered bytes according to `mode`
    pub fn new(mode: OutputMode, mime_type: &str, data: Vec<u8>) -> Self {
        match mode {
            OutputMode::Buffer => RenderOutput::Buffer(data),
            OutputMode::Blob => RenderOutput::Blob(Blob {
                mime_type: mime_type.to_string(),
                data,
            }),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            RenderOutput::Buffer(data) => data,
            RenderOutput::Blob(blob) => &blob.data,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderOutput::Buffer(data) => data,
            RenderOutput::Blob(blob) => blob.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_modes() {
        let buffer = RenderOutput::new(OutputMode::Buffer, "application/json", b"{}".to_vec());
        assert_eq!(buffer, RenderOutput::Buffer(b"{}".to_vec()));

        let blob = RenderOutput::new(OutputMode::Blob, "application/json", b"{}".to_vec());
        match &blob {
            RenderOutput::Blob(blob) => assert_eq!(blob.mime_type, "application/json"),
            other => panic!("Expected blob, got {:?}", other),
        }
        assert_eq!(blob.bytes(), b"{}");
        assert_eq!(blob.into_bytes(), b"{}".to_vec());
    }
}
