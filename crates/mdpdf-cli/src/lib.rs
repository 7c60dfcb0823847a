//! mdpdf CLI - Command-line interface library
//!
//! This library provides the CLI functionality for mdpdf:
//! - Render: Convert an mdast JSON document into a document definition
//! - Styles: Print the resolved style table
//!
//! # Library Usage
//!
//! ```ignore
//! use mdpdf_cli::{render_command, OutputModeArg};
//!
//! render_command(&input, Some(&output), None, None, false).await?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render markdown (parsed to mdast JSON upstream)
//! mdpdf render document.json --output document.pdf.json
//!
//! # Show the style table after applying mdpdf.toml
//! mdpdf styles --config mdpdf.toml
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{load_config, render_command, styles_command, CliConfig};
pub use app::{run_cli, OutputModeArg};
