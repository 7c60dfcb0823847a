//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::info;

use mdpdf_ast::Root;
use mdpdf_core::document::OutputMode;
use mdpdf_core::{
    base_styles, render_pdf, resolve, ImageDataMap, JsonRenderer, MapImageResolver, PdfOptions,
    RenderOutput,
};

/// Name of the configuration file looked up next to the input
pub const CONFIG_FILE: &str = "mdpdf.toml";

/// Output mode of the render step
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputModeArg {
    /// Raw bytes
    Buffer,
    /// Bytes tagged with their MIME type
    Blob,
}

impl From<OutputModeArg> for OutputMode {
    fn from(arg: OutputModeArg) -> Self {
        match arg {
            OutputModeArg::Buffer => OutputMode::Buffer,
            OutputModeArg::Blob => OutputMode::Blob,
        }
    }
}

/// Contents of `mdpdf.toml`
///
/// ```toml
/// prevent_orphans = true
/// page_size = "A4"
///
/// [styles.head1]
/// fontSize = 28
///
/// [images]
/// "diagram.png" = "data:image/png;base64,..."
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Conversion options
    #[serde(flatten)]
    pub options: PdfOptions,
    /// Resolved image data, keyed by the URL used in the markdown
    pub images: ImageDataMap,
}

impl CliConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Options with the `[images]` table installed as image resolver
    pub fn into_options(self) -> PdfOptions {
        if self.images.is_empty() {
            return self.options;
        }
        self.options
            .with_image_resolver(Arc::new(MapImageResolver::new(self.images)))
    }
}

#[derive(Parser)]
#[command(name = "mdpdf")]
#[command(author, version, about = "Markdown trees to PDF document definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an mdast JSON document
    Render {
        /// Input mdast JSON file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to mdpdf.toml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output mode, overriding the configuration
        #[arg(long, value_enum)]
        mode: Option<OutputModeArg>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the resolved style table as JSON
    Styles {
        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            mode,
            pretty,
        } => {
            render_command(&input, output.as_deref(), config.as_deref(), mode, pretty).await?;
        }
        Commands::Styles { config } => {
            let json = styles_command(config.as_deref())?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Load configuration from `path`, or from `mdpdf.toml` next to `input`
/// when no path is given. A missing default file yields defaults.
pub fn load_config(path: Option<&Path>, input: Option<&Path>) -> Result<CliConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default_path = input
                .and_then(Path::parent)
                .unwrap_or(Path::new("."))
                .join(CONFIG_FILE);
            if !default_path.exists() {
                return Ok(CliConfig::default());
            }
            default_path
        }
    };

    info!("Loading config: {}", config_path.display());
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    CliConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))
}

/// Execute the render command
pub async fn render_command(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    mode: Option<OutputModeArg>,
    pretty: bool,
) -> Result<()> {
    // Check input file exists
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    // Step 1: Read the mdast produced by the markdown parser
    info!("Reading: {}", input.display());
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let root: Root = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse mdast JSON: {}", input.display()))?;
    info!("{} top-level nodes parsed", root.len());

    // Step 2: Load options
    let mut options = load_config(config, Some(input))?.into_options();
    if let Some(mode) = mode {
        options.output = mode.into();
    }

    // Step 3: Convert and render
    let renderer = if pretty {
        JsonRenderer::pretty()
    } else {
        JsonRenderer::new()
    };
    let rendered = render_pdf(&root, &options, &renderer)
        .await
        .context("Failed to render document")?;

    // Step 4: Write output
    let mime_type = match &rendered {
        RenderOutput::Blob(blob) => Some(blob.mime_type.clone()),
        RenderOutput::Buffer(_) => None,
    };
    let bytes = rendered.into_bytes();

    match output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Render complete!");
            println!("  Output: {}", path.display());
            println!("  Size: {} bytes", bytes.len());
            if let Some(mime_type) = mime_type {
                println!("  Type: {}", mime_type);
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.write_all(b"\n"))
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Execute the styles command, returning the resolved table as JSON
pub fn styles_command(config: Option<&Path>) -> Result<String> {
    let config = load_config(config, None)?;
    let styles = resolve(&base_styles(), Some(&config.options.styles));
    serde_json::to_string_pretty(&styles).context("Failed to serialize styles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_images() {
        let toml = r#"
prevent_orphans = true

[styles.p]
lineHeight = 1.4

[images]
"chart.png" = "data:image/png;base64,AAAA"
"#;

        let config = CliConfig::from_toml_str(toml).unwrap();
        assert!(config.options.prevent_orphans);
        assert_eq!(config.options.styles["p"].line_height, Some(1.4));
        assert_eq!(config.images.len(), 1);

        let options = config.into_options();
        assert!(options.image_resolver.is_some());
    }

    #[test]
    fn test_empty_config() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert!(config.images.is_empty());
        assert!(config.into_options().image_resolver.is_none());
    }

    #[test]
    fn test_output_mode_arg() {
        assert_eq!(OutputMode::from(OutputModeArg::Blob), OutputMode::Blob);
        assert_eq!(OutputMode::from(OutputModeArg::Buffer), OutputMode::Buffer);
    }
}
