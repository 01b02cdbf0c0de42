//! qrgen - QR code generation with PNG and SVG output
//!
//! This library validates generation parameters, encodes a payload into a QR
//! symbol, renders it with one of four strategies, and persists the result
//! with the file extension reconciled against the output format.
//!
//! # Example
//!
//! ```rust
//! use qrgen::{generate, Artifact};
//!
//! let artifact = generate("https://example.com").unwrap();
//! assert!(matches!(artifact, Artifact::Raster(_)));
//! ```

pub mod config;
pub mod encoder;
pub mod output;
pub mod render;
pub mod style;

pub use config::{ConfigError, ErrorLevel, GenerationConfig};
pub use encoder::EncodeError;
pub use output::{save, OutputFormat, SaveError};
pub use render::{render, Artifact, Backends, RenderError, RenderStrategy};
pub use style::{ColorScheme, StyleError};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during the generate-and-save pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error while rendering the symbol
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Error while persisting the artifact
    #[error("save failed: {0}")]
    Save(#[from] SaveError),
}

/// Configuration for a complete generation request
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Validated generation parameters
    pub config: GenerationConfig,
    /// Rendering strategy
    pub strategy: RenderStrategy,
    /// Backend capability flags, resolved once at process start
    pub backends: Backends,
    /// Foreground/background colors
    pub colors: ColorScheme,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
            strategy: RenderStrategy::Raster,
            backends: Backends::detect(),
            colors: ColorScheme::default(),
        }
    }
}

impl GenerateOptions {
    /// Create a new request configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation parameters
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the rendering strategy
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the backend capability flags
    pub fn with_backends(mut self, backends: Backends) -> Self {
        self.backends = backends;
        self
    }

    /// Set the color scheme
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }
}

/// Generate an artifact with default options (raster, M, 10px modules,
/// 4-module quiet zone, black on white)
///
/// # Example
///
/// ```rust
/// let artifact = qrgen::generate("hello").unwrap();
/// assert_eq!(artifact.format(), qrgen::OutputFormat::Png);
/// ```
pub fn generate(payload: &str) -> Result<Artifact, RenderError> {
    generate_with_options(payload, &GenerateOptions::default())
}

/// Generate an in-memory artifact with custom options
///
/// # Example
///
/// ```rust
/// use qrgen::{generate_with_options, GenerateOptions, RenderStrategy};
///
/// let options = GenerateOptions::new().with_strategy(RenderStrategy::VectorPath);
/// let artifact = generate_with_options("hello", &options).unwrap();
/// assert_eq!(artifact.format(), qrgen::OutputFormat::Svg);
/// ```
pub fn generate_with_options(
    payload: &str,
    options: &GenerateOptions,
) -> Result<Artifact, RenderError> {
    render(
        payload,
        &options.config,
        options.strategy,
        &options.backends,
        &options.colors,
    )
}

/// Run the full pipeline: render the payload, reconcile the requested path
/// against the artifact's format, and persist
///
/// Returns the resolved path, which may differ from the requested one.
pub fn generate_to_file(
    payload: &str,
    options: &GenerateOptions,
    requested: &Path,
) -> Result<PathBuf, GenerateError> {
    let artifact = generate_with_options(payload, options)?;
    Ok(save(artifact, requested)?)
}
