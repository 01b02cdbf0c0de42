//! Output path resolution and persistence
//!
//! Reconciles the requested path's extension against the artifact's format,
//! creates the destination directory, and writes the bytes. The returned
//! path may differ from the requested one. Saving is idempotent: re-running
//! with identical inputs overwrites the prior file with identical bytes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::render::Artifact;

/// Persisted artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Canonical file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Errors from the save stage
#[derive(Error, Debug)]
pub enum SaveError {
    /// Vector output gets no default extension; the caller must say `.svg`
    #[error("output path '{0}' needs an explicit .svg extension for vector output")]
    MissingExtension(PathBuf),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Reconcile a requested path's extension with the declared format
///
/// Case-insensitive: `out.PNG` already matches PNG. A wrong extension is
/// replaced (`out.jpg` + PNG resolves to `out.png`). A missing extension is
/// defaulted for PNG but is an error for SVG.
pub fn resolve_path(requested: &Path, format: OutputFormat) -> Result<PathBuf, SaveError> {
    let current = requested
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if current.as_deref() == Some(format.extension()) {
        return Ok(requested.to_path_buf());
    }

    if current.is_none() && format == OutputFormat::Svg {
        return Err(SaveError::MissingExtension(requested.to_path_buf()));
    }

    Ok(requested.with_extension(format.extension()))
}

/// Persist an artifact, returning the resolved path
///
/// Consumes the artifact; intermediate directories are created as needed.
pub fn save(artifact: Artifact, requested: &Path) -> Result<PathBuf, SaveError> {
    let resolved = resolve_path(requested, artifact.format())?;

    if let Some(parent) = resolved.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match artifact {
        Artifact::Raster(img) => img.save_with_format(&resolved, ImageFormat::Png)?,
        Artifact::Vector(markup) => fs::write(&resolved, markup.as_bytes())?,
    }

    Ok(resolved)
}
