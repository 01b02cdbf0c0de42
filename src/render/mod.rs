//! Rendering strategy dispatch
//!
//! Given a validated configuration and a payload, pick one of the four
//! rendering strategies, obtain a module matrix from the symbol encoder, and
//! produce an in-memory [`Artifact`]. No disk access happens here.

mod raster;
mod svg;

use std::fmt;

use image::RgbImage;
use thiserror::Error;

use crate::config::GenerationConfig;
use crate::encoder::{self, EncodeError};
use crate::output::OutputFormat;
use crate::style::ColorScheme;

/// How a module matrix is turned into an output representation
///
/// The set is closed and dispatch is a single `match`; there is no
/// open-ended strategy registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Fixed pixel grid, persisted as PNG
    Raster,
    /// Self-contained SVG document, one rect per dark module
    VectorBasic,
    /// SVG without the XML declaration, for embedding in other documents
    VectorFragment,
    /// Self-contained SVG with one contiguous path for all dark modules.
    /// Preferred vector strategy: per-rect output shows hairline seams
    /// between adjacent modules at high zoom, a single path does not.
    VectorPath,
}

impl RenderStrategy {
    /// The persisted format this strategy's artifacts use
    pub fn format(&self) -> OutputFormat {
        match self {
            RenderStrategy::Raster => OutputFormat::Png,
            RenderStrategy::VectorBasic
            | RenderStrategy::VectorFragment
            | RenderStrategy::VectorPath => OutputFormat::Svg,
        }
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RenderStrategy::Raster => "raster",
            RenderStrategy::VectorBasic => "vector (basic)",
            RenderStrategy::VectorFragment => "vector (fragment)",
            RenderStrategy::VectorPath => "vector (path)",
        };
        f.write_str(s)
    }
}

/// Which rendering backends this process has available
///
/// Resolved once at startup and passed explicitly into [`render`] rather
/// than read from ambient state, so unavailable-backend failures can be
/// exercised in tests by constructing the flags directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backends {
    /// Pixel-grid (PNG) rendering available
    pub raster: bool,
    /// SVG rendering available
    pub vector: bool,
}

impl Backends {
    /// Capabilities compiled into this build; both backends are
    /// unconditional here, hosts that strip one construct the flags manually
    pub fn detect() -> Self {
        Self {
            raster: true,
            vector: true,
        }
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::detect()
    }
}

/// One generated symbol, ready to persist
///
/// Consumed exactly once by [`crate::output::save`]; artifacts are not
/// reused across saves.
#[derive(Debug, Clone)]
pub enum Artifact {
    /// Decoded pixel grid
    Raster(RgbImage),
    /// Serialized SVG markup
    Vector(String),
}

impl Artifact {
    /// The on-disk format this artifact persists as
    pub fn format(&self) -> OutputFormat {
        match self {
            Artifact::Raster(_) => OutputFormat::Png,
            Artifact::Vector(_) => OutputFormat::Svg,
        }
    }
}

/// Errors from the render stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("no rendering backend available for {0} output")]
    BackendUnavailable(RenderStrategy),
}

/// Render a payload into an in-memory artifact
///
/// The empty-payload guard lives here as well as in the adapters, since the
/// library entry point is reachable directly. Backend availability is
/// checked before any encoding work.
pub fn render(
    payload: &str,
    config: &GenerationConfig,
    strategy: RenderStrategy,
    backends: &Backends,
    colors: &ColorScheme,
) -> Result<Artifact, RenderError> {
    if payload.is_empty() {
        return Err(RenderError::EmptyPayload);
    }

    let available = match strategy.format() {
        OutputFormat::Png => backends.raster,
        OutputFormat::Svg => backends.vector,
    };
    if !available {
        return Err(RenderError::BackendUnavailable(strategy));
    }

    let matrix = encoder::encode(payload, config.error_level())?;

    let artifact = match strategy {
        RenderStrategy::Raster => Artifact::Raster(raster::draw(&matrix, config, colors)),
        RenderStrategy::VectorBasic => {
            Artifact::Vector(svg::draw_basic(&matrix, config, colors, true))
        }
        RenderStrategy::VectorFragment => {
            Artifact::Vector(svg::draw_basic(&matrix, config, colors, false))
        }
        RenderStrategy::VectorPath => Artifact::Vector(svg::draw_path(&matrix, config, colors)),
    };

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig::default()
    }

    #[test]
    fn test_empty_payload_rejected() {
        let result = render(
            "",
            &config(),
            RenderStrategy::Raster,
            &Backends::detect(),
            &ColorScheme::default(),
        );
        assert_eq!(result.unwrap_err(), RenderError::EmptyPayload);
    }

    #[test]
    fn test_empty_payload_rejected_for_every_strategy() {
        for strategy in [
            RenderStrategy::Raster,
            RenderStrategy::VectorBasic,
            RenderStrategy::VectorFragment,
            RenderStrategy::VectorPath,
        ] {
            let result = render(
                "",
                &config(),
                strategy,
                &Backends::detect(),
                &ColorScheme::default(),
            );
            assert_eq!(result.unwrap_err(), RenderError::EmptyPayload);
        }
    }

    #[test]
    fn test_missing_raster_backend() {
        let backends = Backends {
            raster: false,
            vector: true,
        };
        let result = render(
            "data",
            &config(),
            RenderStrategy::Raster,
            &backends,
            &ColorScheme::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            RenderError::BackendUnavailable(RenderStrategy::Raster)
        );
    }

    #[test]
    fn test_missing_vector_backend_covers_all_svg_strategies() {
        let backends = Backends {
            raster: true,
            vector: false,
        };
        for strategy in [
            RenderStrategy::VectorBasic,
            RenderStrategy::VectorFragment,
            RenderStrategy::VectorPath,
        ] {
            let result = render("data", &config(), strategy, &backends, &ColorScheme::default());
            assert_eq!(result.unwrap_err(), RenderError::BackendUnavailable(strategy));
        }
    }

    #[test]
    fn test_strategy_format_family() {
        assert_eq!(RenderStrategy::Raster.format(), OutputFormat::Png);
        assert_eq!(RenderStrategy::VectorBasic.format(), OutputFormat::Svg);
        assert_eq!(RenderStrategy::VectorFragment.format(), OutputFormat::Svg);
        assert_eq!(RenderStrategy::VectorPath.format(), OutputFormat::Svg);
    }

    #[test]
    fn test_raster_rendering_is_deterministic() {
        let run = || {
            render(
                "https://example.com",
                &config(),
                RenderStrategy::Raster,
                &Backends::detect(),
                &ColorScheme::default(),
            )
            .unwrap()
        };
        match (run(), run()) {
            (Artifact::Raster(a), Artifact::Raster(b)) => {
                assert_eq!(a.as_raw(), b.as_raw());
                assert_eq!(a.dimensions(), b.dimensions());
            }
            _ => panic!("expected raster artifacts"),
        }
    }

    #[test]
    fn test_oversize_payload_surfaces_encoder_error() {
        let payload = "x".repeat(3000);
        let result = render(
            &payload,
            &config(),
            RenderStrategy::VectorPath,
            &Backends::detect(),
            &ColorScheme::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            RenderError::Encode(EncodeError::PayloadTooLarge(_))
        ));
    }
}
