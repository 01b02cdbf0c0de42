//! Generation parameter validation
//!
//! All generation parameters pass through [`GenerationConfig`] before any
//! encoding work starts. A config can only be obtained through validation,
//! so the rest of the pipeline never re-checks ranges.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// QR error-correction level, trading data capacity for damage resilience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLevel {
    /// ~7% of codewords recoverable
    L,
    /// ~15% of codewords recoverable
    M,
    /// ~25% of codewords recoverable
    Q,
    /// ~30% of codewords recoverable
    H,
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorLevel::L => "L",
            ErrorLevel::M => "M",
            ErrorLevel::Q => "Q",
            ErrorLevel::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for ErrorLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(ErrorLevel::L),
            "M" | "m" => Ok(ErrorLevel::M),
            "Q" | "q" => Ok(ErrorLevel::Q),
            "H" | "h" => Ok(ErrorLevel::H),
            other => Err(ConfigError::InvalidErrorLevel(other.to_string())),
        }
    }
}

/// Errors from generation parameter validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("error level must be one of L, M, Q, H (got '{0}')")]
    InvalidErrorLevel(String),

    #[error("module size must be at least 1 (got {0})")]
    InvalidModuleSize(i64),

    #[error("quiet zone must be non-negative (got {0})")]
    InvalidQuietZone(i64),
}

/// Validated generation parameters
///
/// Immutable once constructed; fields are private so a value in hand is
/// always within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    error_level: ErrorLevel,
    module_size: u32,
    quiet_zone: u32,
}

impl GenerationConfig {
    /// Validate typed parameters
    ///
    /// `module_size` and `quiet_zone` are taken as signed integers so that
    /// out-of-range CLI input is representable and rejected with the
    /// field-specific error rather than a parse failure.
    pub fn new(
        error_level: ErrorLevel,
        module_size: i64,
        quiet_zone: i64,
    ) -> Result<Self, ConfigError> {
        let module_size = u32::try_from(module_size)
            .ok()
            .filter(|&v| v >= 1)
            .ok_or(ConfigError::InvalidModuleSize(module_size))?;
        let quiet_zone = u32::try_from(quiet_zone)
            .ok()
            .ok_or(ConfigError::InvalidQuietZone(quiet_zone))?;

        Ok(Self {
            error_level,
            module_size,
            quiet_zone,
        })
    }

    /// Validate parameters with the error level still in string form
    pub fn validate(
        error_level: &str,
        module_size: i64,
        quiet_zone: i64,
    ) -> Result<Self, ConfigError> {
        Self::new(error_level.parse()?, module_size, quiet_zone)
    }

    /// Error-correction level
    pub fn error_level(&self) -> ErrorLevel {
        self.error_level
    }

    /// Pixels (or SVG units) per module
    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    /// Quiet-zone border width, in modules
    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            error_level: ErrorLevel::M,
            module_size: 10,
            quiet_zone: 4,
        }
    }
}
