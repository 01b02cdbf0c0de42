//! Symbol encoding via the `qrcode` crate
//!
//! The encoder is the external collaborator that does the actual ISO/IEC
//! 18004 work: data-mode selection, error-correction codewords, module
//! placement and masking. This module wraps it behind a [`ModuleMatrix`] so
//! the renderers only ever see a grid of dark/light cells.

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::config::ErrorLevel;

/// Errors reported by the symbol encoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No supported symbol version fits the payload at this error level
    #[error("payload too large for any symbol version at error level {0}")]
    PayloadTooLarge(ErrorLevel),

    /// The encoder rejected the payload for a reason other than size
    #[error("payload cannot be encoded: {0}")]
    Unsupported(String),
}

/// The logical module grid of one encoded symbol
///
/// Row-major dark/light cells, `width` modules per side, without the quiet
/// zone (the renderers add that themselves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Side length in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (x, y) is dark; out-of-range coordinates are
    /// light, so callers can scan across the quiet zone without bounds checks
    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.width as i64 {
            return false;
        }
        self.modules[y as usize * self.width + x as usize]
    }

    /// Number of dark modules in the symbol
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

/// Encode a payload into a module matrix
///
/// Version selection is automatic ("fit" semantics): the smallest symbol
/// version that accommodates the payload at `level` is chosen, growing up to
/// version 40 before giving up with [`EncodeError::PayloadTooLarge`].
pub fn encode(payload: &str, level: ErrorLevel) -> Result<ModuleMatrix, EncodeError> {
    let code =
        QrCode::with_error_correction_level(payload.as_bytes(), ec_level(level)).map_err(|e| {
            match e {
                QrError::DataTooLong => EncodeError::PayloadTooLarge(level),
                other => EncodeError::Unsupported(other.to_string()),
            }
        })?;

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    Ok(ModuleMatrix { width, modules })
}

fn ec_level(level: ErrorLevel) -> EcLevel {
    match level {
        ErrorLevel::L => EcLevel::L,
        ErrorLevel::M => EcLevel::M,
        ErrorLevel::Q => EcLevel::Q,
        ErrorLevel::H => EcLevel::H,
    }
}
