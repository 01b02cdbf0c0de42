//! Output color scheme
//!
//! Foreground/background colors for the rendered symbol, loadable from a
//! small TOML file. The default is plain black-on-white, which is what
//! scanners expect; a custom scheme mostly makes sense for branded codes at
//! generous error-correction levels.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading or parsing a color scheme file
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("failed to read color scheme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse color scheme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An RGB color parsed from `#rgb` or `#rrggbb` notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color([u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    /// Raw RGB channels
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Lowercase `#rrggbb` form for SVG attributes
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", s))?;

        let channel = |hi: u8, lo: u8| -> Result<u8, String> {
            let pair = [hi, lo];
            let pair = std::str::from_utf8(&pair).map_err(|_| bad(s))?;
            u8::from_str_radix(pair, 16).map_err(|_| bad(s))
        };

        let bytes = digits.as_bytes();
        match bytes.len() {
            // #rgb expands each digit, CSS style
            3 => Ok(Color([
                channel(bytes[0], bytes[0])?,
                channel(bytes[1], bytes[1])?,
                channel(bytes[2], bytes[2])?,
            ])),
            6 => Ok(Color([
                channel(bytes[0], bytes[1])?,
                channel(bytes[2], bytes[3])?,
                channel(bytes[4], bytes[5])?,
            ])),
            _ => Err(bad(s)),
        }
    }
}

fn bad(s: &str) -> String {
    format!("color '{}' is not a valid #rgb or #rrggbb value", s)
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Foreground/background colors for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Module (foreground) color
    pub dark: Color,
    /// Background color
    pub light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            dark: Color::BLACK,
            light: Color::WHITE,
        }
    }
}

impl ColorScheme {
    /// Load a scheme from a TOML file
    ///
    /// Both keys are optional; omitted ones keep their defaults:
    ///
    /// ```toml
    /// dark = "#1a1a2e"
    /// light = "#f5f5f5"
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a scheme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(content)?)
    }
}
