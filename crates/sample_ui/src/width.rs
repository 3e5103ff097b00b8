//! Canonical card width values.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors raised when building a [`CardWidth`] from untrusted input.
pub enum WidthError {
    /// Blank strings carry no sizing information.
    #[error("card width must not be empty")]
    Empty,
    /// Pixel widths cannot be negative.
    #[error("card width must not be negative (got {0})")]
    Negative(f64),
    /// NaN and infinities have no CSS length.
    #[error("card width must be finite")]
    NotFinite,
}

/// A card width stored as a single CSS length string.
///
/// Numbers are pixel counts and gain a `px` suffix (`400` becomes `400px`).
/// Strings already carry their unit and are kept verbatim apart from
/// surrounding whitespace (`"50%"`, `"20rem"`, `"calc(100% - 2rem)"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWidth", into = "String")]
pub struct CardWidth(String);

impl CardWidth {
    /// Whole-pixel width.
    pub fn px(pixels: u32) -> Self {
        Self(format!("{pixels}px"))
    }

    /// Validates a runtime CSS length string.
    ///
    /// # Errors
    ///
    /// Returns [`WidthError::Empty`] when `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, WidthError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WidthError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    /// Canonical CSS length.
    pub fn as_css(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for CardWidth {
    fn from(pixels: u32) -> Self {
        Self::px(pixels)
    }
}

impl From<u16> for CardWidth {
    fn from(pixels: u16) -> Self {
        Self::px(u32::from(pixels))
    }
}

impl TryFrom<f64> for CardWidth {
    type Error = WidthError;

    fn try_from(pixels: f64) -> Result<Self, Self::Error> {
        if !pixels.is_finite() {
            return Err(WidthError::NotFinite);
        }
        if pixels < 0.0 {
            return Err(WidthError::Negative(pixels));
        }
        // Whole pixel counts print without a fraction (and -0.0 as "0");
        // everything else uses the shortest form, exponent included.
        if pixels.fract() == 0.0 && pixels < 1e16 {
            return Ok(Self(format!("{}px", pixels as u64)));
        }
        Ok(Self(format!("{pixels:?}px")))
    }
}

impl From<&str> for CardWidth {
    fn from(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }
}

impl From<String> for CardWidth {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<CardWidth> for String {
    fn from(width: CardWidth) -> Self {
        width.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Pixels(f64),
    Css(String),
}

impl TryFrom<RawWidth> for CardWidth {
    type Error = WidthError;

    fn try_from(raw: RawWidth) -> Result<Self, Self::Error> {
        match raw {
            RawWidth::Pixels(pixels) => Self::try_from(pixels),
            RawWidth::Css(css) => Self::parse(&css),
        }
    }
}
