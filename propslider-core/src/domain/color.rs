//! 24-bit colors for segments and the knob, with `#RRGGBB` parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Failure to parse a `#RRGGBB` color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected 7-character #RRGGBB color, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digits in color {0:?}")]
    BadDigits(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::BadLength(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ParseColorError::BadLength(s.to_string()));
        }
        let digits = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::BadDigits(s.to_string()))
        };
        Ok(Self {
            r: digits(0..2)?,
            g: digits(2..4)?,
            b: digits(4..6)?,
        })
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
