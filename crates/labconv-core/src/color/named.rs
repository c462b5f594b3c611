//! Fixed palette of named colors
//!
//! The hex strings are canonical and returned verbatim, short forms
//! included (`#FFF`, `#F77`).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum NamedColor {
    Blue,
    Yellow,
    Red,
    Green,
    White,
    LightRed,
}

impl NamedColor {
    /// Every entry, in palette order
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Yellow,
        Self::Red,
        Self::Green,
        Self::White,
        Self::LightRed,
    ];

    /// Hex string for this entry
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#00B0FF",
            Self::Yellow => "#FFEB3B",
            Self::Red => "#F50057",
            Self::Green => "#76FF03",
            Self::White => "#FFF",
            Self::LightRed => "#F77",
        }
    }

    /// Palette name, e.g. `"lightRed"`
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Green => "green",
            Self::White => "white",
            Self::LightRed => "lightRed",
        }
    }

    /// Decode the hex string into 8-bit channels
    pub fn to_rgb8(&self) -> [u8; 3] {
        // Literals are well-formed; see test_all_entries_parse.
        parse_hex(self.hex()).unwrap_or_default()
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownName(s.to_string()))
    }
}

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional) into 8-bit channels
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || Error::InvalidHex(hex.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = channel(&digits[i..i + 1])? * 17;
            }
            Ok(out)
        }
        6 => Ok([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        _ => Err(invalid()),
    }
}
