// SPDX-License-Identifier: MIT
//
// Hex color parsing.
//
// Only the 6-digit `RRGGBB` form is accepted (with or without a leading
// `#`, either case). Shorthand and alpha forms are structurally invalid for
// palette input and are rejected rather than guessed at.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?<digits>[0-9a-fA-F]{6})$").expect("hex color pattern compiles")
});

/// A hex string that is not exactly six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("malformed hex color {0:?}: expected 6 hex digits, optionally prefixed with '#'")]
    Malformed(String),
}

impl Rgb {
    /// Parse a `RRGGBB` / `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::Malformed`] for anything other than exactly six
    /// hex digits after an optional `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia_color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF8000"), Ok(Rgb::new(255, 128, 0)));
    /// assert!(Rgb::from_hex("f80").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let malformed = || HexError::Malformed(s.to_owned());
        let caps = HEX_COLOR.captures(s.trim()).ok_or_else(malformed)?;
        let packed = u32::from_str_radix(&caps["digits"], 16).map_err(|_| malformed())?;
        let [_, r, g, b] = packed.to_be_bytes();
        Ok(Self::new(r, g, b))
    }
}

impl std::str::FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
