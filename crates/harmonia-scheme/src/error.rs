//! Configuration errors.
//!
//! Only structurally invalid configuration is an error. Numeric values out
//! of range (hue, saturation, value, distance) are normalized instead.

use harmonia_color::HexError;

use crate::config::{MAX_COLORS, MIN_COLORS};
use crate::scheme::SCHEME_NAMES;

/// Rejected palette configuration, raised by the setter that received it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown scheme {0:?} (expected one of: {names})", names = SCHEME_NAMES.join(", "))]
    UnknownScheme(String),

    #[error("unknown variation preset {0:?}")]
    UnknownVariation(String),

    #[error("color count {0} is out of range ({min}..={max})", min = MIN_COLORS, max = MAX_COLORS)]
    ColorCountOutOfRange(usize),

    #[error(transparent)]
    InvalidHex(#[from] HexError),
}
