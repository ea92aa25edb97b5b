//! # harmonia-scheme — color harmony engine
//!
//! Turns one base color and a handful of knobs into a palette of related
//! colors. Every palette is a pure function of its [`PaletteConfig`]: the
//! same configuration (seed included) always produces the same hex strings.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig (validated builder, or PaletteRecord via serde)
//!     │
//!     ▼
//! scheme.rs:    distribute `count` base colors on the hue wheel
//!     │           (noise.rs feeds `chaos` and `perlin`)
//!     ▼
//! variation.rs: expand each base into [base, darker, lighter, muted]
//!     │
//!     ▼
//! palette.rs:   HSV → RGB → optional web-safe snap → hex
//! ```
//!
//! # Example
//!
//! ```
//! use harmonia_scheme::PaletteConfig;
//!
//! let palette = PaletteConfig::new()
//!     .with_hex("#3366cc")?
//!     .with_scheme("splitComplement")?
//!     .with_color_count(3)?
//!     .generate();
//!
//! assert_eq!(palette.color_set().len(), 3);
//! assert_eq!(palette.colors().len(), 12);
//! # Ok::<(), harmonia_scheme::ConfigurationError>(())
//! ```

// Single-char math variables (h, s, v, d, n) are standard in color science.
#![allow(clippy::many_single_char_names)]
// Slot indices and counts are small; float conversions are exact in practice.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

pub mod config;
pub mod error;
pub mod noise;
pub mod palette;
pub mod scheme;
pub mod variation;

pub use config::{ColorRecord, PaletteConfig, PaletteFlags, PaletteRecord};
pub use error::ConfigurationError;
pub use noise::{DEFAULT_SEED, NoiseSource};
pub use palette::{ColorGroup, Palette, generate};
pub use scheme::{SCHEME_NAMES, SchemeKind};
pub use variation::VariationPreset;
