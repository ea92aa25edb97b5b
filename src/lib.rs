// SPDX-License-Identifier: MIT
//
// harmonia — harmonious color palettes from a single base color.
//
// This is the facade crate that wires the workspace together:
//
//   harmonia-color  → Hsv / Rgb, hex parsing, web-safe snapping
//   harmonia-scheme → noise, schemes, variation presets, configuration,
//                     the palette pipeline
//
// A palette request flows through:
//
//   PaletteConfig → scheme (count base colors) → saturation adjustment
//                 → variation preset (4 per base) → Rgb → hex
//
// Nothing here holds state. Every call to `generate` starts from the
// configuration snapshot and its seed.

pub use harmonia_color::{HexError, Hsv, Rgb, hue_diff, interpolate_hue, normalize_hue};
pub use harmonia_scheme::{
    ColorGroup, ColorRecord, ConfigurationError, DEFAULT_SEED, NoiseSource, Palette, PaletteConfig,
    PaletteFlags, PaletteRecord, SCHEME_NAMES, SchemeKind, VariationPreset, generate,
};
pub use harmonia_scheme::config::{DEFAULT_COLORS, DEFAULT_DISTANCE, MAX_COLORS, MIN_COLORS};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
