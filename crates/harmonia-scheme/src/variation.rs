//! Variation presets — expanding one base color into a family of four.
//!
//! Every base color produced by a scheme becomes exactly four colors:
//!
//! | Slot | Role    | Transform                                |
//! |------|---------|------------------------------------------|
//! | 0    | base    | unchanged                                |
//! | 1    | darker  | preset's `(Δs, Δv)` for the darker slot  |
//! | 2    | lighter | preset's `(Δs, Δv)` for the lighter slot |
//! | 3    | muted   | preset's `(Δs, Δv)` for the muted slot   |
//!
//! Deltas add to saturation and value and clamp to [0, 1]. Hue is never
//! touched, so a family always shares its base hue.

use std::fmt;

use harmonia_color::Hsv;

/// Number of colors each base expands into.
pub const VARIATIONS_PER_COLOR: usize = 4;

/// A `(Δsaturation, Δvalue)` pair.
pub type Delta = (f64, f64);

/// The named brightness/saturation curves applied to every base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariationPreset {
    /// Balanced: darker shade, washed-out tint, gray-ish muted tone.
    #[default]
    Default,
    /// Low saturation throughout.
    Pastel,
    /// Gentle, slightly dim.
    Soft,
    /// Biased toward bright, airy tints.
    Light,
    /// High contrast between slots; the darker slot gains saturation.
    Hard,
    /// Almost gray.
    Pale,
    /// Saturation boosted in the darker and lighter slots.
    Vibrant,
    /// Dim and desaturated.
    Muted,
}

impl VariationPreset {
    /// Human-readable name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pastel => "pastel",
            Self::Soft => "soft",
            Self::Light => "light",
            Self::Hard => "hard",
            Self::Pale => "pale",
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
        }
    }

    /// Parse a preset from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().find(|p| p.name().eq_ignore_ascii_case(name)).copied()
    }

    /// All available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default, Self::Pastel, Self::Soft, Self::Light,
            Self::Hard, Self::Pale, Self::Vibrant, Self::Muted,
        ]
    }

    /// The `(Δs, Δv)` deltas for the darker, lighter and muted slots.
    #[must_use]
    pub const fn deltas(self) -> [Delta; 3] {
        match self {
            Self::Default => [(0.00, -0.30), (-0.30, 0.20), (-0.50, -0.10)],
            Self::Pastel => [(-0.40, -0.10), (-0.60, 0.10), (-0.70, -0.05)],
            Self::Soft => [(-0.20, -0.35), (-0.40, 0.10), (-0.55, -0.20)],
            Self::Light => [(-0.20, -0.15), (-0.50, 0.25), (-0.60, 0.05)],
            Self::Hard => [(0.20, -0.40), (0.00, 0.15), (-0.30, -0.25)],
            Self::Pale => [(-0.50, -0.20), (-0.75, 0.20), (-0.80, -0.10)],
            Self::Vibrant => [(0.30, -0.20), (0.15, 0.25), (-0.20, -0.05)],
            Self::Muted => [(-0.30, -0.40), (-0.45, -0.05), (-0.65, -0.25)],
        }
    }

    /// Expand `base` into `[base, darker, lighter, muted]`.
    #[must_use]
    pub fn expand(self, base: Hsv) -> [Hsv; VARIATIONS_PER_COLOR] {
        let [darker, lighter, muted] = self.deltas().map(|(ds, dv)| {
            base.adjust_saturation(ds).adjust_value(dv)
        });
        [base, darker, lighter, muted]
    }
}

impl fmt::Display for VariationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
