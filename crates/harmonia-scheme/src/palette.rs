//! The palette pipeline — from configuration to hex output.
//!
//! ```text
//! PaletteConfig
//!     │  base Hsv (hue from degrees or hex)
//!     ▼
//! SchemeKind::generate   → count base colors (seeded noise for chaos/perlin)
//!     ▼
//! saturation adjustment  → additive, clamped
//!     ▼
//! VariationPreset::expand → 4 colors per base
//!     ▼
//! Rgb → (web-safe) → hex
//! ```
//!
//! The result is stored once, grouped by base color. The flat and grouped
//! accessors are both views of that single store.

use harmonia_color::Hsv;
use log::debug;
use serde::Serialize;

use crate::config::PaletteConfig;
use crate::noise::NoiseSource;
use crate::variation::VARIATIONS_PER_COLOR;

/// One base color's family: `[base, darker, lighter, muted]` as hex.
pub type ColorGroup = [String; VARIATIONS_PER_COLOR];

/// A generated palette of lowercase 6-digit hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Palette {
    groups: Vec<ColorGroup>,
}

impl Palette {
    /// Every color in slot order: `[base0 var0..3, base1 var0..3, …]`.
    #[must_use]
    pub fn colors(&self) -> Vec<String> {
        self.groups.iter().flatten().cloned().collect()
    }

    /// Colors grouped by base color, four per group.
    #[must_use]
    pub fn color_set(&self) -> &[ColorGroup] {
        &self.groups
    }

    /// Total number of colors (`group_count() * 4`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len() * VARIATIONS_PER_COLOR
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of base colors.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterate over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorGroup;
    type IntoIter = std::slice::Iter<'a, ColorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Run the full pipeline for `config`.
///
/// Infallible: the configuration was validated when it was built. The noise
/// source is created fresh from the configured seed on every call, so the
/// same configuration always yields the same palette.
#[must_use]
pub fn generate(config: &PaletteConfig) -> Palette {
    let mut noise = NoiseSource::new(config.seed());
    let bases = config.scheme().generate(&config.scheme_input(), &mut noise);

    let adjustment = config.saturation_adjustment();
    let web_safe = config.is_web_safe();
    let preset = config.preset();

    let groups: Vec<ColorGroup> = bases
        .into_iter()
        .map(|base| base.adjust_saturation(adjustment))
        .map(|base| preset.expand(base).map(|c| to_hex(c, web_safe)))
        .collect();

    debug!(
        "generated {} colors: scheme={} preset={} seed={} web_safe={web_safe}",
        groups.len() * VARIATIONS_PER_COLOR,
        config.scheme(),
        preset,
        config.seed(),
    );

    Palette { groups }
}

fn to_hex(color: Hsv, web_safe: bool) -> String {
    let rgb = color.to_rgb();
    if web_safe { rgb.web_safe().to_hex() } else { rgb.to_hex() }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
