//! Harmony schemes — pure hue-distribution math.
//!
//! Each scheme takes a base color, a color count and a `distance` in [0, 1]
//! and produces exactly `count` base colors. The first color always carries
//! the base hue. Only `chaos` and `perlin` read from the [`NoiseSource`];
//! every other scheme ignores it.
//!
//! Angular schemes with a short fixed cycle (`contrast`, `triade`, `tetrade`,
//! `square`, `splitComplement`) repeat the cycle to fill `count` slots, each
//! repetition a step darker than the last so repeated hues stay distinct.

use std::fmt;

use harmonia_color::Hsv;
use log::trace;

use crate::noise::NoiseSource;

/// Golden angle = 360 / phi^2 ≈ 137.508°.
pub const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// Value lost per repetition of a cyclic scheme's offsets.
pub const CYCLE_VALUE_STEP: f64 = 0.15;
/// Lowest value multiplier a repetition can reach.
pub const CYCLE_VALUE_FLOOR: f64 = 0.2;

/// Sample spacing along the noise lattice for `perlin`.
pub const PERLIN_FREQUENCY: f64 = 0.35;

const MONO_SATURATION_FLOOR: f64 = 0.4;
const SHADE_VALUE_FLOOR: f64 = 0.2;
const TINT_SATURATION_FLOOR: f64 = 0.3;

/// Seasonal anchors: (hue offset, saturation factor, value factor), scaled
/// by the base saturation and value.
const SEASONS: [(f64, f64, f64); 4] = [
    (0.0, 0.45, 0.95),   // spring
    (60.0, 0.85, 1.0),   // summer
    (150.0, 0.75, 0.70), // autumn
    (240.0, 0.30, 0.55), // winter
];

/// Every name accepted by [`SchemeKind::from_name`].
pub const SCHEME_NAMES: [&str; 16] = [
    "mono", "monochromatic", "contrast", "triade", "tetrade", "square",
    "analogic", "splitComplement", "phi", "rainbow", "shades", "tints",
    "gradient", "seasons", "chaos", "perlin",
];

/// The harmony rule used to distribute base colors over the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeKind {
    /// One hue, saturation stepping down. Also accepted as `monochromatic`.
    #[default]
    Mono,
    /// Base and complement (180°).
    Contrast,
    /// Base plus a pair around the complement, `180 ∓ 60·distance`.
    Triade,
    /// Rectangle: base, `θ`, 180, `180 + θ` with `θ = 30 + 60·distance`.
    Tetrade,
    /// 90° spacing.
    Square,
    /// Neighbours at `±k·(10 + 20·distance)` degrees.
    Analogic,
    /// Complement ± `(15 + 30·distance)` degrees.
    SplitComplement,
    /// Golden-angle steps.
    Phi,
    /// Even spacing, `360 / count`.
    Rainbow,
    /// One hue, value stepping down.
    Shades,
    /// One hue, stepping toward white.
    Tints,
    /// Interpolation from the base to an endpoint color.
    Gradient,
    /// Four seasonal anchors, cycled and blended.
    Seasons,
    /// Independent seeded hue offsets.
    Chaos,
    /// Smooth seeded hue drift.
    Perlin,
}

/// Everything a scheme needs besides the noise source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeInput {
    pub base: Hsv,
    pub count: usize,
    /// Spread in [0, 1].
    pub distance: f64,
    /// Put the base complement in the last slot (`analogic` only). With
    /// `count == 2` that leaves `[base, complement]`, the same as `contrast`.
    pub add_complement: bool,
    /// `gradient` endpoint; the base complement when `None`.
    pub gradient_end: Option<Hsv>,
}

impl SchemeKind {
    /// Generate exactly `input.count` base colors.
    #[must_use]
    pub fn generate(self, input: &SchemeInput, noise: &mut NoiseSource) -> Vec<Hsv> {
        let colors = generate(self, input, noise);
        trace!("{self} produced {colors:?}");
        colors
    }

    /// Canonical name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Contrast => "contrast",
            Self::Triade => "triade",
            Self::Tetrade => "tetrade",
            Self::Square => "square",
            Self::Analogic => "analogic",
            Self::SplitComplement => "splitComplement",
            Self::Phi => "phi",
            Self::Rainbow => "rainbow",
            Self::Shades => "shades",
            Self::Tints => "tints",
            Self::Gradient => "gradient",
            Self::Seasons => "seasons",
            Self::Chaos => "chaos",
            Self::Perlin => "perlin",
        }
    }

    /// Parse a scheme from its name (case-insensitive). `monochromatic`
    /// is an alias of `mono`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("monochromatic") {
            return Some(Self::Mono);
        }
        Self::all().iter().find(|s| s.name().eq_ignore_ascii_case(name)).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mono, Self::Contrast, Self::Triade, Self::Tetrade,
            Self::Square, Self::Analogic, Self::SplitComplement, Self::Phi,
            Self::Rainbow, Self::Shades, Self::Tints, Self::Gradient,
            Self::Seasons, Self::Chaos, Self::Perlin,
        ]
    }

    /// Whether this scheme draws from the noise source.
    #[must_use]
    pub const fn uses_noise(self) -> bool {
        matches!(self, Self::Chaos | Self::Perlin)
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of slot `i` in [0, 1] across `n` slots.
fn step(i: usize, n: usize) -> f64 {
    i as f64 / n.saturating_sub(1).max(1) as f64
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Repeat `offsets` to fill `n` slots, darkening each full repetition.
fn cycle(base: Hsv, offsets: &[f64], n: usize) -> Vec<Hsv> {
    (0..n)
        .map(|i| {
            let round = (i / offsets.len()) as f64;
            let factor = CYCLE_VALUE_STEP.mul_add(-round, 1.0).max(CYCLE_VALUE_FLOOR);
            base.shift_hue(offsets[i % offsets.len()])
                .with_value(base.value() * factor)
        })
        .collect()
}

/// Core scheme dispatch.
fn generate(kind: SchemeKind, input: &SchemeInput, noise: &mut NoiseSource) -> Vec<Hsv> {
    let SchemeInput { base, count: n, distance: d, .. } = *input;
    let d = if d.is_finite() { d.clamp(0.0, 1.0) } else { 0.0 };

    match kind {
        SchemeKind::Mono => (0..n)
            .map(|i| {
                let s = base.saturation() * lerp(1.0, MONO_SATURATION_FLOOR, step(i, n));
                base.with_saturation(s)
            })
            .collect(),
        SchemeKind::Contrast => cycle(base, &[0.0, 180.0], n),
        SchemeKind::Triade => {
            let spread = 60.0 * d;
            cycle(base, &[0.0, 180.0 - spread, 180.0 + spread], n)
        }
        SchemeKind::Tetrade => {
            let theta = 60.0f64.mul_add(d, 30.0);
            cycle(base, &[0.0, theta, 180.0, 180.0 + theta], n)
        }
        SchemeKind::Square => cycle(base, &[0.0, 90.0, 180.0, 270.0], n),
        SchemeKind::SplitComplement => {
            let delta = 30.0f64.mul_add(d, 15.0);
            cycle(base, &[0.0, 180.0 - delta, 180.0 + delta], n)
        }
        SchemeKind::Analogic => {
            let spacing = 20.0f64.mul_add(d, 10.0);
            let complement = input.add_complement && n > 0;
            let own = if complement { n - 1 } else { n };
            let mut v: Vec<Hsv> = (0..own)
                .map(|i| {
                    // 0, +s, -s, +2s, -2s, ...
                    let k = ((i + 1) / 2) as f64;
                    let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
                    base.shift_hue(sign * k * spacing)
                })
                .collect();
            if complement {
                v.push(base.complement());
            }
            v
        }
        SchemeKind::Phi => (0..n).map(|i| base.shift_hue(i as f64 * GOLDEN_ANGLE)).collect(),
        SchemeKind::Rainbow => {
            let spacing = 360.0 / n.max(1) as f64;
            (0..n).map(|i| base.shift_hue(i as f64 * spacing)).collect()
        }
        SchemeKind::Shades => (0..n)
            .map(|i| base.with_value(base.value() * lerp(1.0, SHADE_VALUE_FLOOR, step(i, n))))
            .collect(),
        SchemeKind::Tints => (0..n)
            .map(|i| {
                let t = step(i, n);
                Hsv::new(
                    base.hue(),
                    base.saturation() * lerp(1.0, TINT_SATURATION_FLOOR, t),
                    lerp(base.value(), 1.0, t),
                )
            })
            .collect(),
        SchemeKind::Gradient => {
            let end = input.gradient_end.unwrap_or_else(|| base.complement());
            (0..n).map(|i| base.mix(&end, step(i, n))).collect()
        }
        SchemeKind::Seasons => {
            let anchors = SEASONS.map(|(dh, s, v)| {
                Hsv::new(base.hue() + dh, base.saturation() * s, base.value() * v)
            });
            (0..n)
                .map(|i| {
                    let pos = (i * anchors.len()) as f64 / n as f64;
                    let k = pos.floor() as usize % anchors.len();
                    let next = (k + 1) % anchors.len();
                    anchors[k].mix(&anchors[next], pos.fract())
                })
                .collect()
        }
        SchemeKind::Chaos => {
            let spread = 180.0 * d;
            (0..n)
                .map(|i| {
                    if i == 0 {
                        base
                    } else {
                        base.shift_hue(spread * noise.next_signed())
                    }
                })
                .collect()
        }
        SchemeKind::Perlin => {
            let drift = noise.smooth(n, PERLIN_FREQUENCY);
            let origin = drift.first().copied().unwrap_or_default();
            drift
                .iter()
                .map(|p| base.shift_hue(360.0 * d * (p - origin)))
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
