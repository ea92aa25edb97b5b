// SPDX-License-Identifier: MIT
//
// HSV and RGB color types with the conversions between them.
//
// `Hsv` keeps its invariants private: hue is always in [0, 360), saturation
// and value are always in [0, 1]. Every constructor and operation funnels
// through `Hsv::new`, so no arithmetic can leave a color outside its range.

use std::fmt;

// ─── Hsv ─────────────────────────────────────────────────────────────────────

/// A color in the HSV (hue, saturation, value) cylinder.
///
/// This is the canonical internal representation for palette generation:
/// schemes rotate the hue, variations nudge saturation and value.
///
/// # Examples
///
/// ```
/// use harmonia_color::Hsv;
///
/// let red = Hsv::new(0.0, 1.0, 1.0);
/// assert_eq!(red.to_rgb().to_hex(), "ff0000");
///
/// // Out-of-range input is normalized, never rejected.
/// let wrapped = Hsv::new(-90.0, 1.5, 0.5);
/// assert!((wrapped.hue() - 270.0).abs() < 1e-9);
/// assert!((wrapped.saturation() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color, wrapping the hue into [0, 360) and clamping
    /// saturation and value into [0, 1].
    ///
    /// Non-finite components normalize to 0.
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// A fully saturated, full-value color at the given hue.
    #[inline]
    #[must_use]
    pub fn from_hue(h: f64) -> Self {
        Self::new(h, 1.0, 1.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self { h: 0.0, s: 0.0, v: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { h: 0.0, s: 0.0, v: 1.0 };

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Hue angle in degrees, in [0, 360).
    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.h
    }

    /// Saturation in [0, 1].
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.s
    }

    /// Value (brightness) in [0, 1].
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.v
    }

    /// Whether this color has no visible hue.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s < 1e-9 || self.v < 1e-9
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.v)
    }

    /// Set the hue to an absolute angle.
    #[inline]
    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.v)
    }

    /// Set saturation to an absolute value.
    #[inline]
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.v)
    }

    /// Set value to an absolute value.
    #[inline]
    #[must_use]
    pub fn with_value(self, v: f64) -> Self {
        Self::new(self.h, self.s, v)
    }

    /// Add `amount` to saturation (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn adjust_saturation(self, amount: f64) -> Self {
        Self::new(self.h, self.s + amount, self.v)
    }

    /// Add `amount` to value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn adjust_value(self, amount: f64) -> Self {
        Self::new(self.h, self.s, self.v + amount)
    }

    /// The complementary color (hue rotated 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Mix this color with another.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Hue takes the
    /// shortest path around the wheel; saturation and value interpolate
    /// linearly.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self::new(
            h,
            self.s.mul_add(inv_t, other.s * t),
            self.v.mul_add(inv_t, other.v * t),
        )
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to 8-bit RGB using the standard six-sector formula.
    ///
    /// Continuous across sector boundaries; `s = 0` yields a gray with every
    /// channel at `round(v * 255)`.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert straight to a lowercase 6-digit hex string.
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Debug for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsv({:.1}, {:.3}, {:.3})", self.h, self.s, self.v)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.s - other.s).abs() < EPS
            && (self.v - other.v).abs() < EPS
            && hue_diff(self.h, other.h) < EPS
    }
}

impl Default for Hsv {
    /// Default is fully saturated red at full value.
    fn default() -> Self {
        Self::from_hue(0.0)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
///
/// Always derived from an [`Hsv`] during generation; the only reverse use
/// is resolving a hex base color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The channel values of the 216-color web-safe palette.
    pub const WEB_SAFE_STEPS: [u8; 6] = [0, 51, 102, 153, 204, 255];

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase 6-digit hex string, without a leading `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Snap every channel to the nearest multiple of 51.
    #[must_use]
    pub const fn web_safe(self) -> Self {
        Self {
            r: snap_web_safe(self.r),
            g: snap_web_safe(self.g),
            b: snap_web_safe(self.b),
        }
    }

    /// Whether every channel is already one of [`Self::WEB_SAFE_STEPS`].
    #[must_use]
    pub const fn is_web_safe(self) -> bool {
        self.r % 51 == 0 && self.g % 51 == 0 && self.b % 51 == 0
    }

    /// Convert to HSV. Achromatic colors get hue 0.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let h = if d < 1e-12 {
            0.0
        } else if (max - r).abs() < 1e-12 {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < 1e-12 {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };
        let s = if max < 1e-12 { 0.0 } else { d / max };

        Hsv::new(h, s, max)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

// ─── Hue Math ────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
///
/// Non-finite input maps to 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative input.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── Conversion Helpers ──────────────────────────────────────────────────────

#[inline]
fn clamp_unit(x: f64) -> f64 {
    if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 }
}

/// Six-sector HSV → RGB, components in 0.0–1.0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = v - c;

    // Safe: h is normalized to [0, 360), so the sector is in 0..6.
    let (r, g, b) = match hp.floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn snap_web_safe(c: u8) -> u8 {
    // Safe: (255 + 25) / 51 * 51 = 255 is the largest possible result.
    ((c as u16 + 25) / 51 * 51) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
