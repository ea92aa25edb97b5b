//! Palette configuration — the immutable builder in front of the engine.
//!
//! Every setter consumes the configuration and returns a new one, so a
//! configuration is a plain value that can be cloned, shared and handed to
//! [`generate`](crate::palette::generate) without any hidden state.
//!
//! Setters that can receive structurally invalid input (scheme and preset
//! names, color counts, hex strings) return `Result` and fail right there.
//! Numeric setters never fail: hue wraps, saturation/value/distance clamp.
//!
//! # Defaults
//!
//! | Field               | Default            |
//! |---------------------|--------------------|
//! | base color          | hue 0, s 1, v 1    |
//! | scheme              | `mono`             |
//! | color count         | 4                  |
//! | distance            | 0.5                |
//! | variation preset    | `default`          |
//! | seed                | [`DEFAULT_SEED`]   |
//! | saturation adjust   | 0                  |
//! | gradient endpoint   | base complement    |
//! | flags               | none               |

use harmonia_color::{Hsv, Rgb};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::noise::DEFAULT_SEED;
use crate::palette::{self, Palette};
use crate::scheme::{SchemeInput, SchemeKind};
use crate::variation::VariationPreset;

/// Fewest base colors a palette can have.
pub const MIN_COLORS: usize = 2;
/// Most base colors a palette can have.
pub const MAX_COLORS: usize = 16;
/// Base colors when none is configured.
pub const DEFAULT_COLORS: usize = 4;
/// Scheme spread when none is configured.
pub const DEFAULT_DISTANCE: f64 = 0.5;

bitflags::bitflags! {
    /// Output switches, combined with bitwise OR.
    ///
    /// ```
    /// use harmonia_scheme::config::PaletteFlags;
    ///
    /// let flags = PaletteFlags::WEB_SAFE | PaletteFlags::ADD_COMPLEMENT;
    /// assert!(flags.contains(PaletteFlags::WEB_SAFE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct PaletteFlags: u8 {
        /// Snap every output channel to the 216-color web-safe palette.
        const WEB_SAFE       = 1 << 0;
        /// Put the base complement in the last slot (`analogic` only).
        const ADD_COMPLEMENT = 1 << 1;
    }
}

// ---------------------------------------------------------------------------
// PaletteConfig
// ---------------------------------------------------------------------------

/// A complete, validated palette configuration.
///
/// ```
/// use harmonia_scheme::PaletteConfig;
///
/// let palette = PaletteConfig::default()
///     .with_hue(210.0)
///     .with_scheme("triade")?
///     .with_color_count(3)?
///     .with_variation("pastel")?
///     .generate();
/// assert_eq!(palette.colors().len(), 12);
/// # Ok::<(), harmonia_scheme::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    base: Hsv,
    scheme: SchemeKind,
    color_count: usize,
    distance: f64,
    preset: VariationPreset,
    seed: u64,
    saturation_adjustment: f64,
    gradient_end: Option<Hsv>,
    flags: PaletteFlags,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base: Hsv::from_hue(0.0),
            scheme: SchemeKind::default(),
            color_count: DEFAULT_COLORS,
            distance: DEFAULT_DISTANCE,
            preset: VariationPreset::default(),
            seed: DEFAULT_SEED,
            saturation_adjustment: 0.0,
            gradient_end: None,
            flags: PaletteFlags::empty(),
        }
    }
}

impl PaletteConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Base color ────────────────────────────────────────────

    /// Set the base hue in degrees (wrapped into [0, 360)).
    #[must_use]
    pub fn with_hue(mut self, hue: f64) -> Self {
        self.base = self.base.with_hue(hue);
        self
    }

    /// Take the base hue from a `RRGGBB` / `#RRGGBB` string.
    ///
    /// Only the hue is extracted; base saturation and value keep their
    /// configured values (full by default).
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidHex`] if `hex` is not six hex digits.
    pub fn with_hex(mut self, hex: &str) -> Result<Self, ConfigurationError> {
        let rgb = Rgb::from_hex(hex).inspect_err(|e| debug!("rejecting base color: {e}"))?;
        self.base = self.base.with_hue(rgb.to_hsv().hue());
        Ok(self)
    }

    /// Override the base saturation (clamped to [0, 1]).
    #[must_use]
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.base = self.base.with_saturation(saturation);
        self
    }

    /// Override the base value (clamped to [0, 1]).
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.base = self.base.with_value(value);
        self
    }

    // ── Scheme ────────────────────────────────────────────────

    /// Select a scheme by name (see [`SCHEME_NAMES`](crate::scheme::SCHEME_NAMES)).
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnknownScheme`] for an unrecognized name.
    pub fn with_scheme(mut self, name: &str) -> Result<Self, ConfigurationError> {
        self.scheme = SchemeKind::from_name(name).ok_or_else(|| {
            debug!("rejecting scheme {name:?}");
            ConfigurationError::UnknownScheme(name.to_owned())
        })?;
        Ok(self)
    }

    /// Select a scheme directly by kind.
    #[must_use]
    pub const fn with_scheme_kind(mut self, scheme: SchemeKind) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set how many base colors the scheme produces.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ColorCountOutOfRange`] outside
    /// [`MIN_COLORS`]`..=`[`MAX_COLORS`].
    pub fn with_color_count(mut self, count: usize) -> Result<Self, ConfigurationError> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            debug!("rejecting color count {count}");
            return Err(ConfigurationError::ColorCountOutOfRange(count));
        }
        self.color_count = count;
        Ok(self)
    }

    /// Set the scheme spread, clamped to [0, 1]. Non-finite input becomes 0.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = if distance.is_finite() { distance.clamp(0.0, 1.0) } else { 0.0 };
        self
    }

    /// Endpoint for the `gradient` scheme.
    #[must_use]
    pub const fn with_gradient_end(mut self, end: Hsv) -> Self {
        self.gradient_end = Some(end);
        self
    }

    // ── Variations ────────────────────────────────────────────

    /// Select a variation preset by name.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnknownVariation`] for an unrecognized name.
    pub fn with_variation(mut self, name: &str) -> Result<Self, ConfigurationError> {
        self.preset = VariationPreset::from_name(name).ok_or_else(|| {
            debug!("rejecting variation preset {name:?}");
            ConfigurationError::UnknownVariation(name.to_owned())
        })?;
        Ok(self)
    }

    /// Select a variation preset directly.
    #[must_use]
    pub const fn with_preset(mut self, preset: VariationPreset) -> Self {
        self.preset = preset;
        self
    }

    // ── Saturation adjustment ─────────────────────────────────

    /// Add `amount` to the accumulated saturation adjustment applied to
    /// every base color before expansion. Non-finite input is ignored.
    #[must_use]
    pub fn adjust_saturation(mut self, amount: f64) -> Self {
        if amount.is_finite() {
            self.saturation_adjustment += amount;
        }
        self
    }

    /// Shorthand for a positive [`adjust_saturation`](Self::adjust_saturation).
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.adjust_saturation(amount.abs())
    }

    /// Shorthand for a negative [`adjust_saturation`](Self::adjust_saturation).
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.adjust_saturation(-amount.abs())
    }

    // ── Seed & flags ──────────────────────────────────────────

    /// Seed for the `chaos` and `perlin` schemes.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Toggle snapping output to the web-safe palette.
    #[must_use]
    pub fn web_safe(mut self, on: bool) -> Self {
        self.flags.set(PaletteFlags::WEB_SAFE, on);
        self
    }

    /// Toggle the base complement in the last `analogic` slot.
    #[must_use]
    pub fn add_complement(mut self, on: bool) -> Self {
        self.flags.set(PaletteFlags::ADD_COMPLEMENT, on);
        self
    }

    /// Replace every output flag at once.
    #[must_use]
    pub const fn with_flags(mut self, flags: PaletteFlags) -> Self {
        self.flags = flags;
        self
    }

    // ── Getters ───────────────────────────────────────────────

    #[must_use]
    pub const fn base(&self) -> Hsv {
        self.base
    }

    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.base.hue()
    }

    #[must_use]
    pub const fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    #[must_use]
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub const fn preset(&self) -> VariationPreset {
        self.preset
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn saturation_adjustment(&self) -> f64 {
        self.saturation_adjustment
    }

    #[must_use]
    pub const fn gradient_end(&self) -> Option<Hsv> {
        self.gradient_end
    }

    #[must_use]
    pub const fn flags(&self) -> PaletteFlags {
        self.flags
    }

    #[must_use]
    pub const fn is_web_safe(&self) -> bool {
        self.flags.contains(PaletteFlags::WEB_SAFE)
    }

    #[must_use]
    pub const fn adds_complement(&self) -> bool {
        self.flags.contains(PaletteFlags::ADD_COMPLEMENT)
    }

    /// The scheme's view of this configuration.
    #[must_use]
    pub const fn scheme_input(&self) -> SchemeInput {
        SchemeInput {
            base: self.base,
            count: self.color_count,
            distance: self.distance,
            add_complement: self.adds_complement(),
            gradient_end: self.gradient_end,
        }
    }

    /// Generate the palette for this configuration.
    #[must_use]
    pub fn generate(&self) -> Palette {
        palette::generate(self)
    }
}

// ---------------------------------------------------------------------------
// PaletteRecord
// ---------------------------------------------------------------------------

/// Serializable, unvalidated form of a [`PaletteConfig`].
///
/// Every field is optional; missing fields keep their defaults. Converting
/// into a [`PaletteConfig`] runs the same validating setters as the builder.
/// When both `hue` and `hex` are present, `hex` wins.
///
/// ```
/// use harmonia_scheme::{PaletteConfig, PaletteRecord};
///
/// let record = PaletteRecord {
///     hex: Some("#3366cc".into()),
///     scheme: Some("analogic".into()),
///     add_complement: true,
///     ..PaletteRecord::default()
/// };
/// let config = PaletteConfig::try_from(record)?;
/// assert!(config.adds_complement());
/// # Ok::<(), harmonia_scheme::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteRecord {
    pub hue: Option<f64>,
    pub hex: Option<String>,
    pub saturation: Option<f64>,
    pub value: Option<f64>,
    pub scheme: Option<String>,
    pub count: Option<usize>,
    pub distance: Option<f64>,
    pub variation: Option<String>,
    pub seed: Option<u64>,
    pub saturation_adjust: Option<f64>,
    /// Endpoint for the `gradient` scheme, as hex or exact HSV.
    pub gradient_end: Option<ColorRecord>,
    pub web_safe: bool,
    pub add_complement: bool,
}

/// A color inside a [`PaletteRecord`]: either a hex string or HSV
/// components. Records produced from a config always use the HSV form, so
/// no precision is lost to 8-bit channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRecord {
    Hex(String),
    Hsv { hue: f64, saturation: f64, value: f64 },
}

impl ColorRecord {
    /// Resolve to a normalized [`Hsv`].
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidHex`] if the hex form is malformed.
    pub fn to_hsv(&self) -> Result<Hsv, ConfigurationError> {
        match self {
            Self::Hex(hex) => Ok(Rgb::from_hex(hex)?.to_hsv()),
            Self::Hsv { hue, saturation, value } => Ok(Hsv::new(*hue, *saturation, *value)),
        }
    }
}

impl From<Hsv> for ColorRecord {
    fn from(color: Hsv) -> Self {
        Self::Hsv {
            hue: color.hue(),
            saturation: color.saturation(),
            value: color.value(),
        }
    }
}

impl TryFrom<PaletteRecord> for PaletteConfig {
    type Error = ConfigurationError;

    fn try_from(record: PaletteRecord) -> Result<Self, Self::Error> {
        let mut config = Self::default();

        if let Some(hue) = record.hue {
            config = config.with_hue(hue);
        }
        if let Some(hex) = &record.hex {
            config = config.with_hex(hex)?;
        }
        if let Some(s) = record.saturation {
            config = config.with_saturation(s);
        }
        if let Some(v) = record.value {
            config = config.with_value(v);
        }
        if let Some(scheme) = &record.scheme {
            config = config.with_scheme(scheme)?;
        }
        if let Some(count) = record.count {
            config = config.with_color_count(count)?;
        }
        if let Some(distance) = record.distance {
            config = config.with_distance(distance);
        }
        if let Some(variation) = &record.variation {
            config = config.with_variation(variation)?;
        }
        if let Some(seed) = record.seed {
            config = config.with_seed(seed);
        }
        if let Some(amount) = record.saturation_adjust {
            config = config.adjust_saturation(amount);
        }
        if let Some(end) = &record.gradient_end {
            config = config.with_gradient_end(end.to_hsv()?);
        }

        Ok(config.web_safe(record.web_safe).add_complement(record.add_complement))
    }
}

impl From<&PaletteConfig> for PaletteRecord {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            hue: Some(config.hue()),
            hex: None,
            saturation: Some(config.base.saturation()),
            value: Some(config.base.value()),
            scheme: Some(config.scheme.name().to_owned()),
            count: Some(config.color_count),
            distance: Some(config.distance),
            variation: Some(config.preset.name().to_owned()),
            seed: Some(config.seed),
            saturation_adjust: Some(config.saturation_adjustment),
            gradient_end: config.gradient_end.map(ColorRecord::from),
            web_safe: config.is_web_safe(),
            add_complement: config.adds_complement(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let c = PaletteConfig::default();
        assert_eq!(c.base(), Hsv::from_hue(0.0));
        assert_eq!(c.scheme(), SchemeKind::Mono);
        assert_eq!(c.color_count(), DEFAULT_COLORS);
        assert!((c.distance() - DEFAULT_DISTANCE).abs() < 1e-12);
        assert_eq!(c.preset(), VariationPreset::Default);
        assert_eq!(c.seed(), DEFAULT_SEED);
        assert!(c.flags().is_empty());
        assert_eq!(c.gradient_end(), None);
    }

    #[test]
    fn setters_return_new_values() {
        let original = PaletteConfig::default();
        let changed = original.clone().with_hue(90.0).with_seed(7);
        assert!((original.hue() - 0.0).abs() < 1e-12);
        assert!((changed.hue() - 90.0).abs() < 1e-12);
        assert_eq!(changed.seed(), 7);
    }

    #[test]
    fn hue_wraps() {
        assert!((PaletteConfig::default().with_hue(-45.0).hue() - 315.0).abs() < 1e-9);
    }

    #[test]
    fn hex_sets_hue_only() {
        let c = PaletteConfig::default().with_value(0.5).with_hex("#00ff00").unwrap();
        assert!((c.hue() - 120.0).abs() < 1e-9);
        assert!((c.base().saturation() - 1.0).abs() < 1e-9);
        assert!((c.base().value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_hex_rejected() {
        for bad in ["#12345", "zzzzzz", "#ff00ff00", ""] {
            let err = PaletteConfig::default().with_hex(bad).unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidHex(_)), "{bad:?}");
        }
    }

    #[test]
    fn unknown_scheme_rejected() {
        let err = PaletteConfig::default().with_scheme("nonexistent").unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownScheme("nonexistent".into()));
    }

    #[test]
    fn every_scheme_name_accepted() {
        for name in crate::scheme::SCHEME_NAMES {
            assert!(PaletteConfig::default().with_scheme(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn color_count_bounds() {
        for bad in [0, 1, 17, 100] {
            assert_eq!(
                PaletteConfig::default().with_color_count(bad),
                Err(ConfigurationError::ColorCountOutOfRange(bad))
            );
        }
        for good in [MIN_COLORS, 9, MAX_COLORS] {
            let c = PaletteConfig::default().with_color_count(good).unwrap();
            assert_eq!(c.color_count(), good);
        }
    }

    #[test]
    fn unknown_variation_rejected() {
        assert_eq!(
            PaletteConfig::default().with_variation("neon"),
            Err(ConfigurationError::UnknownVariation("neon".into()))
        );
        let c = PaletteConfig::default().with_variation("vibrant").unwrap();
        assert_eq!(c.preset(), VariationPreset::Vibrant);
    }

    #[test]
    fn distance_clamps() {
        assert!((PaletteConfig::default().with_distance(2.0).distance() - 1.0).abs() < 1e-12);
        assert!(PaletteConfig::default().with_distance(-1.0).distance().abs() < 1e-12);
        assert!(PaletteConfig::default().with_distance(f64::NAN).distance().abs() < 1e-12);
    }

    #[test]
    fn saturation_adjustment_accumulates() {
        let c = PaletteConfig::default()
            .adjust_saturation(0.1)
            .saturate(0.2)
            .desaturate(0.5)
            .adjust_saturation(f64::NAN);
        assert!((c.saturation_adjustment() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn flags_toggle() {
        let c = PaletteConfig::default().web_safe(true).add_complement(true);
        assert_eq!(c.flags(), PaletteFlags::WEB_SAFE | PaletteFlags::ADD_COMPLEMENT);
        let c = c.web_safe(false);
        assert!(!c.is_web_safe());
        assert!(c.adds_complement());
    }

    #[test]
    fn scheme_input_mirrors_config() {
        let c = PaletteConfig::default()
            .with_hue(33.0)
            .with_color_count(7)
            .unwrap()
            .with_distance(0.25)
            .add_complement(true);
        let input = c.scheme_input();
        assert_eq!(input.base, Hsv::from_hue(33.0));
        assert_eq!(input.count, 7);
        assert!((input.distance - 0.25).abs() < 1e-12);
        assert!(input.add_complement);
    }

    // ── PaletteRecord ────────────────────────────────────────

    #[test]
    fn record_from_json() {
        let record: PaletteRecord = serde_json::from_str(
            r##"{
                "hex": "#ff0000",
                "scheme": "tetrade",
                "count": 8,
                "distance": 0.75,
                "variation": "soft",
                "seed": 9,
                "saturation_adjust": -0.1,
                "web_safe": true
            }"##,
        )
        .unwrap();
        let c = PaletteConfig::try_from(record).unwrap();
        assert!(c.hue().abs() < 1e-9);
        assert_eq!(c.scheme(), SchemeKind::Tetrade);
        assert_eq!(c.color_count(), 8);
        assert!((c.distance() - 0.75).abs() < 1e-12);
        assert_eq!(c.preset(), VariationPreset::Soft);
        assert_eq!(c.seed(), 9);
        assert!((c.saturation_adjustment() + 0.1).abs() < 1e-12);
        assert!(c.is_web_safe());
        assert!(!c.adds_complement());
    }

    #[test]
    fn empty_record_is_default() {
        let record: PaletteRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(PaletteConfig::try_from(record).unwrap(), PaletteConfig::default());
    }

    #[test]
    fn record_rejects_unknown_fields() {
        assert!(serde_json::from_str::<PaletteRecord>(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn record_validation_errors_surface() {
        let record = PaletteRecord { count: Some(1), ..PaletteRecord::default() };
        assert_eq!(
            PaletteConfig::try_from(record),
            Err(ConfigurationError::ColorCountOutOfRange(1))
        );
        let record = PaletteRecord { scheme: Some("nonexistent".into()), ..PaletteRecord::default() };
        assert!(matches!(
            PaletteConfig::try_from(record),
            Err(ConfigurationError::UnknownScheme(_))
        ));
        let record = PaletteRecord {
            gradient_end: Some(ColorRecord::Hex("#abc".into())),
            ..PaletteRecord::default()
        };
        assert!(matches!(
            PaletteConfig::try_from(record),
            Err(ConfigurationError::InvalidHex(_))
        ));
    }

    #[test]
    fn gradient_end_accepts_hex_or_hsv() {
        let record: PaletteRecord = serde_json::from_str(
            r#"{"gradient_end": {"hue": 80.0, "saturation": 0.2, "value": 0.6}}"#,
        )
        .unwrap();
        let c = PaletteConfig::try_from(record).unwrap();
        assert_eq!(c.gradient_end(), Some(Hsv::new(80.0, 0.2, 0.6)));

        let record: PaletteRecord = serde_json::from_str(r##"{"gradient_end": "#00ff00"}"##).unwrap();
        let c = PaletteConfig::try_from(record).unwrap();
        assert_eq!(c.gradient_end(), Some(Hsv::from_hue(120.0)));
    }

    #[test]
    fn gradient_end_survives_roundtrip() {
        let config = PaletteConfig::default()
            .with_scheme_kind(SchemeKind::Gradient)
            .with_gradient_end(Hsv::new(80.0, 0.2, 0.6));
        let json = serde_json::to_string(&PaletteRecord::from(&config)).unwrap();
        let record: PaletteRecord = serde_json::from_str(&json).unwrap();
        let back = PaletteConfig::try_from(record).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.generate(), config.generate());
    }

    #[test]
    fn hex_wins_over_hue() {
        let record = PaletteRecord {
            hue: Some(300.0),
            hex: Some("0000ff".into()),
            ..PaletteRecord::default()
        };
        let c = PaletteConfig::try_from(record).unwrap();
        assert!((c.hue() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn record_roundtrip_preserves_config() {
        let config = PaletteConfig::default()
            .with_hue(200.0)
            .with_scheme("perlin")
            .unwrap()
            .with_color_count(12)
            .unwrap()
            .with_variation("pale")
            .unwrap()
            .with_seed(1234)
            .desaturate(0.25)
            .with_gradient_end(Hsv::new(80.0, 0.2, 0.6))
            .web_safe(true);
        let json = serde_json::to_string(&PaletteRecord::from(&config)).unwrap();
        let back: PaletteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(PaletteConfig::try_from(back).unwrap(), config);
    }
}
