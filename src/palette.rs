//! Complementary palette generation.
//!
//! A palette starts from one base color. Every further entry rotates the
//! base hue by an equal share of the circle and nudges saturation and
//! lightness by a random amount, clamped so the result stays usable as a
//! swatch (never washed out, never black or white).

use crate::color::{Hsl, PaletteColor};
use crate::constants;
use crate::error::ColorError;
use crate::math;
use crate::random::{RandomSource, random_hex};

/// Jitter spans and clamp bounds applied to derived colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterConfig {
    /// Full width of the saturation jitter (percentage points).
    pub saturation_jitter: f64,
    /// Full width of the lightness jitter (percentage points).
    pub lightness_jitter: f64,
    pub saturation_range: (f64, f64),
    pub lightness_range: (f64, f64),
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            saturation_jitter: constants::SATURATION_JITTER,
            lightness_jitter: constants::LIGHTNESS_JITTER,
            saturation_range: constants::SATURATION_RANGE,
            lightness_range: constants::LIGHTNESS_RANGE,
        }
    }
}

impl JitterConfig {
    /// Generate `count` hex colors starting from `base_hex`.
    ///
    /// Index 0 is `base_hex` exactly as given. An invalid base yields an
    /// empty list.
    pub fn generate(
        &self,
        base_hex: &str,
        count: usize,
        rng: &mut impl RandomSource,
    ) -> Vec<String> {
        let Some(rgb) = math::hex_to_rgb(base_hex) else {
            log::warn!("Cannot derive a palette from invalid base color {base_hex:?}");
            return Vec::new();
        };
        if count == 0 {
            return Vec::new();
        }

        let base = math::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
        let mut colors = Vec::with_capacity(count);
        colors.push(base_hex.to_string());
        for i in 1..count {
            let (h, s, l) = self.variant(base, i, count, rng);
            colors.push(math::hsl_to_hex(h, s, l));
        }

        log::debug!("Generated {count} colors from {base_hex}: {colors:?}");
        colors
    }

    /// HSL of the `i`-th derived color, before hex conversion.
    fn variant(
        &self,
        base: Hsl,
        i: usize,
        count: usize,
        rng: &mut impl RandomSource,
    ) -> (f64, f64, f64) {
        let hue_shift = (360.0 / count as f64) * i as f64;
        let hue = (f64::from(base.h) + hue_shift) % 360.0;

        let saturation_offset = (rng.next_unit() - 0.5) * self.saturation_jitter;
        let lightness_offset = (rng.next_unit() - 0.5) * self.lightness_jitter;

        let (s_min, s_max) = self.saturation_range;
        let (l_min, l_max) = self.lightness_range;
        let saturation = (f64::from(base.s) + saturation_offset).clamp(s_min, s_max);
        let lightness = (f64::from(base.l) + lightness_offset).clamp(l_min, l_max);

        (hue, saturation, lightness)
    }
}

/// Generate `count` hex colors from `base_hex` with the default jitter.
pub fn generate_complementary_colors(
    base_hex: &str,
    count: usize,
    rng: &mut impl RandomSource,
) -> Vec<String> {
    JitterConfig::default().generate(base_hex, count, rng)
}

/// The colors on screen plus the size the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
    size: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(constants::DEFAULT_PALETTE_SIZE)
    }
}

impl Palette {
    /// An empty palette that will hold `size` colors once generated.
    pub fn new(size: usize) -> Self {
        Self {
            colors: Vec::new(),
            size,
        }
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Change the requested size. Takes effect on the next regeneration.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Replace all colors with a fresh palette around a random base.
    pub fn regenerate(&mut self, rng: &mut impl RandomSource) -> Result<(), ColorError> {
        self.regenerate_with(&JitterConfig::default(), rng)
    }

    pub fn regenerate_with(
        &mut self,
        config: &JitterConfig,
        rng: &mut impl RandomSource,
    ) -> Result<(), ColorError> {
        let base = random_hex(rng);
        self.colors = config
            .generate(&base, self.size, rng)
            .iter()
            .map(|hex| PaletteColor::from_hex(hex))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Show exactly `hexes`, resizing to match.
    ///
    /// Nothing changes unless every entry parses.
    pub fn replace_colors<S: AsRef<str>>(&mut self, hexes: &[S]) -> Result<(), ColorError> {
        let colors = hexes
            .iter()
            .map(|hex| PaletteColor::from_hex(hex.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.size = colors.len();
        self.colors = colors;
        Ok(())
    }

    /// Hex codes of the current colors, in order.
    pub fn hexes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use pretty_assertions::assert_eq;

    /// Cycles through a fixed list of unit values.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn first_color_is_the_base() {
        let colors = generate_complementary_colors("#FF0000", 4, &mut RngSource::seeded(1));
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0], "#FF0000");
    }

    #[test]
    fn base_is_kept_verbatim() {
        let colors = generate_complementary_colors("3366cc", 3, &mut RngSource::seeded(1));
        assert_eq!(colors[0], "3366cc");
    }

    #[test]
    fn invalid_base_yields_nothing() {
        assert!(generate_complementary_colors("zzzzzz", 5, &mut RngSource::seeded(1)).is_empty());
        assert!(generate_complementary_colors("#12", 5, &mut RngSource::seeded(1)).is_empty());
    }

    #[test]
    fn zero_count_yields_nothing() {
        assert!(generate_complementary_colors("#FF0000", 0, &mut RngSource::seeded(1)).is_empty());
    }

    #[test]
    fn single_color_is_just_the_base() {
        let colors = generate_complementary_colors("#123456", 1, &mut RngSource::seeded(1));
        assert_eq!(colors, vec!["#123456".to_string()]);
    }

    #[test]
    fn centered_jitter_only_rotates_hue() {
        // 0.5 maps to zero offset; red at s=100 l=50 stays saturated.
        let colors = generate_complementary_colors("#FF0000", 6, &mut Scripted::new(&[0.5]));
        assert_eq!(
            colors,
            vec!["#FF0000", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#FF00FF"]
        );
    }

    #[test]
    fn hue_steps_evenly_around_the_circle() {
        let config = JitterConfig::default();
        let base = Hsl::new(300, 50, 50);
        let mut rng = Scripted::new(&[0.5]);
        let hues: Vec<f64> = (1..4).map(|i| config.variant(base, i, 4, &mut rng).0).collect();
        assert_eq!(hues, vec![30.0, 120.0, 210.0]);
    }

    #[test]
    fn jitter_extremes_stay_clamped() {
        let config = JitterConfig::default();
        let bases = [
            Hsl::new(0, 0, 0),
            Hsl::new(90, 100, 100),
            Hsl::new(200, 10, 95),
            Hsl::new(359, 95, 5),
            Hsl::new(45, 60, 50),
        ];
        // 0.0 and 0.999 are offsets of -0.5 and +0.499 before scaling.
        let scripts: [&[f64]; 4] = [&[0.0], &[0.999], &[0.0, 0.999], &[0.999, 0.0]];
        for base in bases {
            for script in scripts {
                let mut rng = Scripted::new(script);
                for i in 1..8 {
                    let (h, s, l) = config.variant(base, i, 8, &mut rng);
                    assert!((0.0..360.0).contains(&h), "hue {h}");
                    assert!((20.0..=100.0).contains(&s), "saturation {s} for {base:?}");
                    assert!((20.0..=80.0).contains(&l), "lightness {l} for {base:?}");
                }
            }
        }
    }

    #[test]
    fn jitter_offsets_scale_with_config() {
        let config = JitterConfig::default();
        let base = Hsl::new(0, 60, 50);
        let (_, s, l) = config.variant(base, 1, 2, &mut Scripted::new(&[0.0]));
        assert_eq!((s, l), (40.0, 35.0));
        let (_, s, l) = config.variant(base, 1, 2, &mut Scripted::new(&[0.75]));
        assert_eq!((s, l), (70.0, 57.5));
    }

    #[test]
    fn generated_colors_respect_bounds_after_conversion() {
        let mut rng = RngSource::seeded(9);
        for _ in 0..50 {
            let base = random_hex(&mut rng);
            for hex in generate_complementary_colors(&base, 8, &mut rng).iter().skip(1) {
                let hsl = PaletteColor::from_hex(hex).unwrap().hsl();
                // Quantizing to 8-bit channels may move s/l by a point or two.
                assert!(hsl.s >= 18, "{hex}: {hsl:?}");
                assert!((18..=82).contains(&hsl.l), "{hex}: {hsl:?}");
            }
        }
    }

    #[test]
    fn regenerate_fills_to_size() {
        let mut palette = Palette::new(7);
        palette.regenerate(&mut RngSource::seeded(3)).unwrap();
        assert_eq!(palette.colors().len(), 7);
        assert_eq!(palette.size(), 7);
    }

    #[test]
    fn regenerate_is_reproducible_with_a_seed() {
        let mut a = Palette::default();
        let mut b = Palette::default();
        a.regenerate(&mut RngSource::seeded(11)).unwrap();
        b.regenerate(&mut RngSource::seeded(11)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.colors().len(), constants::DEFAULT_PALETTE_SIZE);
    }

    #[test]
    fn set_size_applies_on_next_regeneration() {
        let mut palette = Palette::new(3);
        let mut rng = RngSource::seeded(5);
        palette.regenerate(&mut rng).unwrap();
        palette.set_size(6);
        assert_eq!(palette.colors().len(), 3);
        palette.regenerate(&mut rng).unwrap();
        assert_eq!(palette.colors().len(), 6);
    }

    #[test]
    fn replace_colors_resizes() {
        let mut palette = Palette::new(5);
        palette.replace_colors(&["#ff0000", "00FF00"]).unwrap();
        assert_eq!(palette.size(), 2);
        assert_eq!(palette.hexes(), vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn replace_colors_is_all_or_nothing() {
        let mut palette = Palette::new(5);
        palette.replace_colors(&["#111111"]).unwrap();
        let err = palette.replace_colors(&["#222222", "nope"]).unwrap_err();
        assert_eq!(err, ColorError::InvalidFormat("nope".to_string()));
        assert_eq!(palette.hexes(), vec!["#111111"]);
        assert_eq!(palette.size(), 1);
    }
}
