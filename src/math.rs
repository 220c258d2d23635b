//! Color math — hex, RGB and HSL conversions without external dependencies.
//!
//! RGB channels are 0–255, hue is in degrees, saturation and lightness are
//! percentages (0–100).

use crate::color::{Hsl, Rgb};

/// Parse `#RRGGBB` (the `#` is optional, digits are case-insensitive).
///
/// Shorthand, alpha and anything else yield `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Format channels as uppercase `#RRGGBB`. Channels are rounded and clamped to 0–255.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let to_byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    format!("#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
}

/// RGB (0–255) → HSL with integer hue in 0–359 and percentages 0–100.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        // A hue a hair below 360 rounds up; wrap it back to 0.
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Which intermediate value feeds an RGB channel inside one hue sector.
#[derive(Debug, Clone, Copy)]
enum Part {
    Chroma,
    Secondary,
    Zero,
}

struct HueSector {
    start: f64,
    end: f64,
    channels: [Part; 3],
}

use Part::{Chroma as C, Secondary as X, Zero as O};

/// The six 60° sectors of the hue circle, in order.
#[rustfmt::skip]
const SECTORS: [HueSector; 6] = [
    HueSector { start: 0.0, end: 60.0, channels: [C, X, O] },
    HueSector { start: 60.0, end: 120.0, channels: [X, C, O] },
    HueSector { start: 120.0, end: 180.0, channels: [O, C, X] },
    HueSector { start: 180.0, end: 240.0, channels: [O, X, C] },
    HueSector { start: 240.0, end: 300.0, channels: [X, O, C] },
    HueSector { start: 300.0, end: 360.0, channels: [C, O, X] },
];

/// HSL → uppercase `#RRGGBB`.
///
/// `s` and `l` are percentages. Hue wraps modulo 360, so negative hues and
/// hues past a full turn land in the matching sector.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    // rem_euclid can round a tiny negative hue up to exactly 360.0, which
    // sits on the 0° boundary.
    let sector = SECTORS
        .iter()
        .find(|sector| sector.start <= h && h < sector.end)
        .unwrap_or(&SECTORS[0]);

    let [r, g, b] = sector.channels.map(|part| {
        let v = match part {
            Part::Chroma => c,
            Part::Secondary => x,
            Part::Zero => 0.0,
        };
        (v + m) * 255.0
    });
    rgb_to_hex(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#3366cc"), Some(Rgb::new(0x33, 0x66, 0xCC)));
        assert_eq!(hex_to_rgb("3366CC"), Some(Rgb::new(0x33, 0x66, 0xCC)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["not-a-color", "#12", "#FFF", "##112233", "#1122334", "#11223G", "", "#"] {
            assert_eq!(hex_to_rgb(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_multibyte_input_of_matching_length() {
        assert_eq!(hex_to_rgb("#ééé"), None);
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#3366CC", "#0A0B0C", "#ff8800", "#7f7f80"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let back = rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
            assert_eq!(back, hex.to_uppercase());
        }
    }

    #[test]
    fn rgb_to_hex_clamps_and_rounds() {
        assert_eq!(rgb_to_hex(-12.0, 300.0, 127.6), "#00FF80");
        assert_eq!(rgb_to_hex(0.4, 254.5, 16.0), "#00FF10");
    }

    #[test]
    fn grays_are_achromatic() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            let hsl = rgb_to_hsl(v, v, v);
            assert_eq!((hsl.h, hsl.s), (0, 0), "gray {v}");
        }
        assert_eq!(rgb_to_hsl(255, 255, 255).l, 100);
        assert_eq!(rgb_to_hsl(0, 0, 0).l, 0);
    }

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
        assert_eq!(rgb_to_hsl(0x33, 0x66, 0xCC), Hsl::new(220, 60, 50));
    }

    #[test]
    fn hue_near_full_turn_wraps_to_zero() {
        assert_eq!(rgb_to_hsl(255, 0, 1).h, 0);
    }

    #[test]
    fn sector_anchors() {
        let expected = [
            (0.0, "#FF0000"),
            (60.0, "#FFFF00"),
            (120.0, "#00FF00"),
            (180.0, "#00FFFF"),
            (240.0, "#0000FF"),
            (300.0, "#FF00FF"),
        ];
        for (h, hex) in expected {
            assert_eq!(hsl_to_hex(h, 100.0, 50.0), hex, "hue {h}");
        }
    }

    #[test]
    fn out_of_range_hue_wraps() {
        assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(480.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(-1e-20, 100.0, 50.0), "#FF0000");
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(hsl_to_hex(200.0, 80.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(200.0, 80.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(33.0, 0.0, 50.0), "#808080");
    }

    #[test]
    fn hsl_round_trip_stays_close() {
        for hex in ["#3366CC", "#FF8800", "#10A050", "#C0C0C0", "#8B4513"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            let back = hex_to_rgb(&hsl_to_hex(
                f64::from(hsl.h),
                f64::from(hsl.s),
                f64::from(hsl.l),
            ))
            .unwrap();
            for (a, b) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
                assert!(a.abs_diff(b) <= 3, "{hex}: {a} vs {b}");
            }
        }
    }
}
