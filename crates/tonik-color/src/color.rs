// SPDX-License-Identifier: MIT
//
// tonik color types — Rgb, Hsl, AlphaColor.
//
// Colors travel as lowercase hex strings on the wire (palette JSON in,
// theme JSON out) and as packed byte structs in memory. Every transform
// round-trips through HSL: parse → to_hsl → scale one component →
// from_hsl. The formulas match the CSS3 reference conversion with all
// of h, s, l expressed as fractions in [0, 1].

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to interpret a string as a color.
///
/// Malformed input is a caller contract violation — no repair is
/// attempted here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not exactly six hex digits (optionally `#`-prefixed).
    #[error("invalid color format: {0:?} (expected 6 hex digits)")]
    InvalidFormat(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit RGB color.
///
/// Canonical text form is six lowercase hex digits with a leading `#`.
/// Parsing accepts any case and an optional `#`; formatting always
/// normalizes to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` literal.
    ///
    /// Used for released default tables, where `Rgb::of(0x1a1b26)` reads
    /// like the hex string it stands for.
    #[inline]
    #[must_use]
    pub const fn of(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Parse a six-hex-digit color string.
    ///
    /// Accepts an optional leading `#` and either case: `1a1b26`,
    /// `#1A1B26`. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for wrong length or
    /// non-hex characters.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(s.to_string()));
        }
        // Length and digit checks above make these infallible.
        let parse_pair = |range| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        Ok(Self {
            r: parse_pair(0..2),
            g: parse_pair(2..4),
            b: parse_pair(4..6),
        })
    }

    // ─── HSL conversion ──────────────────────────────────────────────────

    /// Convert to HSL. Achromatic colors (all channels equal) yield
    /// hue 0, saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

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

        Hsl { h: h / 6.0, s, l }
    }

    /// Convert from HSL. Saturation 0 produces a pure gray with all
    /// channels equal to the lightness.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        if s <= 0.0 {
            let v = channel(l);
            return Self { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: channel(hue_to_rgb(p, q, h)),
            b: channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }

    // ─── Transforms ──────────────────────────────────────────────────────

    /// Scale lightness by `factor`, clamped to [0, 1].
    ///
    /// `factor > 1` lightens, `factor < 1` darkens, `1.0` is identity
    /// up to rounding. Monotone in `factor`.
    #[must_use]
    pub fn adjust_lightness(self, factor: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l * factor).clamp(0.0, 1.0);
        Self::from_hsl(hsl)
    }

    /// Scale saturation by `factor`, clamped to [0, 1].
    ///
    /// Achromatic colors are returned unchanged — there is no hue to
    /// intensify.
    #[must_use]
    pub fn saturate(self, factor: f64) -> Self {
        let mut hsl = self.to_hsl();
        if hsl.s <= 0.0 {
            return self;
        }
        hsl.s = (hsl.s * factor).clamp(0.0, 1.0);
        Self::from_hsl(hsl)
    }

    /// Perceived luminance over the 8-bit channels, in [0, 255].
    ///
    /// Rec. 601 weights: 0.299 R + 0.587 G + 0.114 B, computed with
    /// integer weights so grays land on exact values. `#808080` is
    /// exactly 128, which matters at the dark/light boundary.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let weighted =
            299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        f64::from(weighted) / 1000.0
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Attach an 8-bit alpha channel.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> AlphaColor {
        AlphaColor { color: self, alpha }
    }

    /// Attach a fully opaque alpha channel (`ff`).
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> AlphaColor {
        self.with_alpha(0xff)
    }
}

/// Resolve one RGB channel from the intermediate HSL terms.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Round a unit-range channel value to 8 bits.
fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RgbVisitor;

        impl Visitor<'_> for RgbVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 6-hex-digit color string like \"#1a1b26\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb, E> {
                Rgb::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(RgbVisitor)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space, all components in [0, 1].
///
/// Hue is a fraction of a full turn (0.0 = red, 1/3 = green, 2/3 = blue),
/// matching the convention of the conversion formulas rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// ─── AlphaColor ──────────────────────────────────────────────────────────────

/// An RGB color with an 8-bit alpha channel — `#rrggbbaa` on the wire.
///
/// Alpha 0 is the transparent sentinel: it always serializes as
/// `#00000000`, regardless of the base color, so "no border" values
/// compare and diff identically wherever they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphaColor {
    pub color: Rgb,
    pub alpha: u8,
}

impl AlphaColor {
    /// The fully transparent sentinel.
    pub const TRANSPARENT: Self = Self {
        color: Rgb::new(0, 0, 0),
        alpha: 0,
    };

    /// Create an alpha color from a base color and alpha byte.
    #[inline]
    #[must_use]
    pub const fn new(color: Rgb, alpha: u8) -> Self {
        Self { color, alpha }
    }

    /// Whether this is the transparent sentinel.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.alpha == 0
    }
}

impl fmt::Display for AlphaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            return f.write_str("#00000000");
        }
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

impl Serialize for AlphaColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb(s: &str) -> Rgb {
        Rgb::parse(s).unwrap()
    }

    // ── Parsing and formatting ──────────────────────────────────────

    #[test]
    fn parse_plain() {
        assert_eq!(rgb("1a1b26"), Rgb::new(0x1a, 0x1b, 0x26));
    }

    #[test]
    fn parse_with_hash() {
        assert_eq!(rgb("#7aa2f7"), Rgb::new(0x7a, 0xa2, 0xf7));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(rgb("#C0CAF5"), rgb("#c0caf5"));
    }

    #[test]
    fn parse_rejects_short() {
        assert!(matches!(
            Rgb::parse("#fff"),
            Err(ColorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parse_rejects_long() {
        assert!(Rgb::parse("#1a1b26ff").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(Rgb::parse("#1a1bzz").is_err());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(rgb("#C0CAF5").to_string(), "#c0caf5");
    }

    #[test]
    fn of_matches_parse() {
        assert_eq!(Rgb::of(0x7aa2f7), rgb("#7aa2f7"));
    }

    // ── HSL conversion ──────────────────────────────────────────────

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let hsl = rgb("#808080").to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn pure_red_hue() {
        let hsl = rgb("#ff0000").to_hsl();
        assert!(hsl.h.abs() < 1e-9, "red hue: {}", hsl.h);
        assert!((hsl.s - 1.0).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pure_green_hue() {
        let hsl = rgb("#00ff00").to_hsl();
        assert!((hsl.h - 1.0 / 3.0).abs() < 1e-9, "green hue: {}", hsl.h);
    }

    #[test]
    fn from_hsl_zero_saturation_is_gray() {
        let c = Rgb::from_hsl(Hsl { h: 0.7, s: 0.0, l: 0.5 });
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn roundtrip_within_one() {
        for s in ["#7aa2f7", "#1a1b26", "#f7768e", "#9ece6a", "#fff8f7", "#000001"] {
            let c = rgb(s);
            let back = Rgb::from_hsl(c.to_hsl());
            assert!(c.r.abs_diff(back.r) <= 1, "{s} r: {} vs {}", c.r, back.r);
            assert!(c.g.abs_diff(back.g) <= 1, "{s} g: {} vs {}", c.g, back.g);
            assert!(c.b.abs_diff(back.b) <= 1, "{s} b: {} vs {}", c.b, back.b);
        }
    }

    // ── adjust_lightness ────────────────────────────────────────────

    #[test]
    fn identity_factor_within_one() {
        for s in ["#7aa2f7", "#1a1b26", "#c0caf5", "#565f89", "#ffffff"] {
            let c = rgb(s);
            let same = c.adjust_lightness(1.0);
            assert!(c.r.abs_diff(same.r) <= 1, "{s} drifted: {c} vs {same}");
            assert!(c.g.abs_diff(same.g) <= 1);
            assert!(c.b.abs_diff(same.b) <= 1);
        }
    }

    #[test]
    fn lightness_monotone_in_factor() {
        let c = rgb("#7aa2f7");
        let mut prev = c.adjust_lightness(0.2).to_hsl().l;
        for factor in [0.5, 0.8, 1.0, 1.2, 1.5, 2.0] {
            let l = c.adjust_lightness(factor).to_hsl().l;
            assert!(l >= prev, "lightness dropped at factor {factor}: {l} < {prev}");
            prev = l;
        }
    }

    #[test]
    fn lighten_clamps_at_white() {
        assert_eq!(rgb("#ffffff").adjust_lightness(2.0), rgb("#ffffff"));
    }

    #[test]
    fn darken_black_stays_black() {
        assert_eq!(rgb("#000000").adjust_lightness(0.5), rgb("#000000"));
    }

    #[test]
    fn darken_actually_darkens() {
        let c = rgb("#7aa2f7");
        assert!(c.adjust_lightness(0.7).to_hsl().l < c.to_hsl().l);
    }

    // ── saturate ────────────────────────────────────────────────────

    #[test]
    fn saturate_achromatic_unchanged() {
        let gray = rgb("#808080");
        assert_eq!(gray.saturate(1.5), gray);
    }

    #[test]
    fn saturate_increases_saturation() {
        let c = rgb("#9ece6a");
        assert!(c.saturate(1.5).to_hsl().s > c.to_hsl().s);
    }

    #[test]
    fn saturate_clamps_at_full() {
        let c = rgb("#ff0000");
        assert_eq!(c.saturate(3.0).to_hsl().s, 1.0);
    }

    // ── luminance ───────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(rgb("#000000").luminance(), 0.0);
    }

    #[test]
    fn luminance_white_is_255() {
        assert!((rgb("#ffffff").luminance() - 255.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_mid_gray_is_128() {
        assert!((rgb("#808080").luminance() - 128.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_green_outweighs_blue() {
        assert!(rgb("#00ff00").luminance() > rgb("#0000ff").luminance());
    }

    // ── AlphaColor ──────────────────────────────────────────────────

    #[test]
    fn alpha_display_has_eight_digits() {
        let a = rgb("#c0caf5").opaque();
        assert_eq!(a.to_string(), "#c0caf5ff");
    }

    #[test]
    fn alpha_display_low_opacity() {
        assert_eq!(rgb("#7aa2f7").with_alpha(0x1a).to_string(), "#7aa2f71a");
    }

    #[test]
    fn with_alpha_is_idempotent() {
        let a = rgb("#7aa2f7").with_alpha(0x66);
        assert_eq!(a.color.with_alpha(0x66), a);
    }

    #[test]
    fn transparent_ignores_base_color() {
        let from_red = rgb("#ff0000").with_alpha(0);
        assert_eq!(from_red.to_string(), "#00000000");
        assert_eq!(AlphaColor::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn transparent_flag() {
        assert!(AlphaColor::TRANSPARENT.is_transparent());
        assert!(!rgb("#000000").opaque().is_transparent());
    }
}
