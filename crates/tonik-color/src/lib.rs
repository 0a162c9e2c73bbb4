//! # tonik-color — hex color math
//!
//! The small, dependency-light core of tonik: a 24-bit RGB color type,
//! RGB ↔ HSL conversion, and the two perceptual knobs the theme
//! generator turns (lightness and saturation scaling), plus the
//! 8-hex-digit alpha form used by theme attribute values.
//!
//! All color transforms happen in HSL with components in [0, 1]. The
//! conversions are the classic max/min formulas; channel values round
//! to nearest on the way back to 8-bit, so a factor-1.0 adjustment is
//! an identity up to ±1 per channel.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// The hue branch compares copies of the same f64 values.
#![allow(clippy::float_cmp)]

pub mod color;

pub use color::{AlphaColor, ColorError, Hsl, Rgb};
