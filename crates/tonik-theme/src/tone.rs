//! Tone scales — the surface/foreground ramps each variant is built on.
//!
//! Every theme family carries both a dark and a light scale. The scale
//! matching the palette's own appearance is read straight from its
//! roles (with per-role defaults); the opposite scale is synthesized
//! from `inverse_surface` by walking a fixed factor sequence, so the
//! elevation levels stay monotonically ordered in both directions.

use tonik_color::Rgb;

use crate::palette::{Appearance, Palette};

// ─── Released factor sequences for inverted-scale elevations ─────────────────

/// Darkening steps from the inverse surface when the palette is dark
/// and the light scale must be synthesized.
pub const INVERTED_DARKEN: [f64; 4] = [0.97, 0.94, 0.91, 0.88];

/// Lightening steps from the inverse surface when the palette is light
/// and the dark scale must be synthesized.
pub const INVERTED_LIGHTEN: [f64; 4] = [1.15, 1.35, 1.55, 1.75];

// ─── Per-role defaults (one table per appearance) ────────────────────────────

struct ScaleDefaults {
    surface: Rgb,
    surface_low: Rgb,
    surface_std: Rgb,
    surface_high: Rgb,
    surface_highest: Rgb,
    on_surface: Rgb,
    on_surface_variant: Rgb,
    outline: Rgb,
    outline_variant: Rgb,
    inverse_surface: Rgb,
    inverse_on_surface: Rgb,
}

const DARK_DEFAULTS: ScaleDefaults = ScaleDefaults {
    surface: Rgb::of(0x1a1b26),
    surface_low: Rgb::of(0x24283b),
    surface_std: Rgb::of(0x414868),
    surface_high: Rgb::of(0x565f89),
    surface_highest: Rgb::of(0x6b7089),
    on_surface: Rgb::of(0xc0caf5),
    on_surface_variant: Rgb::of(0x9aa5ce),
    outline: Rgb::of(0x565f89),
    outline_variant: Rgb::of(0x534341),
    inverse_surface: Rgb::of(0xf1dedc),
    inverse_on_surface: Rgb::of(0x392e2c),
};

const LIGHT_DEFAULTS: ScaleDefaults = ScaleDefaults {
    surface: Rgb::of(0xfff8f7),
    surface_low: Rgb::of(0xfff0f2),
    surface_std: Rgb::of(0xfbeaec),
    surface_high: Rgb::of(0xf5e4e6),
    surface_highest: Rgb::of(0xefdee0),
    on_surface: Rgb::of(0x22191b),
    on_surface_variant: Rgb::of(0x514346),
    outline: Rgb::of(0x847376),
    outline_variant: Rgb::of(0xd6c2c4),
    inverse_surface: Rgb::of(0x382e30),
    inverse_on_surface: Rgb::of(0xfeedef),
};

// ---------------------------------------------------------------------------
// ToneScale
// ---------------------------------------------------------------------------

/// One appearance's complete tonal ramp: the base surface, four
/// elevation levels ordered away from it, and the foreground/outline
/// roles read against them.
#[derive(Debug, Clone, Copy)]
pub struct ToneScale {
    pub surface: Rgb,
    pub surface_low: Rgb,
    pub surface_std: Rgb,
    pub surface_high: Rgb,
    pub surface_highest: Rgb,
    pub on_surface: Rgb,
    pub on_surface_variant: Rgb,
    pub outline: Rgb,
    pub outline_variant: Rgb,
}

impl ToneScale {
    /// Build the scale matching the palette's own appearance, reading
    /// its surface and elevation roles directly.
    fn native(palette: &Palette, defaults: &ScaleDefaults) -> Self {
        Self {
            surface: palette.surface.unwrap_or(defaults.surface),
            surface_low: palette
                .surface_container_low
                .unwrap_or(defaults.surface_low),
            surface_std: palette.surface_container.unwrap_or(defaults.surface_std),
            surface_high: palette
                .surface_container_high
                .unwrap_or(defaults.surface_high),
            surface_highest: palette
                .surface_container_highest
                .unwrap_or(defaults.surface_highest),
            on_surface: palette.on_surface.unwrap_or(defaults.on_surface),
            on_surface_variant: palette
                .on_surface_variant
                .unwrap_or(defaults.on_surface_variant),
            outline: palette.outline.unwrap_or(defaults.outline),
            outline_variant: palette.outline_variant.unwrap_or(defaults.outline_variant),
        }
    }

    /// Synthesize the opposite scale from the inverse-surface roles,
    /// stepping the elevations through `factors`.
    fn inverted(palette: &Palette, defaults: &ScaleDefaults, factors: [f64; 4]) -> Self {
        let surface = palette.inverse_surface.unwrap_or(defaults.inverse_surface);
        let variant = palette.outline_variant.unwrap_or(defaults.outline_variant);
        Self {
            surface,
            surface_low: surface.adjust_lightness(factors[0]),
            surface_std: surface.adjust_lightness(factors[1]),
            surface_high: surface.adjust_lightness(factors[2]),
            surface_highest: surface.adjust_lightness(factors[3]),
            on_surface: palette
                .inverse_on_surface
                .unwrap_or(defaults.inverse_on_surface),
            on_surface_variant: variant,
            outline: palette.outline.unwrap_or(defaults.outline),
            outline_variant: variant,
        }
    }
}

// ---------------------------------------------------------------------------
// ToneScales
// ---------------------------------------------------------------------------

/// Both appearances' scales, derived together so one palette always
/// yields a matched dark/light pair.
#[derive(Debug, Clone, Copy)]
pub struct ToneScales {
    pub dark: ToneScale,
    pub light: ToneScale,
}

impl ToneScales {
    /// Derive both scales from one palette and its classification.
    #[must_use]
    pub fn derive(palette: &Palette, appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self {
                dark: ToneScale::native(palette, &DARK_DEFAULTS),
                light: ToneScale::inverted(palette, &DARK_DEFAULTS, INVERTED_DARKEN),
            },
            Appearance::Light => Self {
                dark: ToneScale::inverted(palette, &LIGHT_DEFAULTS, INVERTED_LIGHTEN),
                light: ToneScale::native(palette, &LIGHT_DEFAULTS),
            },
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

    fn lightness(c: Rgb) -> f64 {
        c.to_hsl().l
    }

    fn elevations(scale: &ToneScale) -> [f64; 5] {
        [
            lightness(scale.surface),
            lightness(scale.surface_low),
            lightness(scale.surface_std),
            lightness(scale.surface_high),
            lightness(scale.surface_highest),
        ]
    }

    // ── Native scales ───────────────────────────────────────────────

    #[test]
    fn dark_palette_native_defaults() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Dark);
        assert_eq!(scales.dark.surface, Rgb::of(0x1a1b26));
        assert_eq!(scales.dark.on_surface, Rgb::of(0xc0caf5));
        assert_eq!(scales.dark.outline, Rgb::of(0x565f89));
    }

    #[test]
    fn light_palette_native_defaults() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Light);
        assert_eq!(scales.light.surface, Rgb::of(0xfff8f7));
        assert_eq!(scales.light.on_surface, Rgb::of(0x22191b));
        assert_eq!(scales.light.outline_variant, Rgb::of(0xd6c2c4));
    }

    #[test]
    fn native_scale_reads_palette_roles() {
        let palette = Palette {
            surface: Some(Rgb::of(0x101010)),
            surface_container: Some(Rgb::of(0x303030)),
            ..Palette::default()
        };
        let scales = ToneScales::derive(&palette, Appearance::Dark);
        assert_eq!(scales.dark.surface, Rgb::of(0x101010));
        assert_eq!(scales.dark.surface_std, Rgb::of(0x303030));
        // Unset roles still fall back.
        assert_eq!(scales.dark.surface_low, Rgb::of(0x24283b));
    }

    // ── Inverted scales ─────────────────────────────────────────────

    #[test]
    fn dark_palette_inverts_to_light_scale() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Dark);
        assert_eq!(scales.light.surface, Rgb::of(0xf1dedc));
        assert_eq!(scales.light.on_surface, Rgb::of(0x392e2c));
        // Synthesized elevations darken away from the surface.
        let e = elevations(&scales.light);
        for pair in e.windows(2) {
            assert!(pair[1] <= pair[0], "light elevations not darkening: {e:?}");
        }
    }

    #[test]
    fn light_palette_inverts_to_dark_scale() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Light);
        assert_eq!(scales.dark.surface, Rgb::of(0x382e30));
        assert_eq!(scales.dark.on_surface, Rgb::of(0xfeedef));
        // Synthesized elevations lighten away from the surface.
        let e = elevations(&scales.dark);
        for pair in e.windows(2) {
            assert!(pair[1] >= pair[0], "dark elevations not lightening: {e:?}");
        }
    }

    #[test]
    fn inverted_scale_uses_outline_roles() {
        let palette = Palette {
            outline: Some(Rgb::of(0xaabbcc)),
            outline_variant: Some(Rgb::of(0x112233)),
            ..Palette::default()
        };
        let scales = ToneScales::derive(&palette, Appearance::Dark);
        assert_eq!(scales.light.outline, Rgb::of(0xaabbcc));
        assert_eq!(scales.light.on_surface_variant, Rgb::of(0x112233));
        assert_eq!(scales.light.outline_variant, Rgb::of(0x112233));
    }

    // ── Monotonic elevation defaults ────────────────────────────────

    #[test]
    fn default_dark_elevations_are_monotone() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Dark);
        let e = elevations(&scales.dark);
        for pair in e.windows(2) {
            assert!(pair[1] >= pair[0], "dark defaults out of order: {e:?}");
        }
    }

    #[test]
    fn default_light_elevations_are_monotone() {
        let scales = ToneScales::derive(&Palette::default(), Appearance::Light);
        let e = elevations(&scales.light);
        for pair in e.windows(2) {
            assert!(pair[1] <= pair[0], "light defaults out of order: {e:?}");
        }
    }
}
