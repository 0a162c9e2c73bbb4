//! Input palette — the role colors the generator starts from.
//!
//! Every role is optional: the palette JSON a wallpaper pipeline emits
//! may carry any subset of the Material color roles, and everything
//! missing falls back to a released default. Classification into dark
//! or light happens exactly once, from the `surface` role, and the
//! resulting [`Appearance`] is passed explicitly to every later stage.

use serde::Deserialize;
use tonik_color::Rgb;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The Material-style role palette, as deserialized from JSON.
///
/// Unknown keys in the input are ignored; absent roles stay `None` and
/// resolve to defaults downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Option<Rgb>,
    pub secondary: Option<Rgb>,
    pub tertiary: Option<Rgb>,
    pub error: Option<Rgb>,
    pub on_primary: Option<Rgb>,
    pub surface: Option<Rgb>,
    pub surface_container_low: Option<Rgb>,
    pub surface_container: Option<Rgb>,
    pub surface_container_high: Option<Rgb>,
    pub surface_container_highest: Option<Rgb>,
    pub on_surface: Option<Rgb>,
    pub on_surface_variant: Option<Rgb>,
    pub outline: Option<Rgb>,
    pub outline_variant: Option<Rgb>,
    pub inverse_surface: Option<Rgb>,
    pub inverse_on_surface: Option<Rgb>,
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Whether the supplied palette is a dark or a light scheme.
///
/// Decided once from the surface luminance and threaded through tone
/// derivation, terminal mapping, and assembly as an explicit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Luminance below this classifies a surface as dark.
    const DARK_THRESHOLD: f64 = 128.0;

    /// Classify a palette by its `surface` role (fallback `#000000`).
    ///
    /// Exactly mid-gray (`#808080`, luminance 128) classifies Light.
    #[must_use]
    pub fn classify(palette: &Palette) -> Self {
        let surface = palette.surface.unwrap_or(Rgb::new(0, 0, 0));
        if surface.luminance() < Self::DARK_THRESHOLD {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The `appearance` field value in the output document.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

// ---------------------------------------------------------------------------
// RoleColors
// ---------------------------------------------------------------------------

/// The accent roles every theme variant shares, resolved against the
/// released defaults. Unlike the tone scales these do not flip between
/// appearances; the style builders shade them per appearance instead.
#[derive(Debug, Clone, Copy)]
pub struct RoleColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub error: Rgb,
    pub on_primary: Rgb,
}

impl RoleColors {
    pub const DEFAULT_PRIMARY: Rgb = Rgb::of(0x7aa2f7);
    pub const DEFAULT_SECONDARY: Rgb = Rgb::of(0xbb9af7);
    pub const DEFAULT_TERTIARY: Rgb = Rgb::of(0x9ece6a);
    pub const DEFAULT_ERROR: Rgb = Rgb::of(0xf7768e);
    pub const DEFAULT_ON_PRIMARY: Rgb = Rgb::of(0xffffff);

    /// Resolve the accent roles, filling gaps from the defaults.
    #[must_use]
    pub fn resolve(palette: &Palette) -> Self {
        Self {
            primary: palette.primary.unwrap_or(Self::DEFAULT_PRIMARY),
            secondary: palette.secondary.unwrap_or(Self::DEFAULT_SECONDARY),
            tertiary: palette.tertiary.unwrap_or(Self::DEFAULT_TERTIARY),
            error: palette.error.unwrap_or(Self::DEFAULT_ERROR),
            on_primary: palette.on_primary.unwrap_or(Self::DEFAULT_ON_PRIMARY),
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

    fn palette_with_surface(hex: &str) -> Palette {
        Palette {
            surface: Some(hex.parse().unwrap()),
            ..Palette::default()
        }
    }

    // ── Classification ──────────────────────────────────────────────

    #[test]
    fn black_surface_is_dark() {
        assert_eq!(
            Appearance::classify(&palette_with_surface("#000000")),
            Appearance::Dark
        );
    }

    #[test]
    fn white_surface_is_light() {
        assert_eq!(
            Appearance::classify(&palette_with_surface("#ffffff")),
            Appearance::Light
        );
    }

    #[test]
    fn mid_gray_boundary_is_light() {
        // Luminance of #808080 is exactly 128, which is not < 128.
        assert_eq!(
            Appearance::classify(&palette_with_surface("#808080")),
            Appearance::Light
        );
    }

    #[test]
    fn missing_surface_is_dark() {
        assert_eq!(Appearance::classify(&Palette::default()), Appearance::Dark);
    }

    #[test]
    fn tokyo_night_surface_is_dark() {
        assert_eq!(
            Appearance::classify(&palette_with_surface("#1a1b26")),
            Appearance::Dark
        );
    }

    #[test]
    fn appearance_names() {
        assert_eq!(Appearance::Dark.name(), "dark");
        assert_eq!(Appearance::Light.name(), "light");
    }

    // ── Deserialization ─────────────────────────────────────────────

    #[test]
    fn palette_from_partial_json() {
        let palette: Palette =
            serde_json::from_str(r##"{"primary": "#7AA2F7", "unknown_role": "#123456"}"##)
                .unwrap();
        assert_eq!(palette.primary, Some(Rgb::of(0x7aa2f7)));
        assert_eq!(palette.surface, None);
    }

    #[test]
    fn palette_from_empty_json() {
        let palette: Palette = serde_json::from_str("{}").unwrap();
        assert!(palette.on_surface.is_none());
    }

    // ── Role resolution ─────────────────────────────────────────────

    #[test]
    fn roles_default_when_missing() {
        let roles = RoleColors::resolve(&Palette::default());
        assert_eq!(roles.primary, Rgb::of(0x7aa2f7));
        assert_eq!(roles.secondary, Rgb::of(0xbb9af7));
        assert_eq!(roles.tertiary, Rgb::of(0x9ece6a));
        assert_eq!(roles.error, Rgb::of(0xf7768e));
        assert_eq!(roles.on_primary, Rgb::of(0xffffff));
    }

    #[test]
    fn roles_prefer_palette_values() {
        let palette = Palette {
            primary: Some(Rgb::of(0x112233)),
            ..Palette::default()
        };
        let roles = RoleColors::resolve(&palette);
        assert_eq!(roles.primary, Rgb::of(0x112233));
        assert_eq!(roles.error, RoleColors::DEFAULT_ERROR);
    }
}
