//! Syntax token tables — one styled color per highlight category.
//!
//! Both appearances carry the identical 43 token names in the same
//! order. Most tokens are plain colors; a few carry a font style
//! (italic predictions, explicitly-normal link text) or a weight
//! (strong emphasis, titles). Null style and weight fields serialize
//! as literal `null`, matching the theme schema.

use indexmap::IndexMap;
use serde::Serialize;
use tonik_color::{AlphaColor, Rgb};

use crate::palette::RoleColors;
use crate::tone::ToneScale;

// ---------------------------------------------------------------------------
// Token styling
// ---------------------------------------------------------------------------

/// Font slant of a syntax token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// The style record of one syntax token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenStyle {
    pub color: AlphaColor,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<u16>,
}

impl TokenStyle {
    const fn plain(color: Rgb) -> Self {
        Self {
            color: color.opaque(),
            font_style: None,
            font_weight: None,
        }
    }

    const fn styled(color: Rgb, style: FontStyle) -> Self {
        Self {
            color: color.opaque(),
            font_style: Some(style),
            font_weight: None,
        }
    }

    const fn weighted(color: Rgb, weight: u16) -> Self {
        Self {
            color: color.opaque(),
            font_style: None,
            font_weight: Some(weight),
        }
    }
}

/// The ordered token table of one theme variant.
pub type SyntaxMap = IndexMap<&'static str, TokenStyle>;

pub const TOKEN_COUNT: usize = 43;

// ---------------------------------------------------------------------------
// Per-appearance tables
// ---------------------------------------------------------------------------

/// Build the dark variant's token table.
#[must_use]
pub fn dark(roles: &RoleColors, scale: &ToneScale) -> SyntaxMap {
    let RoleColors {
        primary,
        secondary,
        tertiary,
        error,
        ..
    } = *roles;
    let on_surface = scale.on_surface;
    let variant = scale.on_surface_variant;

    let mut map = SyntaxMap::with_capacity(TOKEN_COUNT);
    map.insert("attribute", TokenStyle::plain(primary));
    map.insert("boolean", TokenStyle::plain(tertiary));
    map.insert("comment", TokenStyle::plain(variant.adjust_lightness(0.7)));
    map.insert("comment.doc", TokenStyle::plain(variant.adjust_lightness(0.8)));
    map.insert("constant", TokenStyle::plain(tertiary.adjust_lightness(0.9)));
    map.insert("constructor", TokenStyle::plain(primary));
    map.insert("embedded", TokenStyle::plain(on_surface));
    map.insert("emphasis", TokenStyle::plain(primary));
    map.insert(
        "emphasis.strong",
        TokenStyle::weighted(tertiary.adjust_lightness(0.8), 700),
    );
    map.insert("enum", TokenStyle::plain(secondary));
    map.insert("function", TokenStyle::plain(primary));
    map.insert("hint", TokenStyle::plain(primary.adjust_lightness(0.7)));
    map.insert("keyword", TokenStyle::plain(secondary));
    map.insert("label", TokenStyle::plain(primary));
    map.insert("link_text", TokenStyle::styled(primary, FontStyle::Normal));
    map.insert("link_uri", TokenStyle::plain(secondary));
    map.insert("namespace", TokenStyle::plain(on_surface));
    map.insert("number", TokenStyle::plain(tertiary.adjust_lightness(0.8)));
    map.insert("operator", TokenStyle::plain(secondary));
    map.insert(
        "predictive",
        TokenStyle::styled(secondary.adjust_lightness(0.8), FontStyle::Italic),
    );
    map.insert("preproc", TokenStyle::plain(on_surface));
    map.insert("primary", TokenStyle::plain(on_surface));
    map.insert("property", TokenStyle::plain(primary.adjust_lightness(0.85)));
    map.insert("punctuation", TokenStyle::plain(on_surface));
    map.insert(
        "punctuation.bracket",
        TokenStyle::plain(on_surface.adjust_lightness(0.9)),
    );
    map.insert(
        "punctuation.delimiter",
        TokenStyle::plain(on_surface.adjust_lightness(0.9)),
    );
    map.insert(
        "punctuation.list_marker",
        TokenStyle::plain(primary.adjust_lightness(0.85)),
    );
    map.insert(
        "punctuation.markup",
        TokenStyle::plain(primary.adjust_lightness(0.85)),
    );
    map.insert(
        "punctuation.special",
        TokenStyle::plain(error.adjust_lightness(0.8)),
    );
    map.insert("selector", TokenStyle::plain(tertiary.adjust_lightness(0.9)));
    map.insert("selector.pseudo", TokenStyle::plain(primary));
    map.insert("string", TokenStyle::plain(tertiary));
    map.insert("string.escape", TokenStyle::plain(variant));
    map.insert("string.regex", TokenStyle::plain(tertiary));
    map.insert("string.special", TokenStyle::plain(tertiary));
    map.insert("string.special.symbol", TokenStyle::plain(tertiary));
    map.insert("tag", TokenStyle::plain(primary));
    map.insert("text.literal", TokenStyle::plain(tertiary));
    map.insert("title", TokenStyle::weighted(primary, 400));
    map.insert("type", TokenStyle::plain(secondary));
    map.insert("variable", TokenStyle::plain(on_surface));
    map.insert(
        "variable.special",
        TokenStyle::plain(tertiary.adjust_lightness(0.8)),
    );
    map.insert("variant", TokenStyle::plain(primary));
    map
}

/// Build the light variant's token table. Same names and order as
/// [`dark`]; accent roles are saturated instead of shaded.
#[must_use]
pub fn light(roles: &RoleColors, scale: &ToneScale) -> SyntaxMap {
    let RoleColors {
        primary,
        secondary,
        tertiary,
        error,
        ..
    } = *roles;
    let on_surface = scale.on_surface;
    let variant = scale.on_surface_variant;

    let primary = primary.saturate(1.5);
    let secondary = secondary.saturate(1.5);
    let tertiary = tertiary.saturate(1.5);
    let error = error.saturate(1.5);

    let mut map = SyntaxMap::with_capacity(TOKEN_COUNT);
    map.insert("attribute", TokenStyle::plain(primary));
    map.insert("boolean", TokenStyle::plain(tertiary));
    map.insert("comment", TokenStyle::plain(variant));
    map.insert("comment.doc", TokenStyle::plain(variant));
    map.insert("constant", TokenStyle::plain(tertiary));
    map.insert("constructor", TokenStyle::plain(primary));
    map.insert("embedded", TokenStyle::plain(on_surface));
    map.insert("emphasis", TokenStyle::plain(primary));
    map.insert("emphasis.strong", TokenStyle::weighted(tertiary, 700));
    map.insert("enum", TokenStyle::plain(secondary));
    map.insert("function", TokenStyle::plain(primary));
    map.insert("hint", TokenStyle::plain(primary));
    map.insert("keyword", TokenStyle::plain(secondary));
    map.insert("label", TokenStyle::plain(primary));
    map.insert("link_text", TokenStyle::styled(primary, FontStyle::Normal));
    map.insert("link_uri", TokenStyle::plain(secondary));
    map.insert("namespace", TokenStyle::plain(on_surface));
    map.insert("number", TokenStyle::plain(tertiary));
    map.insert("operator", TokenStyle::plain(secondary));
    map.insert("predictive", TokenStyle::styled(secondary, FontStyle::Italic));
    map.insert("preproc", TokenStyle::plain(on_surface));
    map.insert("primary", TokenStyle::plain(on_surface));
    map.insert("property", TokenStyle::plain(primary));
    map.insert("punctuation", TokenStyle::plain(on_surface));
    map.insert("punctuation.bracket", TokenStyle::plain(variant));
    map.insert("punctuation.delimiter", TokenStyle::plain(variant));
    map.insert("punctuation.list_marker", TokenStyle::plain(primary));
    map.insert("punctuation.markup", TokenStyle::plain(primary));
    map.insert("punctuation.special", TokenStyle::plain(error));
    map.insert("selector", TokenStyle::plain(tertiary));
    map.insert("selector.pseudo", TokenStyle::plain(primary));
    map.insert("string", TokenStyle::plain(tertiary));
    map.insert("string.escape", TokenStyle::plain(variant));
    map.insert("string.regex", TokenStyle::plain(tertiary));
    map.insert("string.special", TokenStyle::plain(tertiary));
    map.insert("string.special.symbol", TokenStyle::plain(tertiary));
    map.insert("tag", TokenStyle::plain(primary));
    map.insert("text.literal", TokenStyle::plain(tertiary));
    map.insert("title", TokenStyle::weighted(primary, 400));
    map.insert("type", TokenStyle::plain(secondary));
    map.insert("variable", TokenStyle::plain(on_surface));
    map.insert("variable.special", TokenStyle::plain(tertiary));
    map.insert("variant", TokenStyle::plain(primary));
    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Appearance, Palette};
    use crate::tone::ToneScales;
    use pretty_assertions::assert_eq;

    fn tables() -> (SyntaxMap, SyntaxMap) {
        let palette = Palette::default();
        let roles = RoleColors::resolve(&palette);
        let scales = ToneScales::derive(&palette, Appearance::Dark);
        (dark(&roles, &scales.dark), light(&roles, &scales.light))
    }

    #[test]
    fn token_count_is_stable() {
        let (dark_map, light_map) = tables();
        assert_eq!(dark_map.len(), TOKEN_COUNT);
        assert_eq!(light_map.len(), TOKEN_COUNT);
    }

    #[test]
    fn both_appearances_share_token_names() {
        let (dark_map, light_map) = tables();
        let dark_names: Vec<_> = dark_map.keys().collect();
        let light_names: Vec<_> = light_map.keys().collect();
        assert_eq!(dark_names, light_names);
    }

    #[test]
    fn strong_emphasis_is_bold() {
        let (dark_map, light_map) = tables();
        assert_eq!(dark_map["emphasis.strong"].font_weight, Some(700));
        assert_eq!(light_map["emphasis.strong"].font_weight, Some(700));
    }

    #[test]
    fn predictions_are_italic() {
        let (dark_map, _) = tables();
        assert_eq!(dark_map["predictive"].font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn link_text_is_explicitly_normal() {
        let (_, light_map) = tables();
        assert_eq!(light_map["link_text"].font_style, Some(FontStyle::Normal));
    }

    #[test]
    fn titles_carry_regular_weight() {
        let (dark_map, _) = tables();
        assert_eq!(dark_map["title"].font_weight, Some(400));
    }

    #[test]
    fn dark_special_variable_is_shaded_tertiary() {
        let (dark_map, _) = tables();
        let expected = RoleColors::DEFAULT_TERTIARY.adjust_lightness(0.8).opaque();
        assert_eq!(dark_map["variable.special"].color, expected);
    }

    #[test]
    fn null_fields_serialize_as_null() {
        let (dark_map, _) = tables();
        let json = serde_json::to_string(&dark_map["string"]).unwrap();
        assert!(json.contains("\"font_style\":null"), "{json}");
        assert!(json.contains("\"font_weight\":null"), "{json}");
    }

    #[test]
    fn style_names_serialize_lowercase() {
        let json = serde_json::to_string(&FontStyle::Italic).unwrap();
        assert_eq!(json, "\"italic\"");
    }
}
