//! Theme family assembly — from palette and terminal slots to the
//! serialized document.
//!
//! One palette always produces one family with exactly two variants,
//! dark then light, sharing the same attribute paths and token names.
//! Serialization is pretty JSON with stable key order: struct fields in
//! declaration order, maps in insertion order. Identical inputs yield
//! byte-identical output.

use serde::Serialize;
use tonik_color::AlphaColor;

use crate::palette::{Appearance, Palette, RoleColors};
use crate::style::{self, StyleMap};
use crate::syntax::{self, SyntaxMap};
use crate::terminal::{AnsiTable, TermColors};
use crate::tone::{ToneScale, ToneScales};

/// Schema the generated document declares.
pub const SCHEMA_URL: &str = "https://zed.dev/schema/themes/v0.2.0.json";

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// One collaborator cursor/selection color set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Player {
    pub cursor: AlphaColor,
    pub background: AlphaColor,
    pub selection: AlphaColor,
}

const SELECTION_ALPHA: u8 = 0x3d;

fn dark_players(roles: &RoleColors) -> Vec<Player> {
    let RoleColors {
        primary,
        secondary,
        tertiary,
        error,
        ..
    } = *roles;
    let seeds = [
        primary,
        error,
        tertiary.adjust_lightness(0.8),
        secondary,
        secondary.adjust_lightness(1.2),
        error.adjust_lightness(0.8),
        tertiary.adjust_lightness(0.9),
        primary.adjust_lightness(0.8),
    ];
    seeds
        .into_iter()
        .map(|c| Player {
            cursor: c.opaque(),
            background: c.opaque(),
            selection: c.with_alpha(SELECTION_ALPHA),
        })
        .collect()
}

fn light_players(roles: &RoleColors) -> Vec<Player> {
    let seeds = [roles.primary, roles.error, roles.tertiary, roles.secondary];
    seeds
        .into_iter()
        .map(|c| {
            let c = c.saturate(1.3);
            Player {
                cursor: c.opaque(),
                background: c.opaque(),
                selection: c.adjust_lightness(1.2).with_alpha(SELECTION_ALPHA),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Document shape
// ---------------------------------------------------------------------------

/// One variant's complete style: the flattened attribute map followed
/// by the player list and the syntax token table.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeStyle {
    #[serde(flatten)]
    pub attributes: StyleMap,
    pub players: Vec<Player>,
    pub syntax: SyntaxMap,
}

/// One appearance's entry in the family.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeVariant {
    pub name: String,
    pub appearance: &'static str,
    pub style: ThemeStyle,
}

/// The whole generated document.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub name: String,
    pub author: String,
    pub themes: Vec<ThemeVariant>,
}

impl ThemeFamily {
    /// Derive the full dark + light family from one palette and its
    /// terminal slots.
    #[must_use]
    pub fn generate(name: &str, author: &str, palette: &Palette, term: &TermColors) -> Self {
        let appearance = Appearance::classify(palette);
        let roles = RoleColors::resolve(palette);
        let scales = ToneScales::derive(palette, appearance);

        let dark = variant(
            format!("{name} Dark"),
            Appearance::Dark,
            &roles,
            &scales.dark,
            &AnsiTable::derive(term, Appearance::Dark),
        );
        let light = variant(
            format!("{name} Light"),
            Appearance::Light,
            &roles,
            &scales.light,
            &AnsiTable::derive(term, Appearance::Light),
        );

        Self {
            schema: SCHEMA_URL,
            name: name.to_owned(),
            author: author.to_owned(),
            themes: vec![dark, light],
        }
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures; the document itself is always
    /// serializable.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn variant(
    name: String,
    appearance: Appearance,
    roles: &RoleColors,
    scale: &ToneScale,
    ansi: &AnsiTable,
) -> ThemeVariant {
    let (attributes, players, tokens) = match appearance {
        Appearance::Dark => (
            style::dark(roles, scale, ansi),
            dark_players(roles),
            syntax::dark(roles, scale),
        ),
        Appearance::Light => (
            style::light(roles, scale, ansi),
            light_players(roles),
            syntax::light(roles, scale),
        ),
    };
    ThemeVariant {
        name,
        appearance: appearance.name(),
        style: ThemeStyle {
            attributes,
            players,
            syntax: tokens,
        },
    }
}

/// The family generated from an entirely default palette.
impl Default for ThemeFamily {
    fn default() -> Self {
        Self::generate(
            "Tonik",
            "tonik",
            &Palette::default(),
            &TermColors::default(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
