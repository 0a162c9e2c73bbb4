//! Terminal palette mapping — 16 ANSI slots to 8 hues × 3 tiers.
//!
//! Input is a sparse set of the classic 16 terminal slots (0–7 normal,
//! 8–15 bright). Output is one complete record per canonical hue with
//! normal, bright, and dim tiers, derived slot-by-slot so every hue is
//! always fully populated even from empty input.
//!
//! The two appearances derive differently on purpose: a dark theme
//! brightens its bright tier and dims its dim tier, while a light theme
//! darkens every tier so the colors stay legible on pale backgrounds.

use tonik_color::Rgb;

use crate::palette::Appearance;

// ─── Released slot defaults (shared by both appearances) ─────────────────────

/// Fallback for each of the 16 slots when the input does not supply one.
pub const DEFAULT_SLOTS: [Rgb; 16] = [
    Rgb::of(0x000000), // 0: black
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0x555555), // 8: bright black
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
    Rgb::of(0xffffff),
];

// ─── Tier derivation factors ─────────────────────────────────────────────────

// Dark appearance: normal stays, bright lifts, dim drops.
const DARK_BRIGHT: f64 = 1.2;
const DARK_DIM: f64 = 0.7;
const DARK_DIM_BLACK: f64 = 0.6;

// Light appearance: everything darkens for contrast on pale surfaces.
const LIGHT_NORMAL: f64 = 0.85;
const LIGHT_NORMAL_WHITE: f64 = 0.5;
const LIGHT_BRIGHT: f64 = 0.75;
const LIGHT_BRIGHT_BLACK: f64 = 0.6;
const LIGHT_BRIGHT_WHITE: f64 = 0.3;
const LIGHT_DIM: f64 = 0.5;

// ---------------------------------------------------------------------------
// TermColors
// ---------------------------------------------------------------------------

/// The sparse 16-slot terminal palette parsed from input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermColors {
    slots: [Option<Rgb>; 16],
}

impl TermColors {
    /// Record a slot. Indices 16 and above are ignored.
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(color);
        }
    }

    /// Resolve a slot, falling back to [`DEFAULT_SLOTS`].
    #[must_use]
    pub fn slot(&self, index: usize) -> Rgb {
        self.slots[index].unwrap_or(DEFAULT_SLOTS[index])
    }

    /// How many slots the input actually supplied.
    #[must_use]
    pub fn supplied(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

// ---------------------------------------------------------------------------
// Hues and the derived table
// ---------------------------------------------------------------------------

/// The eight canonical ANSI hues, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl HueName {
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// The hue's name as it appears in `terminal.ansi.*` paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Slot index of the normal tier (0–7).
    #[must_use]
    pub const fn base_slot(self) -> usize {
        self as usize
    }

    /// Slot index of the bright tier (8–15).
    #[must_use]
    pub const fn bright_slot(self) -> usize {
        self.base_slot() + 8
    }
}

/// All three tiers of one hue.
#[derive(Debug, Clone, Copy)]
pub struct AnsiEntry {
    pub normal: Rgb,
    pub bright: Rgb,
    pub dim: Rgb,
}

/// The complete derived ANSI palette: one entry per hue, always all 24
/// colors regardless of how sparse the input was.
#[derive(Debug, Clone, Copy)]
pub struct AnsiTable {
    entries: [AnsiEntry; 8],
}

impl AnsiTable {
    /// Derive the full table for one appearance.
    #[must_use]
    pub fn derive(term: &TermColors, appearance: Appearance) -> Self {
        let entries = HueName::ALL.map(|hue| derive_entry(term, hue, appearance));
        Self { entries }
    }

    /// The entry for one hue.
    #[must_use]
    pub fn entry(&self, hue: HueName) -> AnsiEntry {
        self.entries[hue.base_slot()]
    }
}

/// Derive one hue's three tiers from its two input slots.
fn derive_entry(term: &TermColors, hue: HueName, appearance: Appearance) -> AnsiEntry {
    let base = term.slot(hue.base_slot());
    let bright = term.slot(hue.bright_slot());

    match appearance {
        Appearance::Dark => AnsiEntry {
            normal: base,
            bright: if hue == HueName::Black {
                bright
            } else {
                bright.adjust_lightness(DARK_BRIGHT)
            },
            dim: if hue == HueName::Black {
                base.adjust_lightness(DARK_DIM_BLACK)
            } else {
                base.adjust_lightness(DARK_DIM)
            },
        },
        Appearance::Light => AnsiEntry {
            normal: match hue {
                HueName::Black => base,
                HueName::White => base.adjust_lightness(LIGHT_NORMAL_WHITE),
                _ => base.adjust_lightness(LIGHT_NORMAL),
            },
            bright: match hue {
                HueName::Black => bright.adjust_lightness(LIGHT_BRIGHT_BLACK),
                HueName::White => bright.adjust_lightness(LIGHT_BRIGHT_WHITE),
                _ => bright.adjust_lightness(LIGHT_BRIGHT),
            },
            dim: base.adjust_lightness(LIGHT_DIM),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
