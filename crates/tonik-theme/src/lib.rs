//! # tonik-theme — palette-to-theme derivation engine
//!
//! Expands a small Material-style role palette (plus optional 16-slot
//! terminal colors) into a complete Zed theme family with matched dark
//! and light variants.
//!
//! # Architecture
//!
//! ```text
//! Palette (role colors) + TermColors (ANSI slots)
//!     │
//!     ▼
//! palette.rs:  classify appearance, resolve accent roles
//!     │
//!     ▼
//! tone.rs:     derive dark + light tone scales (native + inverted)
//!     │
//!     ▼
//! terminal.rs: map 16 slots to 8 hues × {normal, bright, dim}
//!     │
//!     ▼
//! style.rs / syntax.rs: per-appearance attribute and token tables
//!     │
//!     ▼
//! theme.rs:    assemble ThemeFamily, serialize to JSON
//! ```
//!
//! The whole pipeline is pure and single-pass: identical inputs always
//! serialize to byte-identical output. Every attribute map carries the
//! same key set in the same order for both appearances.

pub mod palette;
pub mod style;
pub mod syntax;
pub mod terminal;
pub mod theme;
pub mod tone;

pub use palette::{Appearance, Palette, RoleColors};
pub use terminal::{AnsiTable, TermColors};
pub use theme::ThemeFamily;
pub use tone::{ToneScale, ToneScales};
