//! Theme attribute maps — one value per dotted UI path, per appearance.
//!
//! Both builders emit the identical key set in identical insertion
//! order; only the values differ. The dark builder shades roles with
//! lightness adjustments, the light builder additionally saturates
//! interactive and diagnostic colors so they hold up on pale surfaces.
//! A handful of paths carry the transparent sentinel, and the two
//! focused-border paths are explicitly null.

use indexmap::IndexMap;
use tonik_color::{AlphaColor, Rgb};

use crate::palette::RoleColors;
use crate::terminal::{AnsiTable, HueName};
use crate::tone::ToneScale;

/// One attribute value: a color with alpha, or an explicit null.
pub type StyleValue = Option<AlphaColor>;

/// The ordered attribute map of one theme variant.
pub type StyleMap = IndexMap<String, StyleValue>;

// 116 fixed paths + 24 terminal.ansi entries.
const ATTRIBUTE_COUNT: usize = 140;

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

struct Attrs {
    map: StyleMap,
}

impl Attrs {
    fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(ATTRIBUTE_COUNT),
        }
    }

    fn put(&mut self, path: &str, color: Rgb, alpha: u8) {
        self.map.insert(path.to_owned(), Some(color.with_alpha(alpha)));
    }

    fn opaque(&mut self, path: &str, color: Rgb) {
        self.put(path, color, 0xff);
    }

    fn transparent(&mut self, path: &str) {
        self.map.insert(path.to_owned(), Some(AlphaColor::TRANSPARENT));
    }

    fn unset(&mut self, path: &str) {
        self.map.insert(path.to_owned(), None);
    }

    /// Append the 24 `terminal.ansi.*` paths, hue-major.
    fn ansi(&mut self, table: &AnsiTable) {
        for hue in HueName::ALL {
            let entry = table.entry(hue);
            self.opaque(&format!("terminal.ansi.{}", hue.name()), entry.normal);
            self.opaque(&format!("terminal.ansi.bright_{}", hue.name()), entry.bright);
            self.opaque(&format!("terminal.ansi.dim_{}", hue.name()), entry.dim);
        }
    }

    fn finish(self) -> StyleMap {
        self.map
    }
}

// ---------------------------------------------------------------------------
// Dark variant
// ---------------------------------------------------------------------------

/// Build the dark variant's attribute map.
#[must_use]
pub fn dark(roles: &RoleColors, scale: &ToneScale, ansi: &AnsiTable) -> StyleMap {
    let RoleColors {
        primary,
        secondary,
        tertiary,
        error,
        ..
    } = *roles;
    let ToneScale {
        surface,
        surface_low,
        surface_std,
        surface_high,
        on_surface,
        on_surface_variant,
        outline,
        ..
    } = *scale;

    let mut a = Attrs::new();

    a.opaque("border", outline);
    a.opaque("border.variant", surface_low.adjust_lightness(0.8));
    a.opaque("border.focused", primary);
    a.opaque("border.selected", primary.adjust_lightness(0.7));
    a.transparent("border.transparent");
    a.opaque("border.disabled", outline.adjust_lightness(0.5));
    a.opaque("elevated_surface.background", surface_low);
    a.opaque("surface.background", surface_low);
    a.opaque("background", surface);
    a.opaque("element.background", surface_low);
    a.opaque("element.hover", surface_std);
    a.opaque("element.active", surface_high);
    a.opaque("element.selected", surface_high);
    a.opaque("element.disabled", surface_low);
    a.put("drop_target.background", primary, 0x80);
    a.transparent("ghost_element.background");
    a.opaque("ghost_element.hover", surface_std);
    a.opaque("ghost_element.active", surface_high);
    a.opaque("ghost_element.selected", surface_high);
    a.opaque("ghost_element.disabled", surface_low);
    a.opaque("text", on_surface);
    a.opaque("text.muted", on_surface_variant);
    a.opaque("text.placeholder", on_surface_variant.adjust_lightness(0.7));
    a.opaque("text.disabled", on_surface_variant.adjust_lightness(0.6));
    a.opaque("text.accent", primary);
    a.opaque("icon", on_surface);
    a.opaque("icon.muted", on_surface_variant);
    a.opaque("icon.disabled", on_surface_variant.adjust_lightness(0.6));
    a.opaque("icon.placeholder", on_surface_variant);
    a.opaque("icon.accent", primary);
    a.opaque("status_bar.background", surface);
    a.opaque("title_bar.background", surface);
    a.opaque("title_bar.inactive_background", surface_low);
    a.opaque("toolbar.background", surface_low);
    a.opaque("tab_bar.background", surface_low);
    a.opaque("tab.inactive_background", surface_low);
    a.opaque("tab.active_background", surface.adjust_lightness(0.9));
    a.put("search.match_background", primary, 0x66);
    a.put("search.active_match_background", tertiary, 0x66);
    a.opaque("panel.background", surface_low);
    a.unset("panel.focused_border");
    a.unset("pane.focused_border");
    a.put("scrollbar.thumb.background", on_surface_variant, 0x4c);
    a.opaque("scrollbar.thumb.hover_background", surface_high);
    a.opaque("scrollbar.thumb.border", surface_std);
    a.transparent("scrollbar.track.background");
    a.opaque("scrollbar.track.border", surface_std);
    a.opaque("editor.foreground", on_surface);
    a.opaque("editor.background", surface);
    a.opaque("editor.gutter.background", surface);
    a.opaque("editor.subheader.background", surface_low);
    a.put("editor.active_line.background", surface_low, 0xbf);
    a.opaque("editor.highlighted_line.background", surface_std);
    a.opaque("editor.line_number", on_surface_variant);
    a.opaque("editor.active_line_number", on_surface);
    a.opaque("editor.hover_line_number", on_surface.adjust_lightness(1.1));
    a.opaque("editor.invisible", on_surface_variant);
    a.put("editor.wrap_guide", on_surface_variant, 0x0d);
    a.put("editor.active_wrap_guide", on_surface_variant, 0x1a);
    a.put("editor.document_highlight.read_background", primary, 0x1a);
    a.put("editor.document_highlight.write_background", surface_std, 0x66);
    a.opaque("terminal.background", surface);
    a.opaque("terminal.foreground", on_surface);
    a.opaque("terminal.bright_foreground", on_surface);
    a.opaque("terminal.dim_foreground", on_surface.adjust_lightness(0.6));
    a.opaque("link_text.hover", primary);
    a.opaque("version_control.added", tertiary);
    a.opaque("version_control.modified", primary.adjust_lightness(0.8));
    a.put("version_control.word_added", tertiary, 0x59);
    a.put("version_control.word_deleted", error, 0xcc);
    a.opaque("version_control.deleted", error);
    a.put("version_control.conflict_marker.ours", tertiary, 0x1a);
    a.put("version_control.conflict_marker.theirs", primary, 0x1a);
    a.opaque("conflict", tertiary.adjust_lightness(0.8));
    a.put("conflict.background", tertiary.adjust_lightness(0.8), 0x1a);
    a.opaque("conflict.border", tertiary.adjust_lightness(0.6));
    a.opaque("created", tertiary);
    a.put("created.background", tertiary, 0x1a);
    a.opaque("created.border", tertiary.adjust_lightness(0.6));
    a.opaque("deleted", error);
    a.put("deleted.background", error, 0x1a);
    a.opaque("deleted.border", error.adjust_lightness(0.6));
    a.opaque("error", error);
    a.put("error.background", error, 0x1a);
    a.opaque("error.border", error.adjust_lightness(0.6));
    a.opaque("hidden", on_surface_variant);
    a.put("hidden.background", on_surface_variant.adjust_lightness(0.3), 0x1a);
    a.opaque("hidden.border", outline);
    a.opaque("hint", primary.adjust_lightness(0.7));
    a.put("hint.background", primary.adjust_lightness(0.7), 0x1a);
    a.opaque("hint.border", primary.adjust_lightness(0.6));
    a.opaque("ignored", on_surface_variant);
    a.put("ignored.background", on_surface_variant.adjust_lightness(0.3), 0x1a);
    a.opaque("ignored.border", outline);
    a.opaque("info", primary);
    a.put("info.background", primary, 0x1a);
    a.opaque("info.border", primary.adjust_lightness(0.6));
    a.put("color", primary, 0x66);
    a.opaque("modified", primary.adjust_lightness(0.8));
    a.put("modified.background", primary.adjust_lightness(0.8), 0x1a);
    a.opaque("modified.border", primary);
    a.opaque("predictive", secondary.adjust_lightness(0.8));
    a.put("predictive.background", secondary.adjust_lightness(0.8), 0x1a);
    a.opaque("predictive.border", secondary);
    a.opaque("renamed", primary);
    a.put("renamed.background", primary, 0x1a);
    a.opaque("renamed.border", primary.adjust_lightness(0.6));
    a.opaque("success", tertiary);
    a.put("success.background", tertiary, 0x1a);
    a.opaque("success.border", tertiary.adjust_lightness(0.6));
    a.opaque("unreachable", on_surface_variant);
    a.put("unreachable.background", on_surface_variant.adjust_lightness(0.3), 0x1a);
    a.opaque("unreachable.border", outline);
    a.opaque("warning", tertiary.adjust_lightness(0.9));
    a.put("warning.background", tertiary.adjust_lightness(0.9), 0x1a);
    a.opaque("warning.border", tertiary.adjust_lightness(0.9));

    a.ansi(ansi);
    a.finish()
}

// ---------------------------------------------------------------------------
// Light variant
// ---------------------------------------------------------------------------

/// Build the light variant's attribute map. Same key set and order as
/// [`dark`].
#[must_use]
pub fn light(roles: &RoleColors, scale: &ToneScale, ansi: &AnsiTable) -> StyleMap {
    let RoleColors {
        primary,
        secondary,
        tertiary,
        error,
        ..
    } = *roles;
    let ToneScale {
        surface,
        surface_low,
        surface_std,
        surface_high,
        surface_highest,
        on_surface,
        on_surface_variant,
        outline_variant,
        ..
    } = *scale;

    let mut a = Attrs::new();

    a.opaque("border", outline_variant);
    a.opaque("border.variant", outline_variant.adjust_lightness(1.1));
    a.opaque("border.focused", primary);
    a.opaque("border.selected", primary.adjust_lightness(0.9));
    a.transparent("border.transparent");
    a.opaque("border.disabled", outline_variant.adjust_lightness(1.2));
    a.opaque("elevated_surface.background", surface_low);
    a.opaque("surface.background", surface_low);
    a.opaque("background", surface);
    a.opaque("element.background", surface_std);
    a.opaque("element.hover", surface_high);
    a.opaque("element.active", surface_highest);
    a.opaque("element.selected", surface_highest);
    a.opaque("element.disabled", surface_low);
    a.put("drop_target.background", primary, 0x30);
    a.transparent("ghost_element.background");
    a.opaque("ghost_element.hover", surface_high);
    a.opaque("ghost_element.active", surface_highest);
    a.opaque("ghost_element.selected", surface_highest);
    a.opaque("ghost_element.disabled", surface_low);
    a.opaque("text", on_surface);
    a.opaque("text.muted", on_surface_variant);
    a.opaque("text.placeholder", on_surface_variant.adjust_lightness(1.3));
    a.opaque("text.disabled", on_surface_variant.adjust_lightness(1.5));
    a.opaque("text.accent", primary);
    a.opaque("icon", on_surface);
    a.opaque("icon.muted", on_surface_variant);
    a.opaque("icon.disabled", on_surface_variant.adjust_lightness(1.5));
    a.opaque("icon.placeholder", on_surface_variant);
    a.opaque("icon.accent", primary);
    a.opaque("status_bar.background", surface);
    a.opaque("title_bar.background", surface);
    a.opaque("title_bar.inactive_background", surface_low);
    a.opaque("toolbar.background", surface_low);
    a.opaque("tab_bar.background", surface_low);
    a.opaque("tab.inactive_background", surface_low);
    a.opaque("tab.active_background", surface);
    a.put("search.match_background", primary, 0x40);
    a.put("search.active_match_background", tertiary, 0x40);
    a.opaque("panel.background", surface_low);
    a.unset("panel.focused_border");
    a.unset("pane.focused_border");
    a.put("scrollbar.thumb.background", on_surface_variant, 0x4c);
    a.put("scrollbar.thumb.hover_background", on_surface_variant, 0x80);
    a.put("scrollbar.thumb.border", on_surface_variant, 0x60);
    a.transparent("scrollbar.track.background");
    a.opaque("scrollbar.track.border", outline_variant);
    a.opaque("editor.foreground", on_surface);
    a.opaque("editor.background", surface);
    a.opaque("editor.gutter.background", surface);
    a.opaque("editor.subheader.background", surface_low);
    a.put("editor.active_line.background", surface_std, 0xbf);
    a.opaque("editor.highlighted_line.background", surface_high);
    a.opaque("editor.line_number", on_surface_variant);
    a.opaque("editor.active_line_number", on_surface);
    a.opaque("editor.hover_line_number", on_surface.adjust_lightness(0.8));
    a.opaque("editor.invisible", on_surface_variant.adjust_lightness(1.3));
    a.put("editor.wrap_guide", on_surface_variant, 0x0d);
    a.put("editor.active_wrap_guide", on_surface_variant, 0x1a);
    a.put("editor.document_highlight.read_background", primary, 0x20);
    a.put(
        "editor.document_highlight.write_background",
        on_surface_variant,
        0x66,
    );
    a.opaque("terminal.background", surface);
    a.opaque("terminal.foreground", on_surface);
    a.opaque("terminal.bright_foreground", on_surface);
    a.opaque("terminal.dim_foreground", on_surface_variant);
    a.opaque("link_text.hover", primary);
    a.opaque("version_control.added", tertiary.saturate(1.3));
    a.opaque("version_control.modified", primary.saturate(1.3));
    a.put("version_control.word_added", tertiary, 0x40);
    a.put("version_control.word_deleted", error, 0x40);
    a.opaque("version_control.deleted", error.saturate(1.3));
    a.put("version_control.conflict_marker.ours", tertiary, 0x25);
    a.put("version_control.conflict_marker.theirs", primary, 0x25);
    a.opaque("conflict", tertiary.saturate(1.3));
    a.put("conflict.background", tertiary, 0x18);
    a.opaque("conflict.border", tertiary.saturate(1.5));
    a.opaque("created", tertiary.saturate(1.3));
    a.put("created.background", tertiary, 0x18);
    a.opaque("created.border", tertiary.saturate(1.5));
    a.opaque("deleted", error.saturate(1.3));
    a.put("deleted.background", error, 0x18);
    a.opaque("deleted.border", error.saturate(1.5));
    a.opaque("error", error.saturate(1.3));
    a.put("error.background", error, 0x18);
    a.opaque("error.border", error.saturate(1.5));
    a.opaque("hidden", on_surface_variant);
    a.put("hidden.background", on_surface_variant, 0x18);
    a.opaque("hidden.border", outline_variant);
    a.opaque("hint", primary.saturate(1.3));
    a.put("hint.background", primary, 0x18);
    a.opaque("hint.border", primary.saturate(1.5));
    a.opaque("ignored", on_surface_variant);
    a.put("ignored.background", on_surface_variant, 0x18);
    a.opaque("ignored.border", outline_variant);
    a.opaque("info", primary.saturate(1.3));
    a.put("info.background", primary, 0x18);
    a.opaque("info.border", primary.saturate(1.5));
    a.put("color", primary, 0x66);
    a.opaque("modified", primary.saturate(1.3));
    a.put("modified.background", primary, 0x18);
    a.opaque("modified.border", primary.saturate(1.5));
    a.opaque("predictive", secondary.saturate(1.3));
    a.put("predictive.background", secondary, 0x18);
    a.opaque("predictive.border", secondary.saturate(1.5));
    a.opaque("renamed", primary.saturate(1.3));
    a.put("renamed.background", primary, 0x18);
    a.opaque("renamed.border", primary.saturate(1.5));
    a.opaque("success", tertiary.saturate(1.3));
    a.put("success.background", tertiary, 0x18);
    a.opaque("success.border", tertiary.saturate(1.5));
    a.opaque("unreachable", on_surface_variant);
    a.put("unreachable.background", on_surface_variant, 0x18);
    a.opaque("unreachable.border", outline_variant);
    a.opaque("warning", tertiary.saturate(1.3));
    a.put("warning.background", tertiary, 0x18);
    a.opaque("warning.border", tertiary.saturate(1.5));

    a.ansi(ansi);
    a.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
