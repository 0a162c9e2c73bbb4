// SPDX-License-Identifier: MIT
//
// SCSS terminal-color extraction.
//
// Wallpaper pipelines emit a material_colors.scss with one variable per
// terminal slot:
//
//   $term0: #1a1b26;
//   $term1: #f7768e;
//   ...
//
// Only those lines matter here. Anything else in the file — other
// variables, comments, malformed lines — is skipped without complaint,
// as are slot indices outside 0..=15.

use std::sync::LazyLock;

use regex::Regex;
use tonik_theme::TermColors;

static TERM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$term(\d+):\s*#([0-9A-Fa-f]{6});").expect("term line regex"));

/// Extract `$termN: #RRGGBB;` assignments from SCSS text.
#[must_use]
pub fn parse_term_colors(scss: &str) -> TermColors {
    let mut term = TermColors::default();
    for line in scss.lines() {
        let Some(caps) = TERM_LINE.captures(line.trim()) else {
            continue;
        };
        let (Ok(index), Ok(color)) = (caps[1].parse::<usize>(), caps[2].parse()) else {
            continue;
        };
        term.set(index, color);
    }
    term
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
