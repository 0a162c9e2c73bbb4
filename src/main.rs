// SPDX-License-Identifier: MIT
//
// tonik — generate matched dark/light Zed themes from a Material-style
// role palette.
//
// The binary is thin wiring around the two library crates:
//
//   tonik-color → hex parsing, HSL math, alpha formatting
//   tonik-theme → tone scales, ANSI mapping, theme assembly
//
// Inputs are forgiving: a missing or unreadable palette file falls back
// to the released defaults with a warning, and an absent SCSS file just
// means no terminal colors were supplied. Only the final write is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tonik_theme::{Palette, TermColors, ThemeFamily};

mod scss;

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "tonik", version, about = "Material palette → Zed theme generator")]
struct Cli {
    /// Palette JSON with Material color roles.
    #[arg(long, value_name = "FILE")]
    palette: PathBuf,

    /// SCSS file carrying `$termN: #RRGGBB;` terminal slots.
    #[arg(long, value_name = "FILE")]
    scss: Option<PathBuf>,

    /// Where to write the generated theme JSON.
    #[arg(long, value_name = "FILE")]
    out: PathBuf,

    /// Theme family name.
    #[arg(long, default_value = "Tonik")]
    name: String,

    /// Theme author.
    #[arg(long, default_value = "tonik")]
    author: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let palette = load_palette(&cli.palette);
    let term = cli
        .scss
        .as_deref()
        .map_or_else(TermColors::default, load_term_colors);

    let family = ThemeFamily::generate(&cli.name, &cli.author, &palette, &term);
    write_theme(&family, &cli.out)?;

    tracing::info!(path = %cli.out.display(), "generated theme family");
    Ok(())
}

// ─── Input loading ───────────────────────────────────────────────────────────

/// Load the role palette. Any failure — missing file, unreadable file,
/// invalid JSON — degrades to the full default palette with a warning.
fn load_palette(path: &Path) -> Palette {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "palette unavailable, using defaults");
            return Palette::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(palette) => palette,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "palette unreadable, using defaults");
            Palette::default()
        }
    }
}

/// Load terminal slots from SCSS. An absent file is simply no colors.
fn load_term_colors(path: &Path) -> TermColors {
    fs::read_to_string(path)
        .map(|text| scss::parse_term_colors(&text))
        .unwrap_or_default()
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// Serialize and write the theme, creating parent directories first.
fn write_theme(family: &ThemeFamily, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    let mut json = family.to_json().context("serializing theme family")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing theme to {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
