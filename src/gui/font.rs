use ab_glyph::FontRef;
use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use log::{info, warn};

use std::{fs, path::Path};

pub(crate) const DISPLAY_FONT_NAME: &str = "digital";

pub(crate) fn load_font_data(path: &Path) -> Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;

    // egui panics on the first frame if it cannot parse an installed font
    FontRef::try_from_slice(&data)
        .with_context(|| format!("Failed to parse font {}", path.display()))?;

    Ok(data)
}

/// Registers the font at `path` with `ctx` and returns the family to draw digits with. Falls back
/// to the built in monospace font if the file cannot be used.
pub(crate) fn install_display_font(ctx: &egui::Context, path: &Path) -> FontFamily {
    let data = match load_font_data(path) {
        Ok(v) => v,
        Err(e) => {
            warn!("Failed to load display font, using default: {:?}", e);
            return FontFamily::Monospace;
        }
    };

    let family = FontFamily::Name(DISPLAY_FONT_NAME.into());

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(DISPLAY_FONT_NAME.to_owned(), FontData::from_owned(data));
    fonts
        .families
        .entry(family.clone())
        .or_default()
        .insert(0, DISPLAY_FONT_NAME.to_owned());
    ctx.set_fonts(fonts);

    info!("Loaded display font {}", path.display());
    family
}
