//! Share links: `?colors=ff0000,00ff00&locked=1,0` on top of a page address.

use url::Url;

use crate::error::PaletteError;
use crate::palette::{Color, Palette};

pub const COLORS_PARAM: &str = "colors";
pub const LOCKED_PARAM: &str = "locked";

/// The contents of a share link before swatches are built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedPalette {
    pub hexes: Vec<String>,
    pub locked: Vec<bool>,
}

impl SharedPalette {
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    pub fn into_palette(self) -> Palette {
        let colors = self
            .hexes
            .iter()
            .enumerate()
            .map(|(i, hex)| Color::new(hex, self.is_locked(i)))
            .collect();

        Palette::new(colors)
    }
}

/// Replaces the query of `base` with the palette's colors and lock flags.
pub fn share_url(base: &str, palette: &Palette) -> Result<String, PaletteError> {
    let mut url = Url::parse(base)?;

    let colors = palette
        .colors()
        .iter()
        .map(Color::hex_digits)
        .collect::<Vec<_>>()
        .join(",");

    let locked = palette
        .colors()
        .iter()
        .map(|c| if c.is_locked() { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(",");

    url.set_query(Some(&format!(
        "{}={}&{}={}",
        COLORS_PARAM, colors, LOCKED_PARAM, locked
    )));

    Ok(url.to_string())
}

/// Reads a share link. `Ok(None)` when it carries no colors.
pub fn parse_share_url(url: &str) -> Result<Option<SharedPalette>, PaletteError> {
    let url = Url::parse(url)?;

    let mut colors = None;
    let mut locked = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            COLORS_PARAM if colors.is_none() => colors = Some(value.into_owned()),
            LOCKED_PARAM if locked.is_none() => locked = Some(value.into_owned()),
            _ => {}
        }
    }

    let colors = match colors {
        Some(colors) if !colors.is_empty() => colors,
        _ => return Ok(None),
    };

    let hexes = colors.split(',').map(str::to_string).collect();
    let locked = locked
        .filter(|flags| !flags.is_empty())
        .map(|flags| flags.split(',').map(|flag| flag == "1").collect())
        .unwrap_or_default();

    Ok(Some(SharedPalette { hexes, locked }))
}
