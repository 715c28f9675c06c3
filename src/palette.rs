use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::color::{self, generate_shades, hex_to_rgb, Hsl, Rgb, Shade};
use crate::error::PaletteError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaletteId(u64);

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// One swatch.
///
/// The display strings and name are derived once, when the swatch is built.
/// Changing the hex means building a new `Color`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    id: ColorId,
    hex: String,
    rgb: String,
    hsl: String,
    locked: bool,
    name: String,
}

impl Color {
    pub fn new(hex: &str, locked: bool) -> Self {
        Color::with_id(ColorId(next_id()), hex, locked)
    }

    fn with_id(id: ColorId, hex: &str, locked: bool) -> Self {
        let rgb = hex_to_rgb(hex);
        let hex = rgb.to_hex();

        Color {
            id,
            rgb: rgb.to_string(),
            hsl: rgb.to_hsl().to_string(),
            name: color::color_name(&hex).to_string(),
            hex,
            locked,
        }
    }

    /// A rebuilt swatch for the same slot: same id and lock, new hex.
    pub(crate) fn replaced(&self, hex: &str) -> Color {
        Color::with_id(self.id, hex, self.locked)
    }

    pub(crate) fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    pub fn id(&self) -> ColorId {
        self.id
    }

    /// `#rrggbb`
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// `rrggbb`
    pub fn hex_digits(&self) -> &str {
        self.hex.trim_start_matches('#')
    }

    pub fn rgb(&self) -> &str {
        &self.rgb
    }

    pub fn hsl(&self) -> &str {
        &self.hsl
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn to_rgb(&self) -> Rgb {
        hex_to_rgb(&self.hex)
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    pub fn text_color(&self) -> &'static str {
        color::text_color(&self.hex)
    }

    pub fn shades(&self, count: usize) -> Result<Vec<Shade>, PaletteError> {
        generate_shades(&self.hex, count)
    }
}

/// An ordered set of swatches produced by one generation or edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    id: PaletteId,
    colors: Vec<Color>,
    created_at: DateTime<Utc>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Palette {
            id: PaletteId(next_id()),
            colors,
            created_at: Utc::now(),
        }
    }

    /// Builds a palette from `hexes`, keeping any swatch of `previous` that is
    /// locked at the same position.
    pub fn from_hexes<S: AsRef<str>>(hexes: &[S], previous: &[Color]) -> Self {
        let colors = hexes
            .iter()
            .enumerate()
            .map(|(i, hex)| match previous.get(i) {
                Some(kept) if kept.is_locked() => kept.clone(),
                _ => Color::new(hex.as_ref(), false),
            })
            .collect();

        Palette::new(colors)
    }

    /// Same swatches under a fresh id and timestamp.
    pub(crate) fn snapshot(&self) -> Self {
        Palette::new(self.colors.clone())
    }

    pub fn id(&self) -> PaletteId {
        self.id
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub(crate) fn colors_mut(&mut self) -> &mut Vec<Color> {
        &mut self.colors
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn position(&self, id: ColorId) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    pub fn color(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    pub fn hexes(&self) -> impl Iterator<Item = &str> + '_ {
        self.colors.iter().map(Color::hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_derives_display_fields_from_hex() {
        let color = Color::new("FF0000", true);

        assert_eq!(color.hex(), "#ff0000");
        assert_eq!(color.hex_digits(), "ff0000");
        assert_eq!(color.rgb(), "rgb(255, 0, 0)");
        assert_eq!(color.hsl(), "hsl(0, 100%, 50%)");
        assert_eq!(color.name(), "Red");
        assert!(color.is_locked());
    }

    #[test]
    fn malformed_hex_builds_a_black_swatch() {
        let color = Color::new("#12345", false);

        assert_eq!(color.hex(), "#000000");
        assert_eq!(color.rgb(), "rgb(0, 0, 0)");
        assert_eq!(color.name(), "Black");
    }

    #[test]
    fn ids_are_unique() {
        let a = Color::new("#ff0000", false);
        let b = Color::new("#ff0000", false);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn replacing_keeps_slot_identity() {
        let mut color = Color::new("#ff0000", false);
        color.toggle_lock();

        let replaced = color.replaced("#0000ff");

        assert_eq!(replaced.id(), color.id());
        assert!(replaced.is_locked());
        assert_eq!(replaced.hex(), "#0000ff");
        assert_eq!(replaced.name(), "Blue");
    }

    #[test]
    fn from_hexes_keeps_locked_positions() {
        let mut previous = vec![
            Color::new("#111111", false),
            Color::new("#222222", false),
            Color::new("#333333", false),
        ];
        previous[1].toggle_lock();

        let palette = Palette::from_hexes(&["#aa0000", "#00aa00", "#0000aa"], &previous);

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.colors()[0].hex(), "#aa0000");
        assert_ne!(palette.colors()[0].id(), previous[0].id());
        assert_eq!(palette.colors()[1], previous[1]);
        assert_eq!(palette.colors()[2].hex(), "#0000aa");
    }

    #[test]
    fn from_hexes_ignores_previous_beyond_its_length() {
        let mut previous = vec![Color::new("#111111", true), Color::new("#222222", true)];
        previous[0].toggle_lock();

        let palette = Palette::from_hexes(&["#aa0000"], &previous);

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.colors()[0].hex(), "#aa0000");
    }

    #[test]
    fn snapshot_gets_a_new_id() {
        let palette = Palette::new(vec![Color::new("#ff0000", false)]);
        let snapshot = palette.snapshot();

        assert_ne!(snapshot.id(), palette.id());
        assert_eq!(snapshot.colors(), palette.colors());
    }
}
