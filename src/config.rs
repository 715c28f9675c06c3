use std::ops::RangeInclusive;

use crate::error::PaletteError;

pub const MIN_COLORS: usize = 2;
pub const MAX_COLORS: usize = 8;
pub const DEFAULT_COLORS: usize = 5;
pub const HISTORY_CAPACITY: usize = 20;
pub const DEFAULT_BASE_URL: &str = "https://palettegen.local/";

pub const COLOR_COUNT_RANGE: RangeInclusive<usize> = MIN_COLORS..=MAX_COLORS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Swatch count used before any palette exists.
    pub initial_color_count: usize,

    /// Number of committed palettes kept.
    pub history_capacity: usize,

    /// Page address share links are built on.
    pub base_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            initial_color_count: DEFAULT_COLORS,
            history_capacity: HISTORY_CAPACITY,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Parses a swatch count and checks it against the supported bound.
pub fn parse_color_count(s: &str) -> anyhow::Result<usize> {
    let count: usize = s.trim().parse()?;

    if !COLOR_COUNT_RANGE.contains(&count) {
        return Err(PaletteError::ColorCountOutOfRange(count).into());
    }

    Ok(count)
}
