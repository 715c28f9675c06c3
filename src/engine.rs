use rand::{rngs::StdRng, SeedableRng};

use crate::config::{EngineConfig, COLOR_COUNT_RANGE};
use crate::generate::{self, HslRanges, PaletteType};
use crate::history::History;
use crate::palette::{Color, ColorId, Palette, PaletteId};
use crate::share;

/// One session's palette state.
///
/// Every operation runs to completion before the next one starts. Operations
/// that name a missing swatch or palette do nothing.
#[derive(Debug, Clone)]
pub struct PaletteEngine {
    /// Random Number Generator
    ///
    /// Seeded from entropy unless supplied through `with_rng`.
    pub rng: StdRng,

    /// Current Palette
    ///
    /// `None` until the first generation or load. Never returns to `None`.
    current: Option<Palette>,

    /// Committed palettes, most recent first
    history: History,

    /// Target swatch count for the next generation
    color_count: usize,

    config: EngineConfig,
}

impl PaletteEngine {
    pub fn new(config: EngineConfig) -> Self {
        PaletteEngine::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        PaletteEngine {
            rng,
            current: None,
            history: History::new(config.history_capacity),
            color_count: config.initial_color_count,
            config,
        }
    }

    pub fn current(&self) -> Option<&Palette> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// New random swatches everywhere except locked positions.
    pub fn generate_random_palette(&mut self) {
        let hexes = generate::generate_palette(
            &mut self.rng,
            PaletteType::Random,
            None,
            self.color_count,
        );

        self.install_generated(&hexes);
    }

    /// Like `generate_random_palette` but for any palette type. The swatch
    /// count follows whatever the generator produced.
    pub fn generate_palette(&mut self, kind: PaletteType, base: Option<&str>) {
        let hexes = generate::generate_palette(&mut self.rng, kind, base, self.color_count);

        self.color_count = hexes.len();
        self.install_generated(&hexes);
    }

    fn install_generated(&mut self, hexes: &[String]) {
        let previous = self.current.as_ref().map(Palette::colors).unwrap_or(&[]);
        let palette = Palette::from_hexes(hexes, previous);

        log::debug!(
            "generated palette {} ({} colors, {} kept)",
            palette.id(),
            palette.len(),
            hexes.len() - fresh_count(&palette, previous)
        );

        self.commit(palette);
    }

    /// Flips the lock in place. Not recorded in history.
    pub fn toggle_color_lock(&mut self, id: ColorId) {
        let color = self
            .current
            .as_mut()
            .and_then(|p| p.colors_mut().iter_mut().find(|c| c.id() == id));

        if let Some(color) = color {
            color.toggle_lock();
            log::debug!("color {} locked: {}", id, color.is_locked());
        }
    }

    /// Rebuilds the swatch `id` from `hex`, keeping its slot and lock, and
    /// records the edited palette in history.
    pub fn update_color(&mut self, id: ColorId, hex: &str) {
        let current = match self.current.as_ref() {
            Some(current) => current,
            None => return,
        };

        let index = match current.position(id) {
            Some(index) => index,
            None => return,
        };

        let mut palette = current.snapshot();
        let replaced = palette.colors()[index].replaced(hex);
        palette.colors_mut()[index] = replaced;

        log::debug!("color {} set to {}", id, palette.colors()[index].hex());

        self.commit(palette);
    }

    pub fn load_palette_from_history(&mut self, id: PaletteId) {
        if let Some(palette) = self.history.find(id).cloned() {
            log::debug!("restored palette {} from history", id);

            self.color_count = palette.len();
            self.current = Some(palette);
        }
    }

    /// Sets the target swatch count and grows or shrinks the current palette
    /// to match.
    ///
    /// Growing appends fresh random swatches. Shrinking drops unlocked swatches
    /// from the end of the unlocked run while keeping palette order. When there
    /// are not enough unlocked swatches the palette is cut to its first `count`
    /// entries, locked or not.
    pub fn update_color_count(&mut self, count: usize) {
        if !COLOR_COUNT_RANGE.contains(&count) {
            log::warn!("color count {} is outside the supported range", count);
        }

        self.color_count = count;

        let palette = match self.current.as_mut() {
            Some(palette) => palette,
            None => return,
        };

        let len = palette.len();

        if count > len {
            let ranges = HslRanges::default();
            let rng = &mut self.rng;

            palette.colors_mut().extend(
                (len..count).map(|_| Color::new(&generate::random_color(&mut *rng, &ranges), false)),
            );
        } else if count < len {
            let colors = palette.colors_mut();
            let locked = colors.iter().filter(|c| c.is_locked()).count();
            let unlocked = len - locked;

            if unlocked >= len - count {
                let mut keep_unlocked = count - locked;

                colors.retain(|c| {
                    if c.is_locked() {
                        true
                    } else if keep_unlocked > 0 {
                        keep_unlocked -= 1;
                        true
                    } else {
                        false
                    }
                });
            } else {
                colors.truncate(count);
            }
        }

        log::debug!("resized palette to {} colors", palette.len());
    }

    /// The current palette as a share link, or the bare page address when
    /// there is nothing to share.
    pub fn shareable_url(&self) -> String {
        let palette = match self.current.as_ref() {
            Some(palette) => palette,
            None => return self.config.base_url.clone(),
        };

        match share::share_url(&self.config.base_url, palette) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("cannot build share link on {}: {}", self.config.base_url, e);
                self.config.base_url.clone()
            }
        }
    }

    /// Installs the palette carried by a share link. Links without colors are
    /// ignored; malformed links are logged and ignored.
    pub fn load_palette_from_url(&mut self, url: &str) {
        let shared = match share::parse_share_url(url) {
            Ok(Some(shared)) => shared,
            Ok(None) => return,
            Err(e) => {
                log::warn!("error loading palette from url: {}", e);
                return;
            }
        };

        let palette = shared.into_palette();

        log::debug!("loaded palette {} from url", palette.id());

        self.color_count = palette.len();
        self.commit(palette);
    }

    fn commit(&mut self, palette: Palette) {
        self.history.push(palette.clone());
        self.current = Some(palette);
    }
}

fn fresh_count(palette: &Palette, previous: &[Color]) -> usize {
    palette
        .colors()
        .iter()
        .filter(|c| !previous.iter().any(|p| p.id() == c.id()))
        .count()
}
