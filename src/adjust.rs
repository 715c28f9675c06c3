//! Hue dragging. Previews are computed here without touching the engine; only
//! the final commit goes through `PaletteEngine::update_color`.

use crate::color::{hex_to_rgb, hsl_to_rgb};
use crate::engine::PaletteEngine;
use crate::palette::{Color, ColorId};

pub const HUE_TURN: u16 = 360;

/// Maps a pointer offset along a hue strip of `width` to a hue.
pub fn hue_at(x: f32, width: f32) -> u16 {
    if width <= 0.0 {
        return 0;
    }

    let fraction = x.clamp(0.0, width) / width;
    (fraction * f32::from(HUE_TURN)).round() as u16
}

/// `hex` with its hue replaced.
pub fn preview_hue(hex: &str, hue: u16) -> String {
    let hsl = hex_to_rgb(hex).to_hsl();
    hsl_to_rgb(hue.into(), hsl.s.into(), hsl.l.into()).to_hex()
}

/// An in-progress hue drag on one swatch.
///
/// Saturation and lightness are captured when the drag starts so repeated
/// previews do not drift through rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueDrag {
    color: ColorId,
    saturation: u8,
    lightness: u8,
    hue: u16,
}

impl HueDrag {
    pub fn begin(color: &Color) -> Self {
        let hsl = color.to_hsl();

        HueDrag {
            color: color.id(),
            saturation: hsl.s,
            lightness: hsl.l,
            hue: hsl.h,
        }
    }

    pub fn color_id(&self) -> ColorId {
        self.color
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn preview(&mut self, hue: u16) -> String {
        self.hue = hue;
        self.hex()
    }

    pub fn hex(&self) -> String {
        hsl_to_rgb(
            self.hue.into(),
            self.saturation.into(),
            self.lightness.into(),
        )
        .to_hex()
    }

    pub fn commit(mut self, engine: &mut PaletteEngine, hue: u16) {
        self.hue = hue;
        engine.update_color(self.color, &self.hex());
    }

    pub fn cancel(self) {
        log::debug!("hue drag on {} cancelled", self.color);
    }
}
