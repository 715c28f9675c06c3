//! Conversions between hex, RGB and HSL, plus the derived helpers built on
//! top of them: text contrast, shade ramps and coarse color names.
//!
//! Everything in here is pure. Malformed hex input never fails, it reads as
//! black.

use std::fmt;

use serde::Serialize;

use crate::error::PaletteError;

pub const TEXT_DARK: &str = "#000000";
pub const TEXT_LIGHT: &str = "#ffffff";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Packs the channels as `0x00RRGGBB`, the layout framebuffers expect.
    pub fn to_u32(self) -> u32 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        (r << 16) | (g << 8) | b
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in whole degrees, saturation and lightness in whole percent.
///
/// `h` is normally below 360 but can land on 360 when rounding pushes it
/// there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h.into(), self.s.into(), self.l.into())
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// One step of a shade ramp. `tint` is the lightness percentage used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shade {
    pub hex: String,
    pub tint: f64,
}

/// Parses `#rrggbb` or `rrggbb` (either case). Anything else is black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb::default();
    }

    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or_default();
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or_default();
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or_default();

    Rgb::new(r, g, b)
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Canonical `#rrggbb` form of any hex input, malformed input included.
pub fn normalize_hex(hex: &str) -> String {
    hex_to_rgb(hex).to_hex()
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        h /= 6.0;
    }

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// HSL to RGB using the `k`/`a`/`f` hue-to-channel formulation.
///
/// `h` is in degrees and may be any real; `s` and `l` are percentages and are
/// expected in `0..=100`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;

    let k = |n: f64| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = k(n);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Rgb::new(channel(f(0.0)), channel(f(8.0)), channel(f(4.0)))
}

fn channel(v: f64) -> u8 {
    (255.0 * v).round() as u8
}

/// Black or white, whichever reads better on `background`.
pub fn text_color(background: &str) -> &'static str {
    let Rgb { r, g, b } = hex_to_rgb(background);
    let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;

    if luminance > 0.5 {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

/// Lightness ramp from 0 to 100 at the hue and saturation of `hex`.
pub fn generate_shades(hex: &str, count: usize) -> Result<Vec<Shade>, PaletteError> {
    if count < 2 {
        return Err(PaletteError::TooFewShades(count));
    }

    let Hsl { h, s, .. } = hex_to_rgb(hex).to_hsl();
    let last = (count - 1) as f64;

    let shades = (0..count)
        .map(|i| {
            let tint = 100.0 * i as f64 / last;
            let lightness = tint.clamp(0.0, 100.0);

            Shade {
                hex: hsl_to_rgb(h.into(), s.into(), lightness).to_hex(),
                tint,
            }
        })
        .collect();

    Ok(shades)
}

pub fn color_name(hex: &str) -> &'static str {
    let Hsl { h, s, l } = hex_to_rgb(hex).to_hsl();

    if s < 10 {
        return match l {
            l if l < 20 => "Black",
            l if l > 80 => "White",
            _ => "Gray",
        };
    }

    match h {
        0..=29 => "Red",
        30..=59 => "Orange",
        60..=89 => "Yellow",
        90..=149 => "Green",
        150..=209 => "Cyan",
        210..=269 => "Blue",
        270..=329 => "Purple",
        _ => "Red",
    }
}
