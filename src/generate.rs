use std::{fmt, ops::Range, str::FromStr};

use rand::Rng;
use serde::Serialize;

use crate::color::{hex_to_rgb, hsl_to_rgb, Hsl};
use crate::error::PaletteError;

const ANALOGOUS_STEP: f64 = 30.0;
const MONOCHROME_LIGHTNESS: (f64, f64) = (20.0, 80.0);
const HARMONY_LIGHTNESS_STEP: i32 = 15;
const HARMONY_LIGHTNESS_BOUNDS: (i32, i32) = (10, 90);

/// Sampling ranges for each HSL component.
///
/// Ranges are half-open. An empty range yields its start, and a reversed
/// range such as `200..100` samples the closed span `100..=200`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HslRanges {
    pub hue: Range<u16>,
    pub saturation: Range<u8>,
    pub lightness: Range<u8>,
}

impl Default for HslRanges {
    fn default() -> Self {
        HslRanges {
            hue: 0..360,
            saturation: 0..100,
            lightness: 0..100,
        }
    }
}

impl HslRanges {
    fn primary() -> Self {
        HslRanges {
            saturation: 60..80,
            lightness: 45..55,
            ..Default::default()
        }
    }

    fn vivid() -> Self {
        HslRanges {
            saturation: 50..90,
            lightness: 35..65,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    Random,
    PrimaryAccent,
    Analogous,
    Monochromatic,
    Complementary,
    Triadic,
    Tetradic,
    SplitComplementary,
}

impl PaletteType {
    pub const ALL: [PaletteType; 8] = [
        PaletteType::Random,
        PaletteType::PrimaryAccent,
        PaletteType::Analogous,
        PaletteType::Monochromatic,
        PaletteType::Complementary,
        PaletteType::Triadic,
        PaletteType::Tetradic,
        PaletteType::SplitComplementary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteType::Random => "random",
            PaletteType::PrimaryAccent => "primary-accent",
            PaletteType::Analogous => "analogous",
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Complementary => "complementary",
            PaletteType::Triadic => "triadic",
            PaletteType::Tetradic => "tetradic",
            PaletteType::SplitComplementary => "split-complementary",
        }
    }

    /// Hue offsets of the fixed-geometry harmonies.
    fn hue_offsets(self) -> Option<&'static [f64]> {
        match self {
            PaletteType::Complementary => Some(&[0.0, 180.0]),
            PaletteType::Triadic => Some(&[0.0, 120.0, 240.0]),
            PaletteType::Tetradic => Some(&[0.0, 90.0, 180.0, 270.0]),
            PaletteType::SplitComplementary => Some(&[0.0, 150.0, 210.0]),
            _ => None,
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteType {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PaletteError::UnknownPaletteType(s.to_string()))
    }
}

/// Samples a whole-number HSL triple inside `ranges` and returns its hex.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, ranges: &HslRanges) -> String {
    let h = sample(rng, ranges.hue.start.into()..ranges.hue.end.into());
    let s = sample(rng, ranges.saturation.start.into()..ranges.saturation.end.into());
    let l = sample(rng, ranges.lightness.start.into()..ranges.lightness.end.into());

    hsl_to_rgb(h, s, l).to_hex()
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<u32>) -> f64 {
    if range.start < range.end {
        f64::from(rng.gen_range(range))
    } else if range.start > range.end {
        f64::from(rng.gen_range(range.end..=range.start))
    } else {
        f64::from(range.start)
    }
}

/// `[dark, accent dark, primary, light]` built around one sampled primary.
pub fn primary_accent_palette<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let primary = random_color(rng, &HslRanges::primary());
    let Hsl { h, s, l } = hex_to_rgb(&primary).to_hsl();
    let (h, s, l) = (f64::from(h), i32::from(s), i32::from(l));

    let dark_s = f64::from((s + 10).min(100));
    let dark_l = f64::from((l - 30).max(15));

    let dark = hsl_to_rgb(h, dark_s, dark_l).to_hex();
    let accent_dark = hsl_to_rgb((h + 180.0) % 360.0, dark_s, dark_l).to_hex();
    let primary = hsl_to_rgb(h, f64::from(s), f64::from(l)).to_hex();
    let light = hsl_to_rgb(h, f64::from((s - 10).max(0)), f64::from((l + 40).min(95))).to_hex();

    vec![dark, accent_dark, primary, light]
}

/// Builds `count` hexes for `kind`. Primary-accent always yields four.
///
/// Harmony types start from `base` when given, otherwise from a sampled
/// vivid color.
pub fn generate_palette<R: Rng + ?Sized>(
    rng: &mut R,
    kind: PaletteType,
    base: Option<&str>,
    count: usize,
) -> Vec<String> {
    match kind {
        PaletteType::Random => (0..count)
            .map(|_| random_color(rng, &HslRanges::default()))
            .collect(),

        PaletteType::PrimaryAccent => primary_accent_palette(rng),

        PaletteType::Analogous => {
            let base = base_hsl(rng, base);
            let center = (count as f64 - 1.0) / 2.0;

            (0..count)
                .map(|i| {
                    let offset = (i as f64 - center) * ANALOGOUS_STEP;
                    hsl_to_rgb(rotate(base.h, offset), base.s.into(), base.l.into()).to_hex()
                })
                .collect()
        }

        PaletteType::Monochromatic => {
            let base = base_hsl(rng, base);
            let (lo, hi) = MONOCHROME_LIGHTNESS;

            (0..count)
                .map(|i| {
                    let l = if count > 1 {
                        lo + (hi - lo) * i as f64 / (count - 1) as f64
                    } else {
                        base.l.into()
                    };
                    hsl_to_rgb(base.h.into(), base.s.into(), l).to_hex()
                })
                .collect()
        }

        PaletteType::Complementary
        | PaletteType::Triadic
        | PaletteType::Tetradic
        | PaletteType::SplitComplementary => {
            let base = base_hsl(rng, base);
            let offsets = kind.hue_offsets().unwrap_or(&[0.0]);

            (0..count)
                .map(|i| {
                    let round = i / offsets.len();
                    let l = if round == 0 {
                        i32::from(base.l)
                    } else {
                        let (lo, hi) = HARMONY_LIGHTNESS_BOUNDS;
                        (i32::from(base.l) + lightness_shift(round)).clamp(lo, hi)
                    };

                    let h = rotate(base.h, offsets[i % offsets.len()]);
                    hsl_to_rgb(h, base.s.into(), l.into()).to_hex()
                })
                .collect()
        }
    }
}

fn base_hsl<R: Rng + ?Sized>(rng: &mut R, base: Option<&str>) -> Hsl {
    match base {
        Some(hex) => hex_to_rgb(hex).to_hsl(),
        None => hex_to_rgb(&random_color(rng, &HslRanges::vivid())).to_hsl(),
    }
}

fn rotate(h: u16, offset: f64) -> f64 {
    (f64::from(h) + offset).rem_euclid(360.0)
}

// +15, -15, +30, -30, ...
fn lightness_shift(round: usize) -> i32 {
    let magnitude = HARMONY_LIGHTNESS_STEP * ((round as i32 + 1) / 2);
    if round % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}
