//! Conversion and share-link properties over generated inputs.

use palettegen::color::{generate_shades, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use palettegen::config::EngineConfig;
use palettegen::PaletteEngine;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn hue_distance(a: u16, b: u16) -> u16 {
    let d = (i32::from(a) - i32::from(b)).rem_euclid(360) as u16;
    d.min(360 - d)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn hex_round_trips(hex in "#?[0-9a-fA-F]{6}") {
        let rgb = hex_to_rgb(&hex);
        let expected = format!("#{}", hex.trim_start_matches('#').to_lowercase());

        prop_assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), expected);
    }

    #[test]
    fn lightness_survives_a_round_trip(h in 0u16..360, s in 0u8..=100, l in 0u8..=100) {
        let rgb = hsl_to_rgb(h.into(), s.into(), l.into());
        let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b);

        prop_assert!((i32::from(back.l) - i32::from(l)).abs() <= 1, "{:?}", back);
    }

    #[test]
    fn hue_survives_a_round_trip_at_full_chroma(h in 0u16..360) {
        let rgb = hsl_to_rgb(h.into(), 100.0, 50.0);
        let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b);

        prop_assert!(hue_distance(back.h, h) <= 1, "{} -> {:?}", h, back);
        prop_assert_eq!(back.s, 100);
        prop_assert_eq!(back.l, 50);
    }

    #[test]
    fn saturation_survives_a_round_trip_at_half_lightness(h in 0u16..360, s in 0u8..=100) {
        let rgb = hsl_to_rgb(h.into(), s.into(), 50.0);
        let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b);

        prop_assert!((i32::from(back.s) - i32::from(s)).abs() <= 1, "{:?}", back);
    }

    #[test]
    fn shades_are_evenly_spaced(hex in "#[0-9a-f]{6}", count in 2usize..12) {
        let shades = generate_shades(&hex, count).unwrap();
        let step = 100.0 / (count - 1) as f64;

        prop_assert_eq!(shades.len(), count);
        prop_assert_eq!(shades[0].tint, 0.0);
        prop_assert_eq!(shades[count - 1].tint, 100.0);
        for pair in shades.windows(2) {
            prop_assert!((pair[1].tint - pair[0].tint - step).abs() < 1e-9);
        }
    }

    #[test]
    fn share_links_round_trip(
        swatches in proptest::collection::vec(("[0-9a-f]{6}", any::<bool>()), 2..=8)
    ) {
        let colors: Vec<&str> = swatches.iter().map(|(hex, _)| hex.as_str()).collect();
        let flags: Vec<&str> = swatches.iter().map(|(_, l)| if *l { "1" } else { "0" }).collect();

        let mut engine = PaletteEngine::with_rng(EngineConfig::default(), StdRng::seed_from_u64(1));
        engine.load_palette_from_url(&format!(
            "https://example.com/?colors={}&locked={}",
            colors.join(","),
            flags.join(",")
        ));
        let original = engine.current().unwrap().clone();

        let url = engine.shareable_url();
        engine.load_palette_from_url(&url);
        let loaded = engine.current().unwrap();

        prop_assert_ne!(loaded.id(), original.id());
        prop_assert_eq!(loaded.len(), swatches.len());
        prop_assert_eq!(engine.color_count(), swatches.len());
        for (a, b) in loaded.colors().iter().zip(original.colors()) {
            prop_assert_eq!(a.hex(), b.hex());
            prop_assert_eq!(a.is_locked(), b.is_locked());
        }
    }
}

#[test]
fn regeneration_never_touches_locked_swatches() {
    let mut engine = PaletteEngine::with_rng(EngineConfig::default(), StdRng::seed_from_u64(99));
    engine.generate_random_palette();

    let locked: Vec<_> = engine.current().unwrap().colors()[..2]
        .iter()
        .map(|c| c.id())
        .collect();
    for id in &locked {
        engine.toggle_color_lock(*id);
    }
    let snapshot = engine.current().unwrap().colors()[..2].to_vec();

    for _ in 0..30 {
        engine.generate_random_palette();
        assert_eq!(&engine.current().unwrap().colors()[..2], snapshot.as_slice());
    }
    assert_eq!(engine.history().len(), 20);
}

#[test]
fn hex_rgb_hsl_agree_for_primaries() {
    for (hex, h) in [("#ff0000", 0), ("#00ff00", 120), ("#0000ff", 240)] {
        let rgb = hex_to_rgb(hex);
        assert_eq!(rgb_to_hsl(rgb.r, rgb.g, rgb.b).h, h);
    }
}
