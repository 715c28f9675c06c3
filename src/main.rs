mod viewer;
mod window;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use structopt::StructOpt;

use palettegen::config::{self, EngineConfig};
use palettegen::{Palette, PaletteEngine, PaletteType, Shade};
use viewer::Viewer;

#[derive(Debug, StructOpt)]
#[structopt(name = "palettegen", about = "Generate, lock and share color palettes")]
struct Opt {
    #[structopt(
        short = "n",
        long,
        default_value = "5",
        parse(try_from_str = config::parse_color_count),
        help = "Number of colors (2-8)"
    )]
    count: usize,

    #[structopt(
        short = "t",
        long = "type",
        default_value = "random",
        help = "Palette type: random, primary-accent, analogous, monochromatic, \
                complementary, triadic, tetradic, split-complementary"
    )]
    kind: PaletteType,

    #[structopt(short, long, help = "Base color for harmony palette types")]
    base: Option<String>,

    #[structopt(long, help = "Seed for reproducible palettes")]
    seed: Option<u64>,

    #[structopt(short, long, help = "Load a palette from a share link")]
    url: Option<String>,

    #[structopt(long, help = "Page address share links are built on")]
    base_url: Option<String>,

    #[structopt(long, help = "Print a shade ramp with this many steps per color")]
    shades: Option<usize>,

    #[structopt(long, help = "Print JSON instead of text")]
    json: bool,

    #[structopt(long, help = "Open an interactive window")]
    view: bool,

    #[structopt(short, long, help = "Print debug messages")]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    palette: &'a Palette,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    shades: Option<Vec<Vec<Shade>>>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let filter = if opt.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = EngineConfig {
        initial_color_count: opt.count,
        base_url: opt
            .base_url
            .clone()
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string()),
        ..Default::default()
    };

    let mut engine = match opt.seed {
        Some(seed) => PaletteEngine::with_rng(config, StdRng::seed_from_u64(seed)),
        None => PaletteEngine::new(config),
    };

    if let Some(url) = &opt.url {
        engine.load_palette_from_url(url);
    }

    if engine.current().is_none() {
        match opt.kind {
            PaletteType::Random => engine.generate_random_palette(),
            kind => engine.generate_palette(kind, opt.base.as_deref()),
        }
    }

    if opt.view {
        let mut viewer = Viewer::new(engine)?;

        while !viewer.closing {
            viewer.step()?;
        }

        engine = viewer.close();
    }

    print_palette(&engine, &opt)
}

fn print_palette(engine: &PaletteEngine, opt: &Opt) -> anyhow::Result<()> {
    let palette = match engine.current() {
        Some(palette) => palette,
        None => return Ok(()),
    };

    let shades = match opt.shades {
        Some(steps) => Some(
            palette
                .colors()
                .iter()
                .map(|c| c.shades(steps))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    if opt.json {
        let report = Report {
            palette,
            url: engine.shareable_url(),
            shades,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);

        return Ok(());
    }

    for (i, color) in palette.colors().iter().enumerate() {
        println!(
            "{}  {}  {:<18} {:<20} {:<7} {}",
            i + 1,
            color.hex(),
            color.rgb(),
            color.hsl(),
            color.name(),
            if color.is_locked() { "locked" } else { "" }
        );

        if let Some(ramp) = shades.as_ref().and_then(|s| s.get(i)) {
            let ramp: Vec<&str> = ramp.iter().map(|s| s.hex.as_str()).collect();
            println!("   {}", ramp.join(" "));
        }
    }

    println!();
    println!("{}", engine.shareable_url());

    Ok(())
}
