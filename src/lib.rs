//! Palette generation: color-model math plus a session engine that keeps the
//! current palette, locks and history.

pub mod adjust;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod generate;
pub mod history;
pub mod palette;
pub mod share;

pub use adjust::HueDrag;
pub use color::{Hsl, Rgb, Shade};
pub use config::EngineConfig;
pub use engine::PaletteEngine;
pub use error::PaletteError;
pub use generate::{HslRanges, PaletteType};
pub use history::History;
pub use palette::{Color, ColorId, Palette, PaletteId};
