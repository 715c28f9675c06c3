use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("a shade ramp needs at least 2 steps, got {0}")]
    TooFewShades(usize),

    #[error("unknown palette type `{0}`")]
    UnknownPaletteType(String),

    #[error("color count {0} is outside the supported range {min}-{max}", min = crate::config::MIN_COLORS, max = crate::config::MAX_COLORS)]
    ColorCountOutOfRange(usize),

    #[error("malformed share url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
