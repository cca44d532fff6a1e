// error.rs - Error types for board construction, cell access and config loading

/// Errors raised by [`LifeBoard`](crate::LifeBoard) operations.
///
/// Both variants are caller defects: they are returned immediately and the
/// board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A board was requested with a zero width or height.
    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// A coordinate fell outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// Errors raised while loading or validating a [`BoardConfig`](crate::BoardConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {source}")]
    Yaml { source: serde_yml::Error },

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
