//! Configuration errors

use georadar_foundation::UnknownPrecision;
use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Run arguments that cannot be turned into a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no input file or output file identifier was given")]
    MissingPaths,

    #[error(transparent)]
    UnsupportedPrecision(#[from] UnknownPrecision),

    #[error("number of models to run must be at least one")]
    ZeroModels,

    #[error("model range starting at {start} cannot hold {n} models")]
    ModelRangeOverflow { start: usize, n: usize },

    #[error("model range [{start}, {end}) is empty")]
    EmptyModelRange { start: usize, end: usize },

    #[error("pre-built scene list has {scenes} entries but model index {index} was requested")]
    MissingScene { index: usize, scenes: usize },
}
