//! Georadar Config
//!
//! Run-level and per-model configuration. [`SimulationConfig`] is resolved
//! once from [`RunArgs`] and shared read-only; [`ModelConfig`] derives the
//! output paths, banner, scene lookup and expression namespace for each
//! model index.

pub mod args;
pub mod error;
pub mod model;
pub mod namespace;
pub mod probe;
pub mod settings;
pub mod simulation;

pub use args::RunArgs;
pub use error::{ConfigurationError, Result};
pub use model::{ModelConfig, OUTPUT_EXTENSION};
pub use namespace::{ModelNamespace, NamespaceValue};
pub use probe::{DEFAULT_TERMINAL_WIDTH, HostInfo, HostProbe, StaticProbe, SystemProbe};
pub use settings::{GeneralSettings, MaterialSettings, ModelMode, NumericalDispersion, Solver};
pub use simulation::{ExecutionMode, ModelRange, SimulationConfig};
