//! Simulation-level configuration.
//!
//! [`SimulationConfig::resolve`] turns [`RunArgs`] into an immutable value
//! computed once per run: file paths, the model index range, numeric
//! precision and the host summary. Every model then borrows it through an
//! `Arc`.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use georadar_directives::Scene;
use georadar_foundation::NumericPrecision;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::RunArgs;
use crate::error::{ConfigurationError, Result};
use crate::model::ModelConfig;
use crate::probe::{HostInfo, HostProbe, SystemProbe};
use crate::settings::{GeneralSettings, MaterialSettings, NumericalDispersion, Solver};

/// How models are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Models run one after another in this process.
    Standard,
    /// Models are farmed out to MPI workers. `spawn` is false when the
    /// workers were started externally.
    Mpi { spawn: bool },
}

impl ExecutionMode {
    pub fn is_mpi(self) -> bool {
        matches!(self, ExecutionMode::Mpi { .. })
    }
}

/// Half-open range of model indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRange {
    pub start: usize,
    pub end: usize,
}

/// Zero means "not requested".
fn requested(value: Option<usize>) -> Option<usize> {
    value.filter(|&v| v > 0)
}

impl ModelRange {
    /// Range for standard (non-MPI) execution, 0-based.
    ///
    /// A task runs exactly one model. A restart runs from `restart - 1` up
    /// to `start + n - 1`, which is one model fewer than `n`.
    pub fn standard(n: usize, restart: Option<usize>, task: Option<usize>) -> Result<Self> {
        if let Some(task) = requested(task) {
            return Ok(Self {
                start: task - 1,
                end: task,
            });
        }
        if let Some(restart) = requested(restart) {
            let start = restart - 1;
            let end = start
                .checked_add(n)
                .ok_or(ConfigurationError::ModelRangeOverflow { start, n })?;
            return Ok(Self {
                start,
                end: end.saturating_sub(1),
            });
        }
        Ok(Self { start: 0, end: n })
    }

    /// Range for MPI execution: 1-based start, `n` models.
    pub fn mpi(n: usize, restart: Option<usize>) -> Result<Self> {
        let start = requested(restart).unwrap_or(1);
        let end = start
            .checked_add(n)
            .ok_or(ConfigurationError::ModelRangeOverflow { start, n })?;
        Ok(Self { start, end })
    }

    pub fn single_model(&self) -> bool {
        self.start == 0 && self.end == 1
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    fn validate(self) -> Result<Self> {
        if self.is_empty() {
            return Err(ConfigurationError::EmptyModelRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(self)
    }
}

/// Resolved, read-only configuration for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    input_file: PathBuf,
    output_file: PathBuf,
    n_models: usize,
    range: ModelRange,
    mode: ExecutionMode,
    precision: NumericPrecision,
    gpu: Vec<usize>,
    geometry_only: bool,
    geometry_fixed: bool,
    write_processed: bool,
    subgrid: bool,
    scenes: Vec<Scene>,
    general: GeneralSettings,
    numerical_dispersion: NumericalDispersion,
    materials: MaterialSettings,
    host: HostInfo,
    terminal_width: usize,
}

impl SimulationConfig {
    /// Resolve against the real host.
    pub fn resolve(args: RunArgs) -> Result<Self> {
        Self::resolve_with(args, &SystemProbe)
    }

    pub fn resolve_with(args: RunArgs, probe: &dyn HostProbe) -> Result<Self> {
        if args.n == 0 {
            return Err(ConfigurationError::ZeroModels);
        }

        let (input_file, output_file) = match (args.input_file, args.output_file) {
            (None, None) => return Err(ConfigurationError::MissingPaths),
            (Some(input), None) => (input.clone(), input),
            (None, Some(output)) => (output.clone(), output),
            (Some(input), Some(output)) => (input, output),
        };

        let precision = NumericPrecision::from_label(&args.precision)?;

        let mode = if args.mpi || args.mpi_no_spawn {
            ExecutionMode::Mpi {
                spawn: !args.mpi_no_spawn,
            }
        } else {
            ExecutionMode::Standard
        };

        let range = match mode {
            ExecutionMode::Standard => ModelRange::standard(args.n, args.restart, args.task)?,
            ExecutionMode::Mpi { .. } => ModelRange::mpi(args.n, args.restart)?,
        }
        .validate()?;

        let mut general = args.general;
        if !args.gpu.is_empty() {
            general.solver = Solver::Cuda;
        }
        let materials = MaterialSettings::new(&precision);

        debug!(
            input = %input_file.display(),
            output = %output_file.display(),
            start = range.start,
            end = range.end,
            single = range.single_model(),
            ?mode,
            precision = %precision.label(),
            dimensions = %general.mode,
            solver = ?general.solver,
            "resolved simulation config"
        );

        Ok(Self {
            input_file,
            output_file,
            n_models: args.n,
            range,
            mode,
            precision,
            gpu: args.gpu,
            geometry_only: args.geometry_only,
            geometry_fixed: args.geometry_fixed,
            write_processed: args.write_processed,
            subgrid: args.subgrid,
            scenes: args.scenes,
            general,
            numerical_dispersion: args.numerical_dispersion,
            materials,
            host: probe.host_info(),
            terminal_width: probe.terminal_width(),
        })
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Output identifier; per-model paths are derived from it.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Model count as requested, before range resolution.
    pub fn n_models(&self) -> usize {
        self.n_models
    }

    pub fn range(&self) -> ModelRange {
        self.range
    }

    pub fn model_start(&self) -> usize {
        self.range.start
    }

    pub fn model_end(&self) -> usize {
        self.range.end
    }

    pub fn single_model(&self) -> bool {
        self.range.single_model()
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn precision(&self) -> &NumericPrecision {
        &self.precision
    }

    pub fn gpu(&self) -> &[usize] {
        &self.gpu
    }

    pub fn geometry_only(&self) -> bool {
        self.geometry_only
    }

    pub fn geometry_fixed(&self) -> bool {
        self.geometry_fixed
    }

    pub fn write_processed(&self) -> bool {
        self.write_processed
    }

    pub fn subgrid(&self) -> bool {
        self.subgrid
    }

    /// Pre-built scenes; empty on the directive-text path.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn general(&self) -> &GeneralSettings {
        &self.general
    }

    pub fn numerical_dispersion(&self) -> &NumericalDispersion {
        &self.numerical_dispersion
    }

    /// Dispersive-material storage before any scene is known.
    pub fn materials(&self) -> &MaterialSettings {
        &self.materials
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn terminal_width(&self) -> usize {
        self.terminal_width
    }

    /// Model configurations for every index in the range, in order.
    pub fn models(self: &Arc<Self>) -> impl Iterator<Item = ModelConfig> + '_ {
        self.range
            .indices()
            .map(move |index| ModelConfig::build(Arc::clone(self), index))
    }
}
