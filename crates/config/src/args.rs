//! Run arguments shared by the CLI and the API.

use std::path::PathBuf;

use georadar_directives::Scene;
use serde::{Deserialize, Serialize};

use crate::settings::{GeneralSettings, NumericalDispersion};

/// Everything a caller can ask of a run.
///
/// The CLI fills this from flags; API callers build it directly or
/// deserialize it. Zero values for `restart` and `task` mean "not
/// requested", the same as leaving them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunArgs {
    /// Number of models to run.
    pub n: usize,
    pub input_file: Option<PathBuf>,
    /// Output file identifier. Defaults to the input file path.
    pub output_file: Option<PathBuf>,
    /// 1-based model to restart a batch from.
    pub restart: Option<usize>,
    /// 1-based job-array task; runs exactly that one model.
    pub task: Option<usize>,
    pub mpi: bool,
    pub mpi_no_spawn: bool,
    /// GPU device ids, carried through for the solver.
    pub gpu: Vec<usize>,
    pub geometry_only: bool,
    pub geometry_fixed: bool,
    pub write_processed: bool,
    pub subgrid: bool,
    /// `single` or `double`.
    pub precision: String,
    /// Pre-built scenes, one per model, bypassing directive text.
    pub scenes: Vec<Scene>,
    pub general: GeneralSettings,
    pub numerical_dispersion: NumericalDispersion,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            n: 1,
            input_file: None,
            output_file: None,
            restart: None,
            task: None,
            mpi: false,
            mpi_no_spawn: false,
            gpu: Vec::new(),
            geometry_only: false,
            geometry_fixed: false,
            write_processed: false,
            subgrid: false,
            precision: "double".to_string(),
            scenes: Vec::new(),
            general: GeneralSettings::default(),
            numerical_dispersion: NumericalDispersion::default(),
        }
    }
}

impl RunArgs {
    /// Arguments for running `n` models with everything else defaulted.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Builder method: set the input file.
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Builder method: set the output file identifier.
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Builder method: restart from a 1-based model number.
    pub fn with_restart(mut self, restart: usize) -> Self {
        self.restart = Some(restart);
        self
    }

    /// Builder method: run a single 1-based job-array task.
    pub fn with_task(mut self, task: usize) -> Self {
        self.task = Some(task);
        self
    }

    /// Builder method: use the MPI model-range policy.
    pub fn with_mpi(mut self) -> Self {
        self.mpi = true;
        self
    }

    /// Builder method: set the precision label.
    pub fn with_precision(mut self, precision: impl Into<String>) -> Self {
        self.precision = precision.into();
        self
    }

    /// Builder method: supply pre-built scenes.
    pub fn with_scenes(mut self, scenes: Vec<Scene>) -> Self {
        self.scenes = scenes;
        self
    }

    /// Builder method: only build geometry, no field simulation.
    pub fn with_geometry_only(mut self) -> Self {
        self.geometry_only = true;
        self
    }

    /// Builder method: geometry stays the same between models.
    pub fn with_geometry_fixed(mut self) -> Self {
        self.geometry_fixed = true;
        self
    }

    /// Builder method: set the general settings.
    pub fn with_general(mut self, general: GeneralSettings) -> Self {
        self.general = general;
        self
    }

    /// Builder method: write the processed input file.
    pub fn with_write_processed(mut self) -> Self {
        self.write_processed = true;
        self
    }
}
