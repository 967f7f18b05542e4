//! Run-wide settings records
//!
//! Plain bookkeeping read by the solver and the geometry builder: output
//! verbosity, model dimensionality, solver selection, numerical dispersion
//! thresholds and the dispersive-material storage types.

use std::fmt;

use georadar_directives::SceneObject;
use georadar_foundation::{ComplexType, NumericPrecision, RealType};
use serde::{Deserialize, Serialize};

/// Dimensionality of the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelMode {
    #[serde(rename = "2D TMx")]
    TwoDimensionalTmx,
    #[serde(rename = "2D TMy")]
    TwoDimensionalTmy,
    #[serde(rename = "2D TMz")]
    TwoDimensionalTmz,
    #[default]
    #[serde(rename = "3D")]
    ThreeDimensional,
}

impl ModelMode {
    pub fn label(self) -> &'static str {
        match self {
            ModelMode::TwoDimensionalTmx => "2D TMx",
            ModelMode::TwoDimensionalTmy => "2D TMy",
            ModelMode::TwoDimensionalTmz => "2D TMz",
            ModelMode::ThreeDimensional => "3D",
        }
    }

    pub fn is_2d(self) -> bool {
        self != ModelMode::ThreeDimensional
    }
}

impl fmt::Display for ModelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which solver backend runs the field update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solver {
    #[default]
    Cpu,
    Cuda,
    OpenCl,
}

/// General settings for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Print informational messages.
    pub messages: bool,
    pub progressbars: bool,
    pub mode: ModelMode,
    pub solver: Solver,
    /// Translate subgrid object coordinates from main-grid to local-grid
    /// space automatically.
    pub autotranslate: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            messages: true,
            progressbars: true,
            mode: ModelMode::default(),
            solver: Solver::default(),
            autotranslate: false,
        }
    }
}

impl GeneralSettings {
    /// Builder method: set the model mode.
    pub fn with_mode(mut self, mode: ModelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: turn messages and progress bars off.
    pub fn quiet(mut self) -> Self {
        self.messages = false;
        self.progressbars = false;
        self
    }
}

/// Numerical dispersion analysis thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalDispersion {
    /// dB below the peak power of the main frequency used to find the
    /// highest frequency of interest.
    pub highest_freq_thres: f64,
    /// Largest allowed physical phase-velocity error (percent).
    pub max_numerical_disp: f64,
    /// Fewest grid cells per smallest wavelength.
    pub min_grid_sampling: f64,
}

impl Default for NumericalDispersion {
    fn default() -> Self {
        Self {
            highest_freq_thres: 40.0,
            max_numerical_disp: 2.0,
            min_grid_sampling: 3.0,
        }
    }
}

/// Storage settings for dispersive materials.
///
/// The coefficient types follow the run precision. `max_poles` stays zero
/// until a scene with dispersive materials is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSettings {
    pub max_poles: usize,
    pub dispersive_real: RealType,
    pub dispersive_complex: ComplexType,
}

impl MaterialSettings {
    pub fn new(precision: &NumericPrecision) -> Self {
        Self {
            max_poles: 0,
            dispersive_real: precision.real(),
            dispersive_complex: precision.complex(),
        }
    }

    /// Builder method: raise `max_poles` to cover every dispersion in the
    /// scene.
    pub fn with_scene<'a>(mut self, objects: impl IntoIterator<Item = &'a SceneObject>) -> Self {
        let poles = objects
            .into_iter()
            .filter_map(|object| match object {
                SceneObject::DebyeDispersion(d) => Some(d.poles()),
                SceneObject::LorentzDispersion(d) => Some(d.poles()),
                SceneObject::DrudeDispersion(d) => Some(d.poles()),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        self.max_poles = self.max_poles.max(poles);
        self
    }

    pub fn is_dispersive(&self) -> bool {
        self.max_poles > 0
    }
}
