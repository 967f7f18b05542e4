//! Per-model configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use georadar_directives::{Scene, SceneObject};

use crate::error::{ConfigurationError, Result};
use crate::namespace::ModelNamespace;
use crate::settings::MaterialSettings;
use crate::simulation::SimulationConfig;

/// Extension of per-model output files.
pub const OUTPUT_EXTENSION: &str = "out";

/// Configuration for one model of a run.
///
/// Built from the shared [`SimulationConfig`] and a 0-based model index;
/// everything here is derived, nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    sim: Arc<SimulationConfig>,
    index: usize,
    suffix: String,
    output_file: PathBuf,
    snapshot_dir: PathBuf,
    reuse_geometry: bool,
}

impl ModelConfig {
    pub fn build(sim: Arc<SimulationConfig>, index: usize) -> Self {
        let suffix = if sim.single_model() {
            String::new()
        } else {
            (index + 1).to_string()
        };

        let base = sim.output_file();
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent = base.parent().map(PathBuf::from).unwrap_or_default();
        let output_file = parent.join(format!("{stem}{suffix}.{OUTPUT_EXTENSION}"));
        let snapshot_dir = parent.join(format!("{stem}{suffix}_snaps"));
        let reuse_geometry = sim.geometry_fixed() && index > sim.model_start();

        Self {
            sim,
            index,
            suffix,
            output_file,
            snapshot_dir,
            reuse_geometry,
        }
    }

    /// 0-based model index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based model number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Appended to output names; empty for a single-model run.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn output_file_path(&self) -> &Path {
        &self.output_file
    }

    pub fn snapshot_dir(&self) -> &Path {
        &self.snapshot_dir
    }

    /// Whether the geometry built for an earlier model of this run can be
    /// used again. Only fixed-geometry runs reuse, and never for the first
    /// model of the range.
    pub fn reuse_geometry(&self) -> bool {
        self.reuse_geometry
    }

    /// Dispersive-material storage for this model's scene objects.
    pub fn materials<'a>(
        &self,
        objects: impl IntoIterator<Item = &'a SceneObject>,
    ) -> MaterialSettings {
        self.sim.materials().with_scene(objects)
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.sim
    }

    /// Pre-built scene for this model, or `None` when the run reads
    /// directive text instead.
    pub fn scene(&self) -> Result<Option<&Scene>> {
        let scenes = self.sim.scenes();
        if scenes.is_empty() {
            return Ok(None);
        }
        scenes
            .get(self.index)
            .map(Some)
            .ok_or(ConfigurationError::MissingScene {
                index: self.index,
                scenes: scenes.len(),
            })
    }

    /// Names visible to expressions in this model's input.
    pub fn namespace(&self) -> ModelNamespace {
        ModelNamespace::new(&self.sim, self.index)
    }

    pub fn banner_text(&self) -> String {
        format!(
            "\n--- Model {}/{}, input file: {}",
            self.number(),
            self.sim.model_end(),
            self.sim.input_file().display()
        )
    }

    /// Banner line padded with dashes to one short of `width` columns.
    /// No dashes are added when the text is already that wide.
    pub fn banner(&self, width: usize) -> String {
        let text = self.banner_text();
        let dashes = width.saturating_sub(1 + text.chars().count());
        format!("{text} {}\n", "-".repeat(dashes))
    }
}
