//! Integration test harness for georadar.
//!
//! Drives the whole front end the way the run driver does:
//! input text → directive table → simulation config → per-model scenes.

use std::sync::Arc;

use georadar_config::{
    HostInfo, ModelConfig, Result as ConfigResult, RunArgs, SimulationConfig, StaticProbe,
};
use georadar_directives::{DirectiveTable, SceneObject, parse};
use georadar_foundation::NumericPrecision;

/// Terminal width used by harness probes.
pub const HARNESS_WIDTH: usize = 80;

/// Fixed host facts so tests do not depend on the machine.
pub fn test_probe() -> StaticProbe {
    let host = HostInfo {
        hostname: "harness".to_string(),
        os: "test".to_string(),
        logical_cores: 4,
        physical_cores: 2,
        total_memory: 8 << 30,
    };
    StaticProbe::new(host, HARNESS_WIDTH)
}

/// Resolve run arguments against the harness probe.
pub fn resolve(args: RunArgs) -> ConfigResult<SimulationConfig> {
    SimulationConfig::resolve_with(args, &test_probe())
}

/// Test harness holding a parsed input and its resolved configuration.
pub struct TestHarness {
    table: DirectiveTable,
    sim: Arc<SimulationConfig>,
}

impl TestHarness {
    /// Create a harness from input text for a run of `n` models.
    ///
    /// # Panics
    ///
    /// Panics if the text cannot be read into a table or the run
    /// arguments do not resolve.
    pub fn from_input(input: &str, n: usize) -> Self {
        Self::with_args(input, RunArgs::new(n).with_input_file("harness.in"))
    }

    /// Create a harness from input text and explicit run arguments.
    ///
    /// # Panics
    ///
    /// Panics if the text cannot be read into a table or the run
    /// arguments do not resolve.
    pub fn with_args(input: &str, args: RunArgs) -> Self {
        let table = match DirectiveTable::from_input(input) {
            Ok(t) => t,
            Err(e) => panic!("Input read failed: {}", e),
        };
        let sim = match resolve(args) {
            Ok(s) => Arc::new(s),
            Err(e) => panic!("Configuration failed: {}", e),
        };
        Self { table, sim }
    }

    pub fn table(&self) -> &DirectiveTable {
        &self.table
    }

    pub fn simulation(&self) -> &Arc<SimulationConfig> {
        &self.sim
    }

    pub fn precision(&self) -> &NumericPrecision {
        self.sim.precision()
    }

    /// All model configurations of the run, in index order.
    pub fn models(&self) -> Vec<ModelConfig> {
        self.sim.models().collect()
    }

    /// Scene objects for one model: the pre-built scene when present,
    /// otherwise the parsed directive table.
    ///
    /// # Panics
    ///
    /// Panics if the scene lookup or the parse fails.
    pub fn scene_objects(&self, model: &ModelConfig) -> Vec<SceneObject> {
        match model.scene() {
            Ok(Some(scene)) => scene.objects.clone(),
            Ok(None) => match parse(&self.table) {
                Ok(objects) => objects,
                Err(e) => panic!("Parse failed: {}", e),
            },
            Err(e) => panic!("Scene lookup failed: {}", e),
        }
    }

    /// Parse the table, returning the error instead of panicking.
    pub fn try_parse(&self) -> georadar_directives::Result<Vec<SceneObject>> {
        parse(&self.table)
    }

    /// Kind names of the parsed objects, in order.
    pub fn kinds(&self) -> Vec<&'static str> {
        match self.try_parse() {
            Ok(objects) => objects.iter().map(SceneObject::kind_name).collect(),
            Err(e) => panic!("Parse failed: {}", e),
        }
    }
}
