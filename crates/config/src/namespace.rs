//! Per-model user namespace
//!
//! The values input expressions may refer to: physical constants, the
//! current and total model numbers, and the absolute input path.

use std::path::{Path, PathBuf};

use georadar_foundation::{C, E0, M0, z0};
use indexmap::IndexMap;
use serde::Serialize;

use crate::simulation::SimulationConfig;

/// A single namespace value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NamespaceValue {
    Float(f64),
    Integer(usize),
    Path(PathBuf),
}

impl NamespaceValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NamespaceValue::Float(v) => Some(*v),
            NamespaceValue::Integer(v) => Some(*v as f64),
            NamespaceValue::Path(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelNamespace {
    pub c: f64,
    pub e0: f64,
    pub m0: f64,
    pub z0: f64,
    /// `model_end + 1`.
    pub number_model_runs: usize,
    /// 1-based.
    pub current_model_run: usize,
    pub input_file: PathBuf,
}

impl ModelNamespace {
    pub fn new(sim: &SimulationConfig, index: usize) -> Self {
        Self {
            c: C,
            e0: E0,
            m0: M0,
            z0: z0(),
            number_model_runs: sim.model_end() + 1,
            current_model_run: index + 1,
            input_file: absolute(sim.input_file()),
        }
    }

    /// Look up a value by the name used in input expressions.
    pub fn get(&self, name: &str) -> Option<NamespaceValue> {
        let value = match name {
            "c" => NamespaceValue::Float(self.c),
            "e0" => NamespaceValue::Float(self.e0),
            "m0" => NamespaceValue::Float(self.m0),
            "z0" => NamespaceValue::Float(self.z0),
            "number_model_runs" => NamespaceValue::Integer(self.number_model_runs),
            "current_model_run" => NamespaceValue::Integer(self.current_model_run),
            "inputfile" => NamespaceValue::Path(self.input_file.clone()),
            _ => return None,
        };
        Some(value)
    }

    pub fn names() -> [&'static str; 7] {
        [
            "c",
            "e0",
            "m0",
            "z0",
            "number_model_runs",
            "current_model_run",
            "inputfile",
        ]
    }

    /// All entries in a stable order.
    pub fn to_map(&self) -> IndexMap<&'static str, NamespaceValue> {
        Self::names()
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }
}

/// Falls back to the path as given if the working directory is unavailable.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
