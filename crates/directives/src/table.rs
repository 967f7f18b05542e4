//! Raw directive table
//!
//! Maps a directive name to its instances in declaration order. Each
//! instance is the untouched argument text after `#name:`; splitting into
//! tokens happens in the parser.
//!
//! # Input text
//!
//! ```text
//! Comment lines do not start with a hash.
//! #waveform: ricker 1 1.5e9 my_ricker
//! #hertzian_dipole: z 0.040 0.170 0 my_ricker
//! #rx: 0.080 0.170 0
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::InputError;
use crate::schema::DirectiveKind;

/// Directive instances keyed by directive name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveTable {
    entries: IndexMap<String, Vec<String>>,
}

/// Strip an optional leading `#` and normalise case.
fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches('#').trim().to_lowercase()
}

impl DirectiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance; `name` may be written with or without its `#`.
    pub fn insert(&mut self, name: &str, instance: impl Into<String>) {
        self.entries
            .entry(normalize_name(name))
            .or_default()
            .push(instance.into());
    }

    /// Builder method: append an instance.
    pub fn with(mut self, name: &str, instance: impl Into<String>) -> Self {
        self.insert(name, instance);
        self
    }

    /// Instances for a directive, empty if it is not used.
    pub fn instances(&self, name: &str) -> &[String] {
        self.entries
            .get(&normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_used(&self, name: &str) -> bool {
        !self.instances(name).is_empty()
    }

    /// All directive names present, in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names that are not multi-use directives. These belong to other
    /// layers (single-use domain and timing commands, geometry primitives).
    pub fn unrecognized(&self) -> Vec<&str> {
        self.names()
            .filter(|name| DirectiveKind::from_name(name).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read `#name: args` commands from input text.
    ///
    /// Lines that do not start with `#` are comments. Commands keep their
    /// order of appearance.
    pub fn from_input(text: &str) -> Result<Self, InputError> {
        let mut table = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if !line.starts_with('#') {
                continue;
            }
            let Some((name, args)) = line.split_once(':') else {
                return Err(InputError::MissingColon {
                    line_number: index + 1,
                    line: line.to_string(),
                });
            };
            trace!(line = index + 1, name, "directive read");
            table.insert(name, args.trim());
        }
        Ok(table)
    }

    /// Read an input file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_input(&text)
    }
}
