//! Georadar Directives
//!
//! Validation and construction of multi-use input directives: sources,
//! receivers, materials, dispersions, outputs and PML settings. Input text
//! is read into a [`DirectiveTable`], and [`parse`] turns that table into
//! an ordered list of typed [`SceneObject`] descriptors.
//!
//! The arity of every directive lives in one declarative table,
//! [`schema::SCHEMAS`]; the parser itself is a single generic loop.
//!
//! # Example
//!
//! ```
//! use georadar_directives::{parse, DirectiveTable, SceneObject};
//!
//! let table = DirectiveTable::new()
//!     .with("waveform", "ricker 1 1.5e9 my_ricker")
//!     .with("hertzian_dipole", "z 0.040 0.170 0 my_ricker");
//!
//! let objects = parse(&table).unwrap();
//! assert_eq!(objects.len(), 2);
//! assert!(matches!(objects[0], SceneObject::Waveform(_)));
//! ```

mod builders;
pub mod error;
pub mod parser;
pub mod scene;
pub mod schema;
pub mod table;

pub use error::{DirectiveError, DirectiveErrorKind, Expected, InputError, Result};
pub use parser::{parse, parse_instance, parse_scene};
pub use scene::*;
pub use schema::{Arity, DirectiveKind, DirectiveSchema};
pub use table::DirectiveTable;
