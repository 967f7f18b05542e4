//! Georadar Foundation
//!
//! Core values shared by every georadar crate: free-space constants,
//! the numeric precision registry that fixes the storage width of every
//! field and coefficient array, and the typed identifiers that scene
//! objects use to refer to each other.

pub mod constants;
pub mod ids;
pub mod precision;

pub use constants::{C, E0, M0, z0};
pub use ids::{MaterialId, RxId, WaveformId};
pub use precision::{ComplexType, NumericPrecision, Precision, RealType, UnknownPrecision};

/// A point or extent in model space, in metres.
pub type Point3 = (f64, f64, f64);
