//! Numeric precision registry.
//!
//! Every array the solver allocates (fields, update coefficients,
//! dispersive coefficients) takes its element width from one
//! [`NumericPrecision`] value. It is built once from the run's precision
//! label and handed by value to whatever needs it; nothing mutates it
//! afterwards.
//!
//! | label      | real  | complex     | kernel real | kernel complex      |
//! |------------|-------|-------------|-------------|---------------------|
//! | `"single"` | `f32` | `complex64` | `float`     | `complex<float>`    |
//! | `"double"` | `f64` | `complex128`| `double`    | `complex<double>`   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A precision label that is neither `single` nor `double`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported precision '{0}': expected 'single' or 'double'")]
pub struct UnknownPrecision(pub String);

/// Floating-point precision requested for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Single,
    #[default]
    Double,
}

impl Precision {
    /// The label used on the command line and in run arguments.
    pub fn label(self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Precision {
    type Err = UnknownPrecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Precision::Single),
            "double" => Ok(Precision::Double),
            other => Err(UnknownPrecision(other.to_string())),
        }
    }
}

/// Storage type for real-valued arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealType {
    F32,
    F64,
}

impl RealType {
    /// Bytes per element.
    pub fn size_of(self) -> usize {
        match self {
            RealType::F32 => std::mem::size_of::<f32>(),
            RealType::F64 => std::mem::size_of::<f64>(),
        }
    }

    /// Type name as emitted into generated numeric kernels.
    pub fn kernel_name(self) -> &'static str {
        match self {
            RealType::F32 => "float",
            RealType::F64 => "double",
        }
    }
}

/// Storage type for complex-valued arrays (two reals per element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexType {
    Complex64,
    Complex128,
}

impl ComplexType {
    /// Bytes per element.
    pub fn size_of(self) -> usize {
        match self {
            ComplexType::Complex64 => 2 * std::mem::size_of::<f32>(),
            ComplexType::Complex128 => 2 * std::mem::size_of::<f64>(),
        }
    }

    /// Type name as emitted into generated numeric kernels.
    pub fn kernel_name(self) -> &'static str {
        match self {
            ComplexType::Complex64 => "complex<float>",
            ComplexType::Complex128 => "complex<double>",
        }
    }
}

/// The resolved storage widths for one precision label.
///
/// The four facts (label, real type, complex type, kernel names) are only
/// ever derived together from a [`Precision`], so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericPrecision {
    precision: Precision,
    real: RealType,
    complex: ComplexType,
}

impl NumericPrecision {
    pub fn new(precision: Precision) -> Self {
        let (real, complex) = match precision {
            Precision::Single => (RealType::F32, ComplexType::Complex64),
            Precision::Double => (RealType::F64, ComplexType::Complex128),
        };
        Self {
            precision,
            real,
            complex,
        }
    }

    /// Resolve a precision label such as `"double"`.
    pub fn from_label(label: &str) -> Result<Self, UnknownPrecision> {
        label.parse().map(Self::new)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn label(&self) -> &'static str {
        self.precision.label()
    }

    /// Storage for real-valued field and coefficient arrays.
    pub fn real(&self) -> RealType {
        self.real
    }

    /// Storage for complex-valued (dispersive, fractal) arrays.
    pub fn complex(&self) -> ComplexType {
        self.complex
    }

    pub fn kernel_real(&self) -> &'static str {
        self.real.kernel_name()
    }

    pub fn kernel_complex(&self) -> &'static str {
        self.complex.kernel_name()
    }
}

impl Default for NumericPrecision {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_double() {
        let p = NumericPrecision::default();
        assert_eq!(p.label(), "double");
        assert_eq!(p.real(), RealType::F64);
        assert_eq!(p.complex(), ComplexType::Complex128);
        assert_eq!(p.kernel_real(), "double");
        assert_eq!(p.kernel_complex(), "complex<double>");
    }

    #[test]
    fn test_single_precision() {
        let p = NumericPrecision::from_label("single").unwrap();
        assert_eq!(p.precision(), Precision::Single);
        assert_eq!(p.real(), RealType::F32);
        assert_eq!(p.complex(), ComplexType::Complex64);
        assert_eq!(p.kernel_real(), "float");
        assert_eq!(p.kernel_complex(), "complex<float>");
    }

    #[test]
    fn test_complex_is_twice_real() {
        for precision in [Precision::Single, Precision::Double] {
            let p = NumericPrecision::new(precision);
            assert_eq!(p.complex().size_of(), 2 * p.real().size_of());
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = NumericPrecision::from_label("half").unwrap_err();
        assert_eq!(err, UnknownPrecision("half".to_string()));
        assert!(err.to_string().contains("'half'"));
    }

    #[test]
    fn test_label_is_case_sensitive() {
        assert!("Double".parse::<Precision>().is_err());
    }

    #[test]
    fn test_precision_serde_label() {
        let json = serde_json::to_string(&Precision::Single).unwrap();
        assert_eq!(json, "\"single\"");
    }
}
