//! Free-space electromagnetic constants (CODATA 2018).

/// Speed of light in vacuum (m/s).
pub const C: f64 = 299_792_458.0;

/// Vacuum magnetic permeability (H/m).
pub const M0: f64 = 1.256_637_062_12e-6;

/// Vacuum electric permittivity (F/m).
pub const E0: f64 = 8.854_187_812_8e-12;

/// Impedance of free space (Ohms), `sqrt(m0 / e0)`.
pub fn z0() -> f64 {
    (M0 / E0).sqrt()
}
