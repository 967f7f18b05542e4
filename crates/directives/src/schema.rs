//! Declarative directive schema
//!
//! One [`DirectiveSchema`] per multi-use directive: its name, the token
//! counts it accepts, an optional cap on how many times it may appear, and
//! the builder that turns its tokens into a [`SceneObject`]. The parser is
//! a single generic loop over [`SCHEMAS`], which is also the order scene
//! objects are emitted in.

use crate::builders;
use crate::error::{DirectiveErrorKind, Expected};
use crate::parser::Tokens;
use crate::scene::SceneObject;

/// Every multi-use directive, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectiveKind {
    Waveform,
    VoltageSource,
    HertzianDipole,
    MagneticDipole,
    TransmissionLine,
    Rx,
    RxArray,
    Snapshot,
    Material,
    DispersionDebye,
    DispersionLorentz,
    DispersionDrude,
    SoilPeplinski,
    GeometryView,
    GeometryObjectsWrite,
    PmlCfs,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 16] = [
        DirectiveKind::Waveform,
        DirectiveKind::VoltageSource,
        DirectiveKind::HertzianDipole,
        DirectiveKind::MagneticDipole,
        DirectiveKind::TransmissionLine,
        DirectiveKind::Rx,
        DirectiveKind::RxArray,
        DirectiveKind::Snapshot,
        DirectiveKind::Material,
        DirectiveKind::DispersionDebye,
        DirectiveKind::DispersionLorentz,
        DirectiveKind::DispersionDrude,
        DirectiveKind::SoilPeplinski,
        DirectiveKind::GeometryView,
        DirectiveKind::GeometryObjectsWrite,
        DirectiveKind::PmlCfs,
    ];

    /// The directive name as written after `#` in input text.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::Waveform => "waveform",
            DirectiveKind::VoltageSource => "voltage_source",
            DirectiveKind::HertzianDipole => "hertzian_dipole",
            DirectiveKind::MagneticDipole => "magnetic_dipole",
            DirectiveKind::TransmissionLine => "transmission_line",
            DirectiveKind::Rx => "rx",
            DirectiveKind::RxArray => "rx_array",
            DirectiveKind::Snapshot => "snapshot",
            DirectiveKind::Material => "material",
            DirectiveKind::DispersionDebye => "add_dispersion_debye",
            DirectiveKind::DispersionLorentz => "add_dispersion_lorentz",
            DirectiveKind::DispersionDrude => "add_dispersion_drude",
            DirectiveKind::SoilPeplinski => "soil_peplinski",
            DirectiveKind::GeometryView => "geometry_view",
            DirectiveKind::GeometryObjectsWrite => "geometry_objects_write",
            DirectiveKind::PmlCfs => "pml_cfs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn schema(self) -> &'static DirectiveSchema {
        &SCHEMAS[self as usize]
    }
}

/// Token counts a directive instance may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// A base form, or the base form extended by an activation window.
    Either(usize, usize),
    /// One short form, or any count from `at_least` upwards.
    ExactlyOrAtLeast { exactly: usize, at_least: usize },
    /// A leading pole count `P`, then `P` groups of `per_pole` values, then
    /// one or more material ids. Never fewer than `at_least` tokens.
    Poles { per_pole: usize, at_least: usize },
}

impl Arity {
    /// Check a token count. For [`Arity::Poles`] the leading token is read
    /// as the pole count, so the full token list is needed.
    pub fn check(&self, tokens: &[&str]) -> Result<(), DirectiveErrorKind> {
        let found = tokens.len();
        let expected = match *self {
            Arity::Exactly(n) if found == n => return Ok(()),
            Arity::Exactly(n) => Expected::Exactly(n),
            Arity::Either(short, long) if found == short || found == long => return Ok(()),
            Arity::Either(short, _) if found < short => Expected::AtLeast(short),
            Arity::Either(_, long) if found > long => Expected::AtMost(long),
            Arity::Either(short, long) => Expected::EitherOf(short, long),
            Arity::ExactlyOrAtLeast { exactly, at_least }
                if found == exactly || found >= at_least =>
            {
                return Ok(());
            }
            Arity::ExactlyOrAtLeast { .. } => Expected::Irregular,
            Arity::Poles { at_least, .. } if found < at_least => Expected::AtLeast(at_least),
            Arity::Poles { per_pole, at_least } => {
                let poles = parse_pole_count(tokens[0])?;
                // count token + pole values + at least one material id
                let needed = per_pole
                    .checked_mul(poles)
                    .and_then(|values| values.checked_add(2))
                    .ok_or(DirectiveErrorKind::InvalidPoleCount { poles })?
                    .max(at_least);
                if found >= needed {
                    return Ok(());
                }
                Expected::AtLeast(needed)
            }
        };
        Err(DirectiveErrorKind::Arity { expected, found })
    }
}

pub(crate) fn parse_pole_count(token: &str) -> Result<usize, DirectiveErrorKind> {
    let poles = token
        .parse::<usize>()
        .map_err(|_| DirectiveErrorKind::InvalidInteger {
            field: "pole count",
            token: token.to_string(),
        })?;
    if poles == 0 {
        return Err(DirectiveErrorKind::InvalidPoleCount { poles });
    }
    Ok(poles)
}

/// Builds one scene object from an arity-checked token list.
pub type BuildFn = fn(&mut Tokens<'_>) -> crate::Result<SceneObject>;

/// Validation and construction rules for one directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveSchema {
    pub kind: DirectiveKind,
    pub arity: Arity,
    /// Most instances allowed per model, if capped.
    pub max_instances: Option<usize>,
    pub build: BuildFn,
}

impl DirectiveSchema {
    const fn new(kind: DirectiveKind, arity: Arity, build: BuildFn) -> Self {
        Self {
            kind,
            arity,
            max_instances: None,
            build,
        }
    }

    const fn capped(mut self, max: usize) -> Self {
        self.max_instances = Some(max);
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Schemas indexed by [`DirectiveKind`] discriminant.
pub static SCHEMAS: [DirectiveSchema; 16] = [
    DirectiveSchema::new(DirectiveKind::Waveform, Arity::Exactly(4), builders::waveform),
    DirectiveSchema::new(
        DirectiveKind::VoltageSource,
        Arity::Either(6, 8),
        builders::voltage_source,
    ),
    DirectiveSchema::new(
        DirectiveKind::HertzianDipole,
        Arity::Either(5, 7),
        builders::hertzian_dipole,
    ),
    DirectiveSchema::new(
        DirectiveKind::MagneticDipole,
        Arity::Either(5, 7),
        builders::magnetic_dipole,
    ),
    DirectiveSchema::new(
        DirectiveKind::TransmissionLine,
        Arity::Either(6, 8),
        builders::transmission_line,
    ),
    DirectiveSchema::new(
        DirectiveKind::Rx,
        Arity::ExactlyOrAtLeast {
            exactly: 3,
            at_least: 5,
        },
        builders::rx,
    ),
    DirectiveSchema::new(DirectiveKind::RxArray, Arity::Exactly(9), builders::rx_array),
    DirectiveSchema::new(DirectiveKind::Snapshot, Arity::Exactly(11), builders::snapshot),
    DirectiveSchema::new(DirectiveKind::Material, Arity::Exactly(5), builders::material),
    DirectiveSchema::new(
        DirectiveKind::DispersionDebye,
        Arity::Poles {
            per_pole: 2,
            at_least: 4,
        },
        builders::debye,
    ),
    DirectiveSchema::new(
        DirectiveKind::DispersionLorentz,
        Arity::Poles {
            per_pole: 3,
            at_least: 5,
        },
        builders::lorentz,
    ),
    DirectiveSchema::new(
        DirectiveKind::DispersionDrude,
        Arity::Poles {
            per_pole: 2,
            at_least: 5,
        },
        builders::drude,
    ),
    DirectiveSchema::new(
        DirectiveKind::SoilPeplinski,
        Arity::Exactly(7),
        builders::soil_peplinski,
    ),
    DirectiveSchema::new(
        DirectiveKind::GeometryView,
        Arity::Exactly(11),
        builders::geometry_view,
    ),
    DirectiveSchema::new(
        DirectiveKind::GeometryObjectsWrite,
        Arity::Exactly(7),
        builders::geometry_objects_write,
    ),
    DirectiveSchema::new(DirectiveKind::PmlCfs, Arity::Exactly(12), builders::pml_cfs)
        .capped(2),
];
