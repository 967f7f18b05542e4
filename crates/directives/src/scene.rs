//! Scene-object descriptors
//!
//! Immutable records, one per directive instance. Descriptors never hold
//! references to each other: a source names its waveform and a dispersion
//! names its materials by identifier, and the geometry builder resolves
//! those links later.

use georadar_foundation::{MaterialId, Point3, RxId, WaveformId};
use serde::{Deserialize, Serialize};

/// Time window during which a source is active (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationWindow {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    pub wave_type: String,
    pub amplitude: f64,
    /// Centre frequency (Hz).
    pub frequency: f64,
    pub id: WaveformId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageSource {
    pub polarisation: String,
    pub position: Point3,
    /// Internal resistance (Ohms).
    pub resistance: f64,
    pub waveform_id: WaveformId,
    pub window: Option<ActivationWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HertzianDipole {
    pub polarisation: String,
    pub position: Point3,
    pub waveform_id: WaveformId,
    pub window: Option<ActivationWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagneticDipole {
    pub polarisation: String,
    pub position: Point3,
    pub waveform_id: WaveformId,
    pub window: Option<ActivationWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionLine {
    pub polarisation: String,
    pub position: Point3,
    /// Characteristic resistance (Ohms).
    pub resistance: f64,
    pub waveform_id: WaveformId,
    pub window: Option<ActivationWindow>,
}

/// A receiver. Without an id it records the default field outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rx {
    pub position: Point3,
    pub id: Option<RxId>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RxArray {
    pub p1: Point3,
    pub p2: Point3,
    pub step: Point3,
}

/// When a snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotTrigger {
    /// After this many solver iterations.
    Iterations(i64),
    /// After this much simulated time (seconds).
    Time(f64),
}

impl SnapshotTrigger {
    /// Integer first; a token that only parses as a float (`"10.0"`) is a time.
    ///
    /// An integer-shaped token too large for `i64` is rejected rather than
    /// read as a time.
    pub fn parse(token: &str) -> Option<Self> {
        if is_integer_shaped(token) {
            return token.parse::<i64>().ok().map(SnapshotTrigger::Iterations);
        }
        token.parse::<f64>().ok().map(SnapshotTrigger::Time)
    }
}

/// Optional sign followed by ASCII digits only.
pub(crate) fn is_integer_shaped(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub p1: Point3,
    pub p2: Point3,
    pub step: Point3,
    pub trigger: SnapshotTrigger,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Relative permittivity.
    pub permittivity: f64,
    /// Conductivity (S/m).
    pub conductivity: f64,
    /// Relative permeability.
    pub permeability: f64,
    /// Magnetic loss (Ohms/m).
    pub magnetic_loss: f64,
    pub id: MaterialId,
}

/// Multi-pole Debye dispersion added to existing materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebyeDispersion {
    pub er_delta: Vec<f64>,
    pub tau: Vec<f64>,
    pub material_ids: Vec<MaterialId>,
}

/// Multi-pole Lorentz dispersion added to existing materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorentzDispersion {
    pub er_delta: Vec<f64>,
    pub tau: Vec<f64>,
    pub alpha: Vec<f64>,
    pub material_ids: Vec<MaterialId>,
}

/// Multi-pole Drude dispersion added to existing materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrudeDispersion {
    pub tau: Vec<f64>,
    pub alpha: Vec<f64>,
    pub material_ids: Vec<MaterialId>,
}

macro_rules! impl_poles {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Number of poles in this dispersion.
                pub fn poles(&self) -> usize {
                    self.$field.len()
                }
            }
        )*
    };
}

impl_poles!(
    DebyeDispersion => tau,
    LorentzDispersion => tau,
    DrudeDispersion => tau,
);

/// Peplinski mixing model for a soil with a range of water content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilPeplinski {
    pub sand_fraction: f64,
    pub clay_fraction: f64,
    /// Bulk density (g/cm^3).
    pub bulk_density: f64,
    /// Density of the sand particles (g/cm^3).
    pub sand_density: f64,
    pub water_fraction_lower: f64,
    pub water_fraction_upper: f64,
    pub id: MaterialId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryView {
    pub p1: Point3,
    pub p2: Point3,
    pub step: Point3,
    pub filename: String,
    /// `n` for per-cell or `f` for fine per-edge output.
    pub output_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryObjectsWrite {
    pub p1: Point3,
    pub p2: Point3,
    pub filename: String,
}

/// Scaling of one complex-frequency-shifted PML parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfsScaling {
    pub profile: String,
    pub direction: String,
    pub min: f64,
    /// `None` lets the solver pick the optimal maximum.
    pub max: Option<f64>,
}

/// One order of a CFS PML: alpha, kappa and sigma scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmlCfs {
    pub alpha: CfsScaling,
    pub kappa: CfsScaling,
    pub sigma: CfsScaling,
}

/// Any descriptor the directive parser can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneObject {
    Waveform(Waveform),
    VoltageSource(VoltageSource),
    HertzianDipole(HertzianDipole),
    MagneticDipole(MagneticDipole),
    TransmissionLine(TransmissionLine),
    Rx(Rx),
    RxArray(RxArray),
    Snapshot(Snapshot),
    Material(Material),
    DebyeDispersion(DebyeDispersion),
    LorentzDispersion(LorentzDispersion),
    DrudeDispersion(DrudeDispersion),
    SoilPeplinski(SoilPeplinski),
    GeometryView(GeometryView),
    GeometryObjectsWrite(GeometryObjectsWrite),
    PmlCfs(PmlCfs),
}

impl SceneObject {
    /// Short name of the descriptor variant, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SceneObject::Waveform(_) => "waveform",
            SceneObject::VoltageSource(_) => "voltage_source",
            SceneObject::HertzianDipole(_) => "hertzian_dipole",
            SceneObject::MagneticDipole(_) => "magnetic_dipole",
            SceneObject::TransmissionLine(_) => "transmission_line",
            SceneObject::Rx(_) => "rx",
            SceneObject::RxArray(_) => "rx_array",
            SceneObject::Snapshot(_) => "snapshot",
            SceneObject::Material(_) => "material",
            SceneObject::DebyeDispersion(_) => "debye_dispersion",
            SceneObject::LorentzDispersion(_) => "lorentz_dispersion",
            SceneObject::DrudeDispersion(_) => "drude_dispersion",
            SceneObject::SoilPeplinski(_) => "soil_peplinski",
            SceneObject::GeometryView(_) => "geometry_view",
            SceneObject::GeometryObjectsWrite(_) => "geometry_objects_write",
            SceneObject::PmlCfs(_) => "pml_cfs",
        }
    }
}

/// A pre-built scene: the objects for one model, supplied directly
/// through the API instead of as directive text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Builder method: add an object.
    pub fn with(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }
}

impl From<Vec<SceneObject>> for Scene {
    fn from(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }
}
