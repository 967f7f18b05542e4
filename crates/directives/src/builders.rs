//! Per-directive descriptor construction.
//!
//! Each builder reads fields positionally from an arity-checked token list.
//! Token counts have already been validated against the directive's
//! [`Arity`](crate::schema::Arity), so branching here is only on shape.

use georadar_foundation::{MaterialId, RxId, WaveformId};

use crate::Result;
use crate::parser::Tokens;
use crate::scene::{
    ActivationWindow, CfsScaling, DebyeDispersion, DrudeDispersion, GeometryObjectsWrite,
    GeometryView, HertzianDipole, LorentzDispersion, MagneticDipole, Material, PmlCfs, Rx,
    RxArray, SceneObject, Snapshot, SoilPeplinski, TransmissionLine, VoltageSource, Waveform,
};

/// Trailing `start end` pair, present only in the extended source form.
fn window(t: &mut Tokens<'_>) -> Result<Option<ActivationWindow>> {
    if t.remaining() < 2 {
        return Ok(None);
    }
    Ok(Some(ActivationWindow {
        start: t.float("start time")?,
        end: t.float("end time")?,
    }))
}

fn material_ids(t: &mut Tokens<'_>) -> Vec<MaterialId> {
    t.rest().into_iter().map(MaterialId::from).collect()
}

pub fn waveform(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::Waveform(Waveform {
        wave_type: t.string("waveform type")?,
        amplitude: t.float("amplitude")?,
        frequency: t.float("frequency")?,
        id: WaveformId::from(t.string("id")?),
    }))
}

pub fn voltage_source(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::VoltageSource(VoltageSource {
        polarisation: t.lower("polarisation")?,
        position: t.point("position")?,
        resistance: t.float("resistance")?,
        waveform_id: WaveformId::from(t.string("waveform id")?),
        window: window(t)?,
    }))
}

pub fn hertzian_dipole(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::HertzianDipole(HertzianDipole {
        polarisation: t.lower("polarisation")?,
        position: t.point("position")?,
        waveform_id: WaveformId::from(t.string("waveform id")?),
        window: window(t)?,
    }))
}

pub fn magnetic_dipole(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::MagneticDipole(MagneticDipole {
        polarisation: t.lower("polarisation")?,
        position: t.point("position")?,
        waveform_id: WaveformId::from(t.string("waveform id")?),
        window: window(t)?,
    }))
}

pub fn transmission_line(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::TransmissionLine(TransmissionLine {
        polarisation: t.lower("polarisation")?,
        position: t.point("position")?,
        resistance: t.float("resistance")?,
        waveform_id: WaveformId::from(t.string("waveform id")?),
        window: window(t)?,
    }))
}

pub fn rx(t: &mut Tokens<'_>) -> Result<SceneObject> {
    let position = t.point("position")?;
    if t.remaining() == 0 {
        return Ok(SceneObject::Rx(Rx {
            position,
            id: None,
            outputs: Vec::new(),
        }));
    }
    let id = RxId::from(t.string("id")?);
    Ok(SceneObject::Rx(Rx {
        position,
        id: Some(id),
        outputs: t.rest(),
    }))
}

pub fn rx_array(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::RxArray(RxArray {
        p1: t.point("lower left corner")?,
        p2: t.point("upper right corner")?,
        step: t.point("step")?,
    }))
}

pub fn snapshot(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::Snapshot(Snapshot {
        p1: t.point("lower left corner")?,
        p2: t.point("upper right corner")?,
        step: t.point("discretisation")?,
        trigger: t.trigger("iterations or time")?,
        filename: t.string("filename")?,
    }))
}

pub fn material(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::Material(Material {
        permittivity: t.float("relative permittivity")?,
        conductivity: t.float("conductivity")?,
        permeability: t.float("relative permeability")?,
        magnetic_loss: t.float("magnetic loss")?,
        id: MaterialId::from(t.string("id")?),
    }))
}

pub fn debye(t: &mut Tokens<'_>) -> Result<SceneObject> {
    let poles = t.pole_count()?;
    let mut er_delta = Vec::with_capacity(poles);
    let mut tau = Vec::with_capacity(poles);
    for _ in 0..poles {
        er_delta.push(t.float("permittivity difference")?);
        tau.push(t.float("relaxation time")?);
    }
    Ok(SceneObject::DebyeDispersion(DebyeDispersion {
        er_delta,
        tau,
        material_ids: material_ids(t),
    }))
}

pub fn lorentz(t: &mut Tokens<'_>) -> Result<SceneObject> {
    let poles = t.pole_count()?;
    let mut er_delta = Vec::with_capacity(poles);
    let mut tau = Vec::with_capacity(poles);
    let mut alpha = Vec::with_capacity(poles);
    for _ in 0..poles {
        er_delta.push(t.float("permittivity difference")?);
        tau.push(t.float("relaxation time")?);
        alpha.push(t.float("pole frequency")?);
    }
    Ok(SceneObject::LorentzDispersion(LorentzDispersion {
        er_delta,
        tau,
        alpha,
        material_ids: material_ids(t),
    }))
}

pub fn drude(t: &mut Tokens<'_>) -> Result<SceneObject> {
    let poles = t.pole_count()?;
    let mut tau = Vec::with_capacity(poles);
    let mut alpha = Vec::with_capacity(poles);
    for _ in 0..poles {
        tau.push(t.float("relaxation time")?);
        alpha.push(t.float("pole frequency")?);
    }
    Ok(SceneObject::DrudeDispersion(DrudeDispersion {
        tau,
        alpha,
        material_ids: material_ids(t),
    }))
}

pub fn soil_peplinski(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::SoilPeplinski(SoilPeplinski {
        sand_fraction: t.float("sand fraction")?,
        clay_fraction: t.float("clay fraction")?,
        bulk_density: t.float("bulk density")?,
        sand_density: t.float("sand particle density")?,
        water_fraction_lower: t.float("lower water fraction")?,
        water_fraction_upper: t.float("upper water fraction")?,
        id: MaterialId::from(t.string("id")?),
    }))
}

pub fn geometry_view(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::GeometryView(GeometryView {
        p1: t.point("lower left corner")?,
        p2: t.point("upper right corner")?,
        step: t.point("discretisation")?,
        filename: t.string("filename")?,
        output_type: t.lower("output type")?,
    }))
}

pub fn geometry_objects_write(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::GeometryObjectsWrite(GeometryObjectsWrite {
        p1: t.point("lower left corner")?,
        p2: t.point("upper right corner")?,
        filename: t.string("filename")?,
    }))
}

fn cfs_scaling(t: &mut Tokens<'_>) -> Result<CfsScaling> {
    Ok(CfsScaling {
        profile: t.lower("scaling profile")?,
        direction: t.lower("scaling direction")?,
        min: t.float("minimum")?,
        max: t.optional_float("maximum")?,
    })
}

pub fn pml_cfs(t: &mut Tokens<'_>) -> Result<SceneObject> {
    Ok(SceneObject::PmlCfs(PmlCfs {
        alpha: cfs_scaling(t)?,
        kappa: cfs_scaling(t)?,
        sigma: cfs_scaling(t)?,
    }))
}
