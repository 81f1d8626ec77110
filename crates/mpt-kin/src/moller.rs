//! Møller (electron-electron) two-body kinematics.

use std::f64::consts::TAU;

use mpt_core::constants::{ELECTRON_MASS_MEV, VERTEX_HALF_WIDTH_M};
use mpt_core::{PhaseSpaceState, RngHandle};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Initial kinematic state of one outgoing track at the collision vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleInitialCondition {
    /// Kinetic energy of the track in MeV.
    pub kinetic_energy: f64,
    /// Signed lab-frame polar angle in radians; the scattered and recoil
    /// tracks carry opposite signs.
    pub polar_angle: f64,
    /// Transverse phase-space state at the vertex.
    pub state: PhaseSpaceState,
}

/// Generates the correlated pair of initial conditions for one Møller event.
///
/// `beam_kinetic_energy` is the kinetic energy of the incident electron,
/// `probe_kinetic_energy` that of the scattered track; the recoil track gets
/// the conjugate share from energy conservation against a target at rest.
/// Both tracks share a single azimuth draw and a single vertex offset draw,
/// modelling one collision vertex with one random orientation. Keeping this
/// a single two-track call is what keeps the pair's randomness in lockstep.
///
/// Caller precondition: both kinetic energies must stay inside the physical
/// range where every total energy exceeds the rest mass, otherwise the
/// momentum roots and angle arccosines come out NaN. The energy sweep in the
/// simulator is validated to respect this before any event is generated.
pub fn moller_initial_conditions(
    beam_kinetic_energy: f64,
    probe_kinetic_energy: f64,
    rng: &mut RngHandle,
) -> (ParticleInitialCondition, ParticleInitialCondition) {
    let beam_total = beam_kinetic_energy + ELECTRON_MASS_MEV;
    let probe_total = probe_kinetic_energy + ELECTRON_MASS_MEV;
    let conjugate_total = beam_total + ELECTRON_MASS_MEV - probe_total;
    let conjugate_kinetic = beam_kinetic_energy - probe_kinetic_energy;

    let p0 = momentum(beam_total);
    let p1 = momentum(probe_total);
    let p2 = momentum(conjugate_total);

    // Law of cosines on the momentum triangle; the opposite signs encode
    // transverse-momentum balance about the beam axis.
    let theta1 = ((p0 * p0 + p1 * p1 - p2 * p2) / (2.0 * p0 * p1)).acos();
    let theta2 = -((p0 * p0 + p2 * p2 - p1 * p1) / (2.0 * p0 * p2)).acos();

    let phi = rng.gen_range(0.0..TAU);
    let vertex_x = rng.gen_range(-VERTEX_HALF_WIDTH_M..VERTEX_HALF_WIDTH_M);
    let vertex_y = rng.gen_range(-VERTEX_HALF_WIDTH_M..VERTEX_HALF_WIDTH_M);

    let condition = |kinetic_energy: f64, polar_angle: f64| ParticleInitialCondition {
        kinetic_energy,
        polar_angle,
        state: PhaseSpaceState::new(
            vertex_x,
            polar_angle * phi.cos(),
            vertex_y,
            polar_angle * phi.sin(),
        ),
    };

    (
        condition(probe_kinetic_energy, theta1),
        condition(conjugate_kinetic, theta2),
    )
}

fn momentum(total_energy: f64) -> f64 {
    (total_energy * total_energy - ELECTRON_MASS_MEV * ELECTRON_MASS_MEV).sqrt()
}
