//! The energy-sweep simulator: generates Møller pairs across the probe
//! window, transports every track to the detector plane and collects the
//! Mott background sample.

use mpt_core::constants::{
    BEAM_KINETIC_ENERGY_MEV, MOTT_TRACK_COUNT, QUADRUPOLE_LENGTH_M, SOLENOID_REFERENCE_LENGTH_M,
};
use mpt_core::{MptError, Point2, RngHandle};
use mpt_kin::{moller_initial_conditions, mott_initial_state};
use mpt_optics::{Beamline, Element};
use serde::{Deserialize, Serialize};

use crate::config::PhysicsParams;
use crate::determinism::{moller_stream_seed, mott_stream_seed};

/// Everything one sweep produces, recomputed in full per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Transported Møller tracks at the detector plane, two per event, in
    /// sweep order.
    pub moller_points: Vec<Point2>,
    /// Transported Mott background tracks at the detector plane.
    pub mott_points: Vec<Point2>,
    /// Originating kinetic energy of each Møller track, parallel to
    /// `moller_points`.
    pub source_energies: Vec<f64>,
    /// Lower bound of the probe-energy window in MeV.
    pub energy_range_min: f64,
    /// Upper bound of the probe-energy window in MeV.
    pub energy_range_max: f64,
}

/// Runs one full sweep.
///
/// The result is a pure function of the parameters and the master seed: the
/// Møller sweep and the Mott background each draw from their own derived
/// substream, so repeated calls reproduce bit-identical output.
pub fn simulate(params: &PhysicsParams, master_seed: u64) -> Result<SimulationResult, MptError> {
    params.validate()?;

    let mut moller_rng = RngHandle::from_seed(moller_stream_seed(master_seed));
    let mut mott_rng = RngHandle::from_seed(mott_stream_seed(master_seed));

    let energy_range_min = params.center_energy - params.energy_half_width;
    let energy_range_max = params.center_energy + params.energy_half_width;
    let steps = params.particle_count;

    let moller_line = Beamline::new(vec![
        Element::Solenoid {
            field: params.solenoid_field,
            length: SOLENOID_REFERENCE_LENGTH_M * params.solenoid_length_scale,
        },
        Element::Drift {
            length: params.drift_length,
        },
        Element::Quadrupole {
            gradient: params.quad_gradient,
            length: QUADRUPOLE_LENGTH_M,
        },
        Element::Drift {
            length: params.exit_drift_length,
        },
    ]);

    let mut moller_points = Vec::with_capacity(2 * (steps + 1));
    let mut source_energies = Vec::with_capacity(2 * (steps + 1));

    for step in 0..=steps {
        let fraction = step as f64 / steps as f64;
        let probe_energy = energy_range_min + (energy_range_max - energy_range_min) * fraction;
        let (scattered, recoil) =
            moller_initial_conditions(BEAM_KINETIC_ENERGY_MEV, probe_energy, &mut moller_rng);

        // The correction angle belongs to the event, not the track: it is
        // taken from the first transported track and reused for the second.
        let mut correction: Option<(f64, f64)> = None;
        for condition in [scattered, recoil] {
            let transported = moller_line.transport(condition.state, condition.kinetic_energy);
            let (x, y) = (transported.x, transported.y);
            let (sin_corr, cos_corr) = *correction.get_or_insert_with(|| {
                let angle = y.atan2(x);
                (angle.sin(), angle.cos())
            });
            let point = if params.normalization_on {
                Point2::new(cos_corr * x + sin_corr * y, -sin_corr * x + cos_corr * y)
            } else {
                Point2::new(x, y)
            };
            source_energies.push(condition.kinetic_energy);
            moller_points.push(point);
        }
    }

    // The background sample ignores the sweep knobs: fixed count, fixed
    // reference energy, unity length scale, no quadrupole, no normalization.
    let mott_line = Beamline::new(vec![
        Element::Solenoid {
            field: params.solenoid_field,
            length: SOLENOID_REFERENCE_LENGTH_M,
        },
        Element::Drift {
            length: params.drift_length,
        },
    ]);
    let mott_matrix = mott_line.transfer_matrix(BEAM_KINETIC_ENERGY_MEV);
    let mut mott_points = Vec::with_capacity(MOTT_TRACK_COUNT);
    for _ in 0..MOTT_TRACK_COUNT {
        let transported = mott_matrix.apply(mott_initial_state(&mut mott_rng));
        mott_points.push(Point2::new(transported.x, transported.y));
    }

    Ok(SimulationResult {
        moller_points,
        mott_points,
        source_energies,
        energy_range_min,
        energy_range_max,
    })
}
