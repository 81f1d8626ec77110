//! Mott (electron-nucleus) single-track initial conditions.

use std::f64::consts::TAU;

use mpt_core::constants::{MOTT_CONE_HALF_ANGLE_RAD, VERTEX_HALF_WIDTH_M};
use mpt_core::{PhaseSpaceState, RngHandle};
use rand::Rng;

/// Draws the initial phase-space state of one Mott background track.
///
/// Each call is independent: its own vertex offset, a small uniform polar
/// angle and its own azimuth. Mott tracks carry no per-track energy; they
/// are transported downstream at the fixed beam reference energy.
pub fn mott_initial_state(rng: &mut RngHandle) -> PhaseSpaceState {
    let vertex_x = rng.gen_range(-VERTEX_HALF_WIDTH_M..VERTEX_HALF_WIDTH_M);
    let vertex_y = rng.gen_range(-VERTEX_HALF_WIDTH_M..VERTEX_HALF_WIDTH_M);
    let theta = rng.gen_range(0.0..MOTT_CONE_HALF_ANGLE_RAD);
    let phi = rng.gen_range(0.0..TAU);
    PhaseSpaceState::new(vertex_x, theta * phi.cos(), vertex_y, theta * phi.sin())
}
