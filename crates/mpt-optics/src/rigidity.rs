//! Magnetic rigidity of the transported electrons.

use mpt_core::constants::{ELECTRON_MASS_MEV, SPEED_OF_LIGHT_M_PER_S};

/// Magnetic rigidity of an electron with the given kinetic energy in MeV.
///
/// Uses the rest-mass-inclusive total energy. Every magnetic element in
/// this crate scales its strength by this quantity; mixing in the
/// mass-free approximation elsewhere would silently shift all focusing
/// strengths, so this is the only formulation in the workspace.
pub fn magnetic_rigidity(kinetic_energy: f64) -> f64 {
    (kinetic_energy + ELECTRON_MASS_MEV) * 1.0e6 / SPEED_OF_LIGHT_M_PER_S
}
