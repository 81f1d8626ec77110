#![deny(missing_docs)]

//! Initial-condition generators for the two scattering processes feeding the
//! beamline: correlated Møller pairs and independent Mott background tracks.

pub mod moller;
pub mod mott;

pub use moller::{moller_initial_conditions, ParticleInitialCondition};
pub use mott::mott_initial_state;
