#![deny(missing_docs)]

//! First-order (linear) transverse beam optics: magnetic rigidity, transfer
//! matrices for drift, solenoid and quadrupole elements, and composition of
//! element sequences into one beamline map.

pub mod beamline;
pub mod elements;
pub mod rigidity;

pub use beamline::{apply, compose, Beamline};
pub use elements::{drift_matrix, quad_matrix, solenoid_matrix, Element};
pub use rigidity::magnetic_rigidity;
