#![deny(missing_docs)]

//! Core value types, physical constants, error surface and deterministic
//! randomness for the MPT beamline simulator.

pub mod constants;
pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, MptError};
pub use provenance::RunProvenance;
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{PhaseSpaceState, Point2, TransportMatrix};
