//! Composition of element matrices into a single beamline transfer map.

use mpt_core::{PhaseSpaceState, TransportMatrix};
use serde::{Deserialize, Serialize};

use crate::elements::Element;

/// Left-to-right product of the given matrices starting from the identity,
/// i.e. `compose([A, B, C]) = A · B · C`.
pub fn compose(matrices: &[TransportMatrix]) -> TransportMatrix {
    matrices
        .iter()
        .fold(TransportMatrix::identity(), |acc, m| acc.product(m))
}

/// Applies the composed map to a state.
///
/// The rightmost matrix in the slice sits nearest the state vector and is
/// therefore the first physical element the track encounters, matching how a
/// transfer map is conventionally built by multiplying elements in reverse
/// traversal order.
pub fn apply(matrices: &[TransportMatrix], state: PhaseSpaceState) -> PhaseSpaceState {
    compose(matrices).apply(state)
}

/// An ordered sequence of elements in physical traversal order: the first
/// entry is the element nearest the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beamline {
    elements: Vec<Element>,
}

impl Beamline {
    /// Builds a beamline from elements listed source-first.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Returns the elements in traversal order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Effective transfer matrix for a track of the given kinetic energy.
    ///
    /// Element matrices are multiplied in reverse traversal order so the
    /// first physical element acts on the state first.
    pub fn transfer_matrix(&self, kinetic_energy: f64) -> TransportMatrix {
        let matrices: Vec<TransportMatrix> = self
            .elements
            .iter()
            .rev()
            .map(|element| element.matrix(kinetic_energy))
            .collect();
        compose(&matrices)
    }

    /// Transports a state through the whole line at the given kinetic energy.
    pub fn transport(&self, state: PhaseSpaceState, kinetic_energy: f64) -> PhaseSpaceState {
        self.transfer_matrix(kinetic_energy).apply(state)
    }
}
