//! Transfer-matrix builders for the supported beamline elements.
//!
//! The element set is small and closed, so elements are a tagged enum and
//! degenerate strengths are handled by explicit limiting branches instead of
//! letting the general formulas divide by zero.

use mpt_core::TransportMatrix;
use serde::{Deserialize, Serialize};

use crate::rigidity::magnetic_rigidity;

/// One beamline element in physical traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Field-free propagation over a fixed length in metres.
    Drift {
        /// Section length in metres.
        length: f64,
    },
    /// Solenoid with longitudinal field in tesla and effective length in
    /// metres.
    Solenoid {
        /// Longitudinal field strength in tesla.
        field: f64,
        /// Effective magnetic length in metres.
        length: f64,
    },
    /// Quadrupole with gradient in T/m and length in metres.
    Quadrupole {
        /// Field gradient in T/m; the sign selects the focusing plane.
        gradient: f64,
        /// Element length in metres.
        length: f64,
    },
}

impl Element {
    /// Builds the element's transfer matrix for a track of the given kinetic
    /// energy in MeV.
    pub fn matrix(&self, kinetic_energy: f64) -> TransportMatrix {
        match *self {
            Element::Drift { length } => drift_matrix(length),
            Element::Solenoid { field, length } => solenoid_matrix(field, length, kinetic_energy),
            Element::Quadrupole { gradient, length } => {
                quad_matrix(gradient, length, kinetic_energy)
            }
        }
    }
}

/// Transfer matrix of a field-free drift of the given length in metres.
pub fn drift_matrix(length: f64) -> TransportMatrix {
    TransportMatrix::from_rows([
        [1.0, length, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, length],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Transfer matrix of a solenoid.
///
/// The coupling strength is `k = |B| / (Bρ)` and the rotation angle
/// `φ = k·L`. At zero field the auxiliary terms `sin φ / k` and
/// `(1 − cos φ) / k` are a removable 0/0; their analytic limits are `L` and
/// `0`, which is exactly a drift, so that branch returns the drift matrix
/// instead of evaluating the general form.
pub fn solenoid_matrix(field: f64, length: f64, kinetic_energy: f64) -> TransportMatrix {
    let k = field.abs() / magnetic_rigidity(kinetic_energy);
    if k == 0.0 {
        return drift_matrix(length);
    }
    let phi = k * length;
    let (s, c) = phi.sin_cos();
    let f = s / k;
    let g = (1.0 - c) / k;
    TransportMatrix::from_rows([
        [c, f, s, g],
        [-k * s, c, -k * g, s],
        [-s, -g, c, f],
        [k * g, -s, -k * s, c],
    ])
}

/// Transfer matrix of a quadrupole.
///
/// `k = g_q / (Bρ)`. A zero gradient yields the identity. For `k > 0` the
/// horizontal plane focuses (trigonometric block) while the vertical plane
/// defocuses (hyperbolic block); a negative gradient swaps the roles of the
/// two planes using `√(−k)`. The planes stay uncoupled, so the 4×4 matrix is
/// assembled block-diagonally.
pub fn quad_matrix(gradient: f64, length: f64, kinetic_energy: f64) -> TransportMatrix {
    let k = gradient / magnetic_rigidity(kinetic_energy);
    if k == 0.0 {
        return TransportMatrix::identity();
    }
    let root = k.abs().sqrt();
    let focus = focusing_block(root, length);
    let defocus = defocusing_block(root, length);
    let (horizontal, vertical) = if k > 0.0 {
        (focus, defocus)
    } else {
        (defocus, focus)
    };
    TransportMatrix::from_rows([
        [horizontal[0][0], horizontal[0][1], 0.0, 0.0],
        [horizontal[1][0], horizontal[1][1], 0.0, 0.0],
        [0.0, 0.0, vertical[0][0], vertical[0][1]],
        [0.0, 0.0, vertical[1][0], vertical[1][1]],
    ])
}

fn focusing_block(root: f64, length: f64) -> [[f64; 2]; 2] {
    let omega = root * length;
    let (s, c) = omega.sin_cos();
    [[c, s / root], [-root * s, c]]
}

fn defocusing_block(root: f64, length: f64) -> [[f64; 2]; 2] {
    let omega = root * length;
    let (sh, ch) = (omega.sinh(), omega.cosh());
    [[ch, sh / root], [root * sh, ch]]
}
