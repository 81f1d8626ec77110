use serde::{Deserialize, Serialize};

/// Transverse phase-space coordinates of a single track.
///
/// Positions are in metres, angles in radians. A state is a value: every
/// transform produces a new state instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpaceState {
    /// Horizontal position.
    pub x: f64,
    /// Horizontal angle.
    pub xp: f64,
    /// Vertical position.
    pub y: f64,
    /// Vertical angle.
    pub yp: f64,
}

impl PhaseSpaceState {
    /// Creates a state from its four components.
    pub fn new(x: f64, xp: f64, y: f64, yp: f64) -> Self {
        Self { x, xp, y, yp }
    }

    /// Returns the components in (x, x', y, y') order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.x, self.xp, self.y, self.yp]
    }

    /// Builds a state from components in (x, x', y, y') order.
    pub fn from_array(components: [f64; 4]) -> Self {
        Self {
            x: components[0],
            xp: components[1],
            y: components[2],
            yp: components[3],
        }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }
}

/// First-order transfer map of one beamline element, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportMatrix([[f64; 4]; 4]);

impl TransportMatrix {
    /// Builds a matrix from explicit rows.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.0
    }

    /// The identity map.
    pub fn identity() -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self(rows)
    }

    /// Standard matrix product `self · other`.
    pub fn product(&self, other: &TransportMatrix) -> TransportMatrix {
        let mut rows = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.0[i][k] * other.0[k][j];
                }
                rows[i][j] = sum;
            }
        }
        Self(rows)
    }

    /// Applies the map to a phase-space state.
    pub fn apply(&self, state: PhaseSpaceState) -> PhaseSpaceState {
        let input = state.as_array();
        let mut output = [0.0; 4];
        for (i, row) in self.0.iter().enumerate() {
            let mut sum = 0.0;
            for (j, entry) in row.iter().enumerate() {
                sum += entry * input[j];
            }
            output[i] = sum;
        }
        PhaseSpaceState::from_array(output)
    }

    /// True when every entry is a finite number.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|entry| entry.is_finite())
    }
}

/// A transported track projected onto the detector plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate in metres.
    pub x: f64,
    /// Vertical coordinate in metres.
    pub y: f64,
}

impl Point2 {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
