//! Physical constants and fixed beamline dimensions.
//!
//! Everything a front end may want to display or clamp sliders against is a
//! named constant here rather than a literal buried in the transport code.

/// Electron rest mass in MeV.
pub const ELECTRON_MASS_MEV: f64 = 0.510998;

/// Speed of light in m/s.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 2.997_924_58e8;

/// Kinetic energy of the incident beam in MeV. Møller pairs are generated
/// against this reference, and Mott tracks are transported at it.
pub const BEAM_KINETIC_ENERGY_MEV: f64 = 155.0;

/// Effective solenoid length in metres at unity length scale.
pub const SOLENOID_REFERENCE_LENGTH_M: f64 = 0.40607;

/// Fixed quadrupole length in metres. The gradient is adjustable, the
/// element length is not.
pub const QUADRUPOLE_LENGTH_M: f64 = 0.1;

/// Default length of the drift section downstream of the solenoid, in metres.
pub const DEFAULT_DRIFT_LENGTH_M: f64 = 0.75;

/// Default length of the exit drift between quadrupole and detector plane,
/// in metres.
pub const DEFAULT_EXIT_DRIFT_LENGTH_M: f64 = 0.5;

/// Default detector aperture diameter in metres.
pub const DETECTOR_APERTURE_DIAMETER_M: f64 = 0.02;

/// Half-width of the square collision-vertex distribution in metres.
pub const VERTEX_HALF_WIDTH_M: f64 = 0.001;

/// Upper bound of the uniform Mott polar-angle draw in radians.
pub const MOTT_CONE_HALF_ANGLE_RAD: f64 = 0.001;

/// Number of Mott background tracks generated per sweep.
pub const MOTT_TRACK_COUNT: usize = 49;
