//! Run configuration schema and defaults.
//!
//! Every recognized knob is a statically enumerated field and unknown keys
//! are rejected at the parse boundary (`deny_unknown_fields`), so a typo in
//! a configuration file names the offending key and the recognized set
//! instead of silently applying a partial parameter record.

use mpt_core::constants::BEAM_KINETIC_ENERGY_MEV;
use mpt_core::errors::{ErrorInfo, MptError};
use serde::{Deserialize, Serialize};

/// Physics parameters governing one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicsParams {
    /// Number of energy steps in the sweep; the sweep visits
    /// `particle_count + 1` evenly spaced probe energies including both
    /// endpoints, and each probe energy yields the two tracks of one event.
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Half-width of the probe-energy window in MeV.
    #[serde(default = "default_energy_half_width")]
    pub energy_half_width: f64,
    /// Center of the probe-energy window in MeV.
    #[serde(default = "default_center_energy")]
    pub center_energy: f64,
    /// Solenoid field strength in tesla.
    #[serde(default = "default_solenoid_field")]
    pub solenoid_field: f64,
    /// Scale factor applied to the solenoid reference length.
    #[serde(default = "default_solenoid_length_scale")]
    pub solenoid_length_scale: f64,
    /// Quadrupole gradient in T/m; the sign selects the focusing plane.
    #[serde(default = "default_quad_gradient")]
    pub quad_gradient: f64,
    /// Length of the drift between solenoid and quadrupole, in metres.
    #[serde(default = "default_drift_length")]
    pub drift_length: f64,
    /// Length of the exit drift to the detector plane, in metres.
    #[serde(default = "default_exit_drift_length")]
    pub exit_drift_length: f64,
    /// Rotate each event pair into the frame of its first track.
    #[serde(default)]
    pub normalization_on: bool,
}

fn default_particle_count() -> usize {
    10_000
}

fn default_energy_half_width() -> f64 {
    10.0
}

fn default_center_energy() -> f64 {
    77.5
}

fn default_solenoid_field() -> f64 {
    8.0
}

fn default_solenoid_length_scale() -> f64 {
    1.0
}

fn default_quad_gradient() -> f64 {
    -1.7
}

fn default_drift_length() -> f64 {
    mpt_core::constants::DEFAULT_DRIFT_LENGTH_M
}

fn default_exit_drift_length() -> f64 {
    mpt_core::constants::DEFAULT_EXIT_DRIFT_LENGTH_M
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            energy_half_width: default_energy_half_width(),
            center_energy: default_center_energy(),
            solenoid_field: default_solenoid_field(),
            solenoid_length_scale: default_solenoid_length_scale(),
            quad_gradient: default_quad_gradient(),
            drift_length: default_drift_length(),
            exit_drift_length: default_exit_drift_length(),
            normalization_on: false,
        }
    }
}

impl PhysicsParams {
    /// Checks the kinematic and geometric validity of the parameter record.
    ///
    /// The two-body generator downstream produces NaN for probe energies
    /// outside (0, beam energy); that boundary is enforced here, at the
    /// configuration surface, so the transport math never sees it.
    pub fn validate(&self) -> Result<(), MptError> {
        if self.particle_count == 0 {
            return Err(MptError::Config(
                ErrorInfo::new("particle-count", "particle_count must be at least 1")
                    .with_context("particle_count", self.particle_count.to_string()),
            ));
        }
        if !self.energy_half_width.is_finite() || self.energy_half_width < 0.0 {
            return Err(MptError::Config(
                ErrorInfo::new("energy-half-width", "energy_half_width must be non-negative")
                    .with_context("energy_half_width", self.energy_half_width.to_string()),
            ));
        }
        let sweep_min = self.center_energy - self.energy_half_width;
        let sweep_max = self.center_energy + self.energy_half_width;
        if !(sweep_min > 0.0 && sweep_max < BEAM_KINETIC_ENERGY_MEV) {
            return Err(MptError::Kinematics(
                ErrorInfo::new(
                    "sweep-range",
                    "probe energies must stay strictly inside (0, beam energy)",
                )
                .with_context("sweep_min", sweep_min.to_string())
                .with_context("sweep_max", sweep_max.to_string())
                .with_context("beam_energy", BEAM_KINETIC_ENERGY_MEV.to_string())
                .with_hint("shrink energy_half_width or move center_energy"),
            ));
        }
        for (name, value) in [
            ("solenoid_length_scale", self.solenoid_length_scale),
            ("drift_length", self.drift_length),
            ("exit_drift_length", self.exit_drift_length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MptError::Config(
                    ErrorInfo::new("element-length", "element lengths must be non-negative")
                        .with_context(name, value.to_string()),
                ));
            }
        }
        Ok(())
    }
}

/// Detector measurement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasurementParams {
    /// Aperture kind; `"circle"` selects the circular aperture, anything
    /// else counts as the square default.
    #[serde(default = "default_geometry")]
    pub geometry: String,
    /// Vertical offset of the aperture center in metres.
    #[serde(default)]
    pub center_offset: f64,
    /// Full width of the square aperture in metres.
    #[serde(default = "default_aperture_side")]
    pub width: f64,
    /// Full height of the square aperture in metres.
    #[serde(default = "default_aperture_side")]
    pub height: f64,
    /// Diameter of the circular aperture in metres.
    #[serde(default = "default_aperture_diameter")]
    pub diameter: f64,
}

fn default_geometry() -> String {
    "square".to_string()
}

fn default_aperture_side() -> f64 {
    0.02
}

fn default_aperture_diameter() -> f64 {
    mpt_core::constants::DETECTOR_APERTURE_DIAMETER_M
}

impl Default for MeasurementParams {
    fn default() -> Self {
        Self {
            geometry: default_geometry(),
            center_offset: 0.0,
            width: default_aperture_side(),
            height: default_aperture_side(),
            diameter: default_aperture_diameter(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when documenting substreams in manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0xE1EC_7805_CA77_E4ED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Full run configuration: physics, measurement and seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Physics parameters for the sweep.
    #[serde(default)]
    pub physics: PhysicsParams,
    /// Detector measurement parameters.
    #[serde(default)]
    pub measurement: MeasurementParams,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}
