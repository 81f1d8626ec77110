use mpt_phase::{MeasurementParams, PhysicsParams, SweepConfig};

#[test]
fn unknown_physics_key_is_rejected_by_name() {
    let err = serde_json::from_str::<PhysicsParams>(r#"{"particle_count": 10, "quad_len": 0.2}"#)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown field"));
    assert!(message.contains("quad_len"));
    // The recognized key set is part of the diagnostic.
    assert!(message.contains("particle_count"));
}

#[test]
fn unknown_measurement_key_is_rejected_by_name() {
    let err =
        serde_json::from_str::<MeasurementParams>(r#"{"detector_radius": 0.01}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown field"));
    assert!(message.contains("detector_radius"));
}

#[test]
fn empty_config_gets_the_documented_defaults() {
    let config: SweepConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.physics.particle_count, 10_000);
    assert!((config.physics.center_energy - 77.5).abs() < 1e-12);
    assert!((config.physics.solenoid_field - 8.0).abs() < 1e-12);
    assert!((config.physics.quad_gradient + 1.7).abs() < 1e-12);
    assert!(!config.physics.normalization_on);
    assert_eq!(config.measurement.geometry, "square");
    assert_eq!(config, SweepConfig::default());
}

#[test]
fn zero_particle_count_is_a_config_error() {
    let params = PhysicsParams {
        particle_count: 0,
        ..PhysicsParams::default()
    };
    let err = params.validate().unwrap_err();
    assert_eq!(err.info().code, "particle-count");
}

#[test]
fn sweep_leaving_the_physical_range_is_rejected() {
    let high = PhysicsParams {
        center_energy: 150.0,
        energy_half_width: 10.0,
        ..PhysicsParams::default()
    };
    let err = high.validate().unwrap_err();
    assert_eq!(err.info().code, "sweep-range");
    assert!(err.info().context.contains_key("sweep_max"));

    let low = PhysicsParams {
        center_energy: 5.0,
        energy_half_width: 10.0,
        ..PhysicsParams::default()
    };
    assert_eq!(low.validate().unwrap_err().info().code, "sweep-range");
}

#[test]
fn negative_element_lengths_are_rejected() {
    let params = PhysicsParams {
        drift_length: -0.1,
        ..PhysicsParams::default()
    };
    let err = params.validate().unwrap_err();
    assert_eq!(err.info().code, "element-length");
    assert!(err.info().context.contains_key("drift_length"));
}

#[test]
fn default_parameters_validate() {
    assert!(PhysicsParams::default().validate().is_ok());
}
