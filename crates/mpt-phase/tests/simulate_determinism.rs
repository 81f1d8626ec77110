use mpt_core::constants::BEAM_KINETIC_ENERGY_MEV;
use mpt_phase::{evaluate, simulate, MeasurementParams, PhysicsParams};

fn small_params() -> PhysicsParams {
    PhysicsParams {
        particle_count: 16,
        ..PhysicsParams::default()
    }
}

#[test]
fn repeated_runs_with_same_seed_match() {
    let params = small_params();

    let result_a = simulate(&params, 2024).unwrap();
    let result_b = simulate(&params, 2024).unwrap();

    assert_eq!(result_a, result_b);

    let measurement = MeasurementParams::default();
    assert_eq!(
        evaluate(&result_a, &measurement),
        evaluate(&result_b, &measurement)
    );
}

#[test]
fn sweep_produces_two_tracks_per_event() {
    let params = small_params();
    let result = simulate(&params, 7).unwrap();

    assert_eq!(result.moller_points.len(), 2 * (params.particle_count + 1));
    assert_eq!(result.source_energies.len(), result.moller_points.len());
    assert_eq!(result.mott_points.len(), 49);

    assert!((result.energy_range_min - 67.5).abs() < 1e-12);
    assert!((result.energy_range_max - 87.5).abs() < 1e-12);
}

#[test]
fn source_energies_pair_up_to_the_beam_energy() {
    let params = small_params();
    let result = simulate(&params, 7).unwrap();

    // Endpoints of the sweep are included.
    assert!((result.source_energies[0] - result.energy_range_min).abs() < 1e-9);
    let last_event = result.source_energies.len() - 2;
    assert!((result.source_energies[last_event] - result.energy_range_max).abs() < 1e-9);

    for pair in result.source_energies.chunks(2) {
        assert!((pair[0] + pair[1] - BEAM_KINETIC_ENERGY_MEV).abs() < 1e-9);
    }
}

#[test]
fn normalization_aligns_the_first_track_of_each_event() {
    let params = PhysicsParams {
        normalization_on: true,
        ..small_params()
    };
    let result = simulate(&params, 11).unwrap();

    for event in result.moller_points.chunks(2) {
        let first = event[0];
        assert!(first.y.abs() < 1e-9, "first track not aligned: {:?}", first);
        assert!(first.x >= -1e-12);
    }
}

#[test]
fn raw_and_normalized_events_share_radii() {
    let raw = simulate(&small_params(), 11).unwrap();
    let params = PhysicsParams {
        normalization_on: true,
        ..small_params()
    };
    let rotated = simulate(&params, 11).unwrap();

    // The per-event rotation preserves each track's distance from the axis.
    for (a, b) in raw.moller_points.iter().zip(rotated.moller_points.iter()) {
        assert!((a.x.hypot(a.y) - b.x.hypot(b.y)).abs() < 1e-9);
    }
}

#[test]
fn mott_background_ignores_the_sweep_knobs() {
    let base = simulate(&small_params(), 5).unwrap();
    let denser = simulate(
        &PhysicsParams {
            particle_count: 32,
            ..small_params()
        },
        5,
    )
    .unwrap();

    // Same substream, same knobs that matter to the background.
    assert_eq!(base.mott_points, denser.mott_points);

    let rescaled = simulate(
        &PhysicsParams {
            solenoid_length_scale: 0.25,
            ..small_params()
        },
        5,
    )
    .unwrap();

    // The background always runs at unity length scale.
    assert_eq!(base.mott_points, rescaled.mott_points);
}

#[test]
fn invalid_sweep_range_is_rejected() {
    let params = PhysicsParams {
        center_energy: 150.0,
        energy_half_width: 10.0,
        ..PhysicsParams::default()
    };
    let err = simulate(&params, 1).unwrap_err();
    assert_eq!(err.info().code, "sweep-range");
}
