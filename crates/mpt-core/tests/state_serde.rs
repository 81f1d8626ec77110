use mpt_core::{PhaseSpaceState, Point2, TransportMatrix};

#[test]
fn phase_space_state_roundtrips_through_json() {
    let state = PhaseSpaceState::new(1.0e-3, -2.5e-4, -7.0e-4, 4.0e-5);
    let json = serde_json::to_string(&state).unwrap();
    let restored: PhaseSpaceState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, restored);
}

#[test]
fn transport_matrix_roundtrips_through_json() {
    let matrix = TransportMatrix::from_rows([
        [1.0, 0.75, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.75],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let json = serde_json::to_string(&matrix).unwrap();
    let restored: TransportMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(matrix, restored);
}

#[test]
fn identity_leaves_states_unchanged() {
    let state = PhaseSpaceState::new(0.001, 0.08, -0.0005, -0.03);
    let mapped = TransportMatrix::identity().apply(state);
    assert_eq!(state, mapped);
}

#[test]
fn point_roundtrips_through_json() {
    let point = Point2::new(0.011, -0.002);
    let json = serde_json::to_string(&point).unwrap();
    let restored: Point2 = serde_json::from_str(&json).unwrap();
    assert_eq!(point, restored);
}
