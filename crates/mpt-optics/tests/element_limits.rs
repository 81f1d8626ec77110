use mpt_core::TransportMatrix;
use mpt_optics::{drift_matrix, quad_matrix, solenoid_matrix};

fn assert_matrices_close(a: &TransportMatrix, b: &TransportMatrix, tolerance: f64) {
    for (row_a, row_b) in a.rows().iter().zip(b.rows().iter()) {
        for (entry_a, entry_b) in row_a.iter().zip(row_b.iter()) {
            assert!(
                (entry_a - entry_b).abs() < tolerance,
                "matrices differ: {entry_a} vs {entry_b}"
            );
        }
    }
}

#[test]
fn zero_length_drift_is_identity() {
    assert_eq!(drift_matrix(0.0), TransportMatrix::identity());
}

#[test]
fn zero_gradient_quad_is_identity() {
    for &length in &[0.0, 0.1, 2.0] {
        for &energy in &[10.0, 77.5, 155.0] {
            assert_eq!(quad_matrix(0.0, length, energy), TransportMatrix::identity());
        }
    }
}

#[test]
fn zero_field_solenoid_is_a_drift() {
    for &length in &[0.0, 0.40607, 1.0] {
        assert_eq!(solenoid_matrix(0.0, length, 155.0), drift_matrix(length));
    }
}

#[test]
fn weak_solenoid_approaches_the_drift_limit() {
    let weak = solenoid_matrix(1e-9, 0.40607, 155.0);
    assert_matrices_close(&weak, &drift_matrix(0.40607), 1e-6);
}

#[test]
fn solenoid_matrix_is_finite_for_typical_settings() {
    let matrix = solenoid_matrix(8.0, 0.40607, 77.5);
    assert!(matrix.is_finite());
}

#[test]
fn quad_gradient_sign_swaps_focusing_planes() {
    let focusing = quad_matrix(1.7, 0.1, 77.5);
    let defocusing = quad_matrix(-1.7, 0.1, 77.5);

    // Positive gradient: trigonometric horizontal block, hyperbolic vertical.
    assert!(focusing.rows()[0][0] <= 1.0);
    assert!(focusing.rows()[2][2] >= 1.0);

    // Negative gradient swaps the planes.
    assert!(defocusing.rows()[0][0] >= 1.0);
    assert!(defocusing.rows()[2][2] <= 1.0);

    // The swapped matrix is the plane-exchanged original.
    assert!((focusing.rows()[0][0] - defocusing.rows()[2][2]).abs() < 1e-12);
    assert!((focusing.rows()[1][1] - defocusing.rows()[3][3]).abs() < 1e-12);
}

#[test]
fn quad_planes_stay_uncoupled() {
    let matrix = quad_matrix(-1.7, 0.1, 67.5);
    let rows = matrix.rows();
    for i in 0..2 {
        for j in 2..4 {
            assert_eq!(rows[i][j], 0.0);
            assert_eq!(rows[j][i], 0.0);
        }
    }
}
