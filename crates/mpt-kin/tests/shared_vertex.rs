use mpt_core::RngHandle;
use mpt_kin::moller_initial_conditions;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pair_shares_vertex_and_azimuth(seed in any::<u64>(), probe in 10.0f64..145.0) {
        let mut rng = RngHandle::from_seed(seed);
        let (scattered, recoil) = moller_initial_conditions(155.0, probe, &mut rng);

        // One vertex draw serves both tracks.
        prop_assert_eq!(scattered.state.x, recoil.state.x);
        prop_assert_eq!(scattered.state.y, recoil.state.y);

        // One azimuth draw serves both tracks: the transverse-angle vectors
        // are parallel, so their cross product vanishes.
        let cross = scattered.state.xp * recoil.state.yp - scattered.state.yp * recoil.state.xp;
        prop_assert!(cross.abs() < 1e-15);

        // Two-body energy conservation against a target at rest.
        let total = scattered.kinetic_energy + recoil.kinetic_energy;
        prop_assert!((total - 155.0).abs() < 1e-9);

        // Opposite-side deflection about the beam axis.
        prop_assert!(scattered.polar_angle >= 0.0);
        prop_assert!(recoil.polar_angle <= 0.0);
    }
}
