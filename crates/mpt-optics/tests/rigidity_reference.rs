use mpt_optics::magnetic_rigidity;

#[test]
fn rigidity_takes_electron_mass_into_account() {
    // Reference value for a 123 MeV electron, 5 significant digits.
    let rigidity = magnetic_rigidity(123.0);
    assert!((rigidity - 0.4119883).abs() < 1e-5);
}

#[test]
fn rigidity_grows_with_kinetic_energy() {
    assert!(magnetic_rigidity(155.0) > magnetic_rigidity(67.5));
}
