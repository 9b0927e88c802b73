//! Clamping and heading invariants under arbitrary control sequences.

use oar_vessel::{Propelled, RowingBoat, STEERING_BAND, Vehicle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn state_stays_within_limits(
        commands in prop::collection::vec((-2.0_f64..2.0, -2.0_f64..2.0, 0.0_f64..5.0), 1..50),
        rowers in 0_u32..8,
    ) {
        let mut boat = RowingBoat::new(500.0, 300.0, rowers, 2.0, 10.0, 90.0, 150.0).unwrap();
        for (acceleration, rotation, dt) in commands {
            boat.set_acceleration(acceleration);
            boat.set_rotation(rotation);
            boat.advance(dt).unwrap();

            prop_assert!(boat.speed().abs() <= boat.hull().max_speed());
            prop_assert!((-1.0..=1.0).contains(&boat.rotation()));
            prop_assert!((-1.0..=1.0).contains(&boat.acceleration()));
            prop_assert!((0.0..360.0).contains(&boat.direction()));
            prop_assert!(boat.position().is_finite());

            let (left, right) = boat.rowing_rate();
            prop_assert!((-1.0..=1.0).contains(&left));
            prop_assert!((-1.0..=1.0).contains(&right));
        }
    }

    #[test]
    fn right_turn_rates(acceleration in STEERING_BAND..=1.0, rotation in 0.001_f64..=1.0) {
        let (left, right) = oar_vessel::rowing_rates(acceleration, rotation);
        prop_assert!(right > left);
        if rotation <= 0.5 {
            prop_assert!(left >= 0.0);
        } else {
            prop_assert!(left < 0.0);
        }
    }

    #[test]
    fn steering_strokes_add_no_thrust(
        acceleration in -STEERING_BAND..STEERING_BAND,
        rotation in -1.0_f64..=1.0,
    ) {
        let (left, right) = oar_vessel::rowing_rates(acceleration, rotation);
        let (plain_left, plain_right) = (acceleration * (1.0 - 2.0 * rotation.abs()), acceleration);
        prop_assert!(((left + right) - (plain_left + plain_right)).abs() < 1e-12);
    }

    #[test]
    fn right_turn_never_turns_left_under_forward_throttle(
        acceleration in 0.0_f64..=1.0,
        rotation in 0.001_f64..=1.0,
    ) {
        let (left, right) = oar_vessel::rowing_rates(acceleration, rotation);
        prop_assert!(right > left);
    }
}
