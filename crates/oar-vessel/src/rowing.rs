//! Crew-driven boat with differential steering.
//!
//! Each side of the boat rows at its own normalized rate. Both sides pulling
//! together drive the hull forward; a difference between sides turns it.
//!
//! ```text
//! thrust    = max_force    * (left + right) / 2
//! turn_rate = max_rotation * (right - left) / 2    (deg/s, clockwise)
//! ```

use oar_core::{OarResult, ensure_non_negative};
use tracing::debug;

use crate::boat::Boat;
use crate::vehicle::{Position, Propelled, Vehicle};

/// Throttle magnitude below which the crew mixes steering strokes into the
/// rowing rates.
pub const STEERING_BAND: f64 = 0.1;

/// Per-side rowing rates `(left, right)` for a throttle `acceleration` and a
/// turning intensity `rotation`, both in [-1, 1].
///
/// The side the boat turns towards keeps rowing at `acceleration`. The
/// opposite side rows at `acceleration * (1 - 2|rotation|)`: it eases off to
/// zero at `|rotation| = 0.5` and rows backwards beyond that, reaching
/// `-acceleration` at full rotation. Positive rotation turns clockwise, so the
/// left side is the one that eases off.
///
/// Below [`STEERING_BAND`] the crew also takes steering strokes: the turning
/// side pulls and the opposite side backs water by the same amount, so they
/// add no thrust. Their weight falls linearly from `|rotation|` with the crew
/// resting to zero at the edge of the band. A resting crew therefore pivots
/// the boat on the spot.
pub fn rowing_rates(acceleration: f64, rotation: f64) -> (f64, f64) {
    let steering = (1.0 - acceleration.abs() / STEERING_BAND).max(0.0) * rotation.abs();
    let turning = acceleration + steering;
    let opposite = acceleration * (1.0 - 2.0 * rotation.abs()) - steering;
    if rotation >= 0.0 {
        (opposite, turning)
    } else {
        (turning, opposite)
    }
}

/// A rowing boat: a [`Boat`] hull moved by a crew of rowers.
///
/// The hull's `max_force` is `rower_force * rower_count`. A boat with no
/// rowers, a zero stroke frequency or zero rower force has no rowing
/// capability: both rowing rates stay at zero and the boat neither moves nor
/// turns under its own power.
#[derive(Clone, Debug)]
pub struct RowingBoat {
    hull: Boat,
    rower_count: u32,
    rower_force: f64,
    max_rowing_frequency: f64,
    rowing_frequency: f64,
    left_rowing_rate: f64,
    right_rowing_rate: f64,
}

impl RowingBoat {
    /// Create a rowing boat at rest at the origin, heading north.
    ///
    /// # Arguments
    /// * `max_weight` - Buoyancy capacity (kg), must be positive
    /// * `weight` - Current load (kg), >= 0
    /// * `number_of_rowers` - Crew size
    /// * `max_rowing_frequency` - Stroke rate at full throttle (strokes/s), >= 0
    /// * `max_speed` - Speed cap (m/s), >= 0
    /// * `max_rotation` - Turn rate cap (deg/s), >= 0
    /// * `rower_force` - Force a single rower delivers (N), >= 0
    ///
    /// # Errors
    /// Returns `InvalidParameter` for any non-finite or out-of-range value.
    pub fn new(
        max_weight: f64,
        weight: f64,
        number_of_rowers: u32,
        max_rowing_frequency: f64,
        max_speed: f64,
        max_rotation: f64,
        rower_force: f64,
    ) -> OarResult<Self> {
        let max_rowing_frequency =
            ensure_non_negative(max_rowing_frequency, "max_rowing_frequency")?;
        let rower_force = ensure_non_negative(rower_force, "rower_force")?;
        let max_force = rower_force * f64::from(number_of_rowers);
        let hull = Boat::new(max_weight, weight, max_speed, max_rotation, max_force)?;

        debug!(rowers = number_of_rowers, rower_force, max_rowing_frequency, "crew aboard");

        Ok(Self {
            hull,
            rower_count: number_of_rowers,
            rower_force,
            max_rowing_frequency,
            rowing_frequency: 0.0,
            left_rowing_rate: 0.0,
            right_rowing_rate: 0.0,
        })
    }

    /// The underlying hull, for its limits and resistance.
    pub fn hull(&self) -> &Boat {
        &self.hull
    }

    pub fn rower_count(&self) -> u32 {
        self.rower_count
    }

    pub fn rower_force(&self) -> f64 {
        self.rower_force
    }

    pub fn max_rowing_frequency(&self) -> f64 {
        self.max_rowing_frequency
    }

    /// Current stroke rate: `max_rowing_frequency * acceleration`.
    pub fn rowing_frequency(&self) -> f64 {
        self.rowing_frequency
    }

    /// `(left, right)` rowing rates. Negative values mean backing water.
    pub fn rowing_rate(&self) -> (f64, f64) {
        (self.left_rowing_rate, self.right_rowing_rate)
    }

    pub fn can_row(&self) -> bool {
        self.rower_count > 0 && self.max_rowing_frequency > 0.0 && self.rower_force > 0.0
    }

    /// Propulsive force the crew currently delivers (N).
    pub fn thrust(&self) -> f64 {
        self.hull.max_force() * (self.left_rowing_rate + self.right_rowing_rate) / 2.0
    }

    /// Turn rate the crew currently produces (deg/s, clockwise).
    pub fn turn_rate(&self) -> f64 {
        self.hull.max_rotation() * (self.right_rowing_rate - self.left_rowing_rate) / 2.0
    }

    fn refresh_rowing_rates(&mut self) {
        let (left, right) = if self.can_row() {
            rowing_rates(self.hull.acceleration(), self.hull.rotation())
        } else {
            (0.0, 0.0)
        };
        self.left_rowing_rate = left;
        self.right_rowing_rate = right;
    }
}

impl Vehicle for RowingBoat {
    fn advance(&mut self, time_delta: f64) -> OarResult<()> {
        let thrust = self.thrust();
        let turn_rate = self.turn_rate();
        self.hull.integrate(thrust, turn_rate, time_delta)
    }

    fn position(&self) -> Position {
        self.hull.position()
    }

    fn set_position(&mut self, position: Position) {
        self.hull.set_position(position);
    }

    fn speed(&self) -> f64 {
        self.hull.speed()
    }

    fn set_speed(&mut self, speed: f64) {
        self.hull.set_speed(speed);
    }

    fn direction(&self) -> f64 {
        self.hull.direction()
    }

    fn set_direction(&mut self, direction: f64) {
        self.hull.set_direction(direction);
    }

    fn rotation(&self) -> f64 {
        self.hull.rotation()
    }

    /// Set the turning intensity, clamped to [-1, 1], and re-derive the
    /// per-side rowing rates.
    fn set_rotation(&mut self, rotation: f64) {
        self.hull.set_rotation(rotation);
        self.refresh_rowing_rates();
    }
}

impl Propelled for RowingBoat {
    fn acceleration(&self) -> f64 {
        self.hull.acceleration()
    }

    /// Set the rowing intensity, clamped to [-1, 1]: [-1, 0) backs water,
    /// 0 rests the crew, (0, 1] rows forward.
    fn set_acceleration(&mut self, acceleration: f64) {
        self.hull.set_acceleration(acceleration);
        self.rowing_frequency = self.max_rowing_frequency * self.hull.acceleration();
        self.refresh_rowing_rates();
    }

    fn is_afloat(&self) -> bool {
        self.hull.is_afloat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_boat() -> RowingBoat {
        RowingBoat::new(500.0, 300.0, 4, 2.0, 10.0, 90.0, 150.0).unwrap()
    }

    #[test]
    fn straight_rowing_is_symmetric() {
        assert_eq!(rowing_rates(1.0, 0.0), (1.0, 1.0));
        assert_eq!(rowing_rates(-0.5, 0.0), (-0.5, -0.5));
    }

    #[test]
    fn opposite_side_tapers_then_reverses() {
        let (left, right) = rowing_rates(1.0, 0.25);
        assert!((left - 0.5).abs() < 1e-12);
        assert_eq!(right, 1.0);

        let (left, right) = rowing_rates(1.0, 0.5);
        assert!(left.abs() < 1e-12);
        assert_eq!(right, 1.0);

        let (left, right) = rowing_rates(1.0, 1.0);
        assert_eq!(left, -1.0);
        assert_eq!(right, 1.0);
    }

    #[test]
    fn negative_rotation_tapers_right_side() {
        let (left, right) = rowing_rates(0.8, -0.25);
        assert_eq!(left, 0.8);
        assert!((right - 0.4).abs() < 1e-12);
    }

    #[test]
    fn resting_crew_pivots_without_thrust() {
        assert_eq!(rowing_rates(0.0, 1.0), (-1.0, 1.0));
        assert_eq!(rowing_rates(0.0, 0.3), (-0.3, 0.3));
        assert_eq!(rowing_rates(0.0, -0.6), (0.6, -0.6));
        assert_eq!(rowing_rates(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn steering_strokes_fade_across_band() {
        let (left, right) = rowing_rates(0.05, 0.5);
        // half-weight steering on top of (0, 0.05)
        assert!((left + 0.25).abs() < 1e-12);
        assert!((right - 0.3).abs() < 1e-12);

        assert_eq!(rowing_rates(STEERING_BAND, 0.25), (0.05, 0.1));
    }

    #[test]
    fn rates_continuous_as_throttle_leaves_zero() {
        for r in [-1.0, -0.3, 0.2, 0.7, 1.0] {
            let (l0, r0) = rowing_rates(0.0, r);
            for a in [1e-6, -1e-6] {
                let (l1, r1) = rowing_rates(a, r);
                assert!((l1 - l0).abs() < 1e-4, "a={a} r={r}");
                assert!((r1 - r0).abs() < 1e-4, "a={a} r={r}");
            }
        }
    }

    #[test]
    fn resting_crew_turn_rate_matches_light_throttle() {
        let mut resting = standard_boat();
        resting.set_rotation(1.0);
        let mut light = standard_boat();
        light.set_acceleration(1e-6);
        light.set_rotation(1.0);

        assert_eq!(resting.thrust(), 0.0);
        assert!((resting.turn_rate() - 90.0).abs() < 1e-12);
        assert!((light.turn_rate() - resting.turn_rate()).abs() < 1e-3);
    }

    #[test]
    fn max_force_from_crew() {
        let boat = standard_boat();
        assert!((boat.hull().max_force() - 600.0).abs() < 1e-12);
        assert_eq!(boat.rower_count(), 4);
        assert!(boat.can_row());
    }

    #[test]
    fn acceleration_sets_frequency() {
        let mut boat = standard_boat();
        boat.set_acceleration(0.5);
        assert!((boat.rowing_frequency() - 1.0).abs() < 1e-12);
        boat.set_acceleration(-2.0);
        assert_eq!(boat.acceleration(), -1.0);
        assert!((boat.rowing_frequency() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn thrust_and_turn_from_rates() {
        let mut boat = standard_boat();
        boat.set_acceleration(1.0);
        boat.set_rotation(0.25);
        // rates (0.5, 1.0)
        assert!((boat.thrust() - 450.0).abs() < 1e-9);
        assert!((boat.turn_rate() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_crew_parameters() {
        assert!(RowingBoat::new(500.0, 300.0, 4, -2.0, 10.0, 90.0, 150.0).is_err());
        assert!(RowingBoat::new(500.0, 300.0, 4, 2.0, 10.0, 90.0, -150.0).is_err());
        assert!(RowingBoat::new(500.0, 300.0, 4, f64::NAN, 10.0, 90.0, 150.0).is_err());
    }

    #[test]
    fn crewless_boat_has_no_rates() {
        let mut boat = RowingBoat::new(500.0, 300.0, 0, 2.0, 10.0, 90.0, 150.0).unwrap();
        boat.set_acceleration(1.0);
        boat.set_rotation(0.8);
        assert_eq!(boat.rowing_rate(), (0.0, 0.0));
        assert!(!boat.can_row());
    }
}
