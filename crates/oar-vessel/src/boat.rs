//! Generic floating hull: physical state plus the integration step shared by
//! every boat kind.

use oar_core::{
    OarError, OarResult, clamp_unit, ensure_finite, ensure_non_negative, ensure_positive,
    wrap_degrees,
};
use tracing::{debug, trace, warn};

use crate::vehicle::{Position, Propelled, Vehicle};

/// A floating hull with a single propulsor and a rudder.
///
/// On its own a `Boat` maps `acceleration` straight to thrust
/// (`acceleration * max_force`) and `rotation` straight to turn rate
/// (`rotation * max_rotation` degrees per second). Specialized vessels reuse
/// [`Boat::integrate`] with their own force and turn derivation.
///
/// A hull loaded beyond `max_weight` sinks at construction and stays inert for
/// its whole lifetime.
#[derive(Clone, Debug)]
pub struct Boat {
    max_weight: f64,
    weight: f64,
    max_speed: f64,
    max_rotation: f64,
    max_force: f64,
    acceleration: f64,
    speed: f64,
    rotation: f64,
    direction: f64,
    position: Position,
    is_afloat: bool,
}

impl Boat {
    /// Create a new hull at rest at the origin, heading north.
    ///
    /// # Arguments
    /// * `max_weight` - Buoyancy capacity (kg), must be positive
    /// * `weight` - Current load (kg), >= 0
    /// * `max_speed` - Speed cap (m/s), >= 0
    /// * `max_rotation` - Turn rate cap (deg/s), >= 0
    /// * `max_force` - Propulsive force at full throttle (N), >= 0
    ///
    /// # Errors
    /// Returns `InvalidParameter` for any non-finite or out-of-range value.
    pub fn new(
        max_weight: f64,
        weight: f64,
        max_speed: f64,
        max_rotation: f64,
        max_force: f64,
    ) -> OarResult<Self> {
        let max_weight = ensure_positive(max_weight, "max_weight")?;
        let weight = ensure_non_negative(weight, "weight")?;
        let max_speed = ensure_non_negative(max_speed, "max_speed")?;
        let max_rotation = ensure_non_negative(max_rotation, "max_rotation")?;
        let max_force = ensure_non_negative(max_force, "max_force")?;

        let is_afloat = weight <= max_weight;
        if is_afloat {
            debug!(max_weight, weight, max_speed, max_rotation, max_force, "hull launched");
        } else {
            warn!(weight, max_weight, "hull overloaded at launch, vessel sinks");
        }

        Ok(Self {
            max_weight,
            weight,
            max_speed,
            max_rotation,
            max_force,
            acceleration: 0.0,
            speed: 0.0,
            rotation: 0.0,
            direction: 0.0,
            position: Position::ORIGIN,
            is_afloat,
        })
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_rotation(&self) -> f64 {
        self.max_rotation
    }

    pub fn max_force(&self) -> f64 {
        self.max_force
    }

    /// Current drag as a fraction of `max_force`.
    ///
    /// Quadratic in speed: 0 at rest, 1 at `max_speed`. Symmetric for forward
    /// and reverse travel. A hull with `max_speed == 0` has no drag.
    pub fn resistance(&self) -> f64 {
        if self.max_speed > 0.0 {
            let ratio = self.speed / self.max_speed;
            (ratio * ratio).min(1.0)
        } else {
            0.0
        }
    }

    /// Advance speed, heading and position by one step.
    ///
    /// # Arguments
    /// * `thrust` - Propulsive force along the heading (N), negative for reverse
    /// * `turn_rate` - Heading change rate (deg/s), positive clockwise
    /// * `time_delta` - Step length (s)
    ///
    /// Speed follows `dv/dt = (thrust - drag) / weight` where drag opposes the
    /// current direction of travel. Drag alone brings the hull to rest but
    /// never reverses it. Heading is not subject to the mass model. Position
    /// moves along the updated heading with the updated speed.
    ///
    /// A sunk hull ignores the step entirely.
    ///
    /// # Errors
    /// * `NonFinite` if `time_delta` is NaN or infinite
    /// * `InvalidState` if `time_delta` is negative, or the hull is afloat with
    ///   a non-positive weight
    pub fn integrate(&mut self, thrust: f64, turn_rate: f64, time_delta: f64) -> OarResult<()> {
        let dt = ensure_finite(time_delta, "time_delta")?;
        if dt < 0.0 {
            return Err(OarError::InvalidState {
                what: "time_delta must be non-negative",
            });
        }
        if !self.is_afloat {
            trace!("hull sunk, step skipped");
            return Ok(());
        }
        if self.weight <= 0.0 {
            return Err(OarError::InvalidState {
                what: "afloat hull must have positive weight",
            });
        }

        let drag = self.resistance() * self.max_force;
        let net_force = thrust - drag * self.speed.signum();
        let mut speed = self.speed + net_force / self.weight * dt;
        if thrust == 0.0 && speed * self.speed < 0.0 {
            speed = 0.0;
        }
        self.speed = speed.clamp(-self.max_speed, self.max_speed);

        self.direction = wrap_degrees(self.direction + turn_rate * dt);

        let heading = self.direction.to_radians();
        let travel = self.speed * dt;
        self.position.x += heading.cos() * travel;
        self.position.y -= heading.sin() * travel;

        trace!(
            speed = self.speed,
            direction = self.direction,
            x = self.position.x,
            y = self.position.y,
            "hull step"
        );
        Ok(())
    }
}

impl Vehicle for Boat {
    fn advance(&mut self, time_delta: f64) -> OarResult<()> {
        // No propulsor, no steerage.
        let turn_rate = if self.max_force > 0.0 {
            self.rotation * self.max_rotation
        } else {
            0.0
        };
        self.integrate(self.acceleration * self.max_force, turn_rate, time_delta)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        if self.is_afloat && position.is_finite() {
            self.position = position;
        }
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn set_speed(&mut self, speed: f64) {
        if self.is_afloat && !speed.is_nan() {
            self.speed = speed.clamp(-self.max_speed, self.max_speed);
        }
    }

    fn direction(&self) -> f64 {
        self.direction
    }

    fn set_direction(&mut self, direction: f64) {
        if self.is_afloat && direction.is_finite() {
            self.direction = wrap_degrees(direction);
        }
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = clamp_unit(rotation);
    }
}

impl Propelled for Boat {
    fn acceleration(&self) -> f64 {
        self.acceleration
    }

    fn set_acceleration(&mut self, acceleration: f64) {
        self.acceleration = clamp_unit(acceleration);
    }

    fn is_afloat(&self) -> bool {
        self.is_afloat
    }
}
