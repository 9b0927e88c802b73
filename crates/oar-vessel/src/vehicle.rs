//! Capability contract for anything that can be driven around the plane.

use oar_core::OarResult;
use serde::{Deserialize, Serialize};

/// Planar position in metres. The x axis points along heading 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A vehicle that advances in discrete ticks.
///
/// Headings are in degrees, 0 = north, growing clockwise. `rotation` is a
/// normalized turning intensity in [-1, 1]; each implementor decides how it
/// maps to an actual turn rate.
pub trait Vehicle {
    /// Advance the vehicle by `time_delta` seconds.
    fn advance(&mut self, time_delta: f64) -> OarResult<()>;

    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);

    fn speed(&self) -> f64;
    fn set_speed(&mut self, speed: f64);

    fn direction(&self) -> f64;
    fn set_direction(&mut self, direction: f64);

    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);
}

/// A vehicle with a throttle and a buoyancy state.
pub trait Propelled: Vehicle {
    /// Normalized throttle intensity in [-1, 1].
    fn acceleration(&self) -> f64;
    fn set_acceleration(&mut self, acceleration: f64);

    fn is_afloat(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_positions() {
        let a = Position::ORIGIN;
        let b = Position::new(3.0, -4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn finite_check() {
        assert!(Position::new(1.0, 2.0).is_finite());
        assert!(!Position::new(f64::NAN, 2.0).is_finite());
    }
}
