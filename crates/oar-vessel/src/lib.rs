//! Vessel kinematics for oarsim.
//!
//! Provides:
//! - `Vehicle` / `Propelled` capability traits shared by every vessel kind
//! - `Boat`: hull state plus the resistance and integration step
//! - `RowingBoat`: crew-driven propulsion with differential steering

pub mod boat;
pub mod rowing;
pub mod vehicle;

pub use boat::Boat;
pub use rowing::{RowingBoat, STEERING_BAND, rowing_rates};
pub use vehicle::{Position, Propelled, Vehicle};
