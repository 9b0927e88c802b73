//! Fixed-step simulation of vessels under a timed control schedule.
//!
//! Provides:
//! - `Schedule` of timed throttle and steering commands
//! - `run_sim` fixed-step runner for any `Propelled` vessel
//! - `SimRecord` time series with summary helpers and CSV export

pub mod error;
pub mod record;
pub mod schedule;
pub mod sim;

pub use error::{SimError, SimResult};
pub use record::{SimRecord, VesselSnapshot};
pub use schedule::{Command, Schedule, ScheduleCursor, ScheduledCommand};
pub use sim::{SimOptions, run_sim};
