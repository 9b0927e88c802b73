//! Simulation runner.

use oar_vessel::Propelled;
use tracing::{info, warn};

use crate::error::{SimError, SimResult};
use crate::record::{SimRecord, VesselSnapshot};
use crate::schedule::Schedule;

/// Slack used when comparing simulation times.
pub(crate) const TIME_EPS: f64 = 1e-9;

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.1,
            t_end: 10.0,
            max_steps: 100_000,
            record_every: 1,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !(self.t_end.is_finite() && self.t_end >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Drive `vessel` from t = 0 to `opts.t_end` in fixed steps.
///
/// Commands due at or before the current time are applied before each step.
/// The last step is shortened so the run ends exactly at `t_end`, and commands
/// due at that final time are applied before the final state is recorded. The
/// initial state, every `record_every`-th step and the final state are
/// recorded.
pub fn run_sim<V: Propelled + ?Sized>(
    vessel: &mut V,
    schedule: &Schedule,
    opts: &SimOptions,
) -> SimResult<SimRecord> {
    opts.validate()?;

    if !vessel.is_afloat() {
        warn!("vessel is sunk, it will not move");
    }
    info!(
        dt = opts.dt,
        t_end = opts.t_end,
        commands = schedule.len(),
        "simulation started"
    );

    let mut t = 0.0;
    let mut record = SimRecord::default();
    record.push(t, VesselSnapshot::capture(vessel));

    let mut cursor = schedule.cursor();
    let mut step = 0;
    while opts.t_end - t > TIME_EPS && step < opts.max_steps {
        cursor.apply_due(vessel, t);

        let h = opts.dt.min(opts.t_end - t);
        vessel.advance(h)?;
        t = if opts.t_end - (t + h) <= TIME_EPS {
            opts.t_end
        } else {
            t + h
        };
        step += 1;

        if step % opts.record_every == 0 {
            record.push(t, VesselSnapshot::capture(vessel));
        }
    }

    // Commands due at the final time still take effect in the final state
    let late = cursor.apply_due(vessel, t);

    // Always record final state
    if step % opts.record_every != 0 {
        record.push(t, VesselSnapshot::capture(vessel));
    } else if late > 0 {
        record.replace_last(VesselSnapshot::capture(vessel));
    }

    if step >= opts.max_steps && opts.t_end - t > TIME_EPS {
        warn!(steps = step, t, "step limit reached before t_end");
    }
    info!(steps = step, t, "simulation finished");

    Ok(record)
}
