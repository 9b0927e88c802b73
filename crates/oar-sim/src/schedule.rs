//! Timed control commands.

use oar_vessel::Propelled;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};

/// A pilot input applied to a vessel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Throttle intensity in [-1, 1].
    SetAcceleration(f64),
    /// Turning intensity in [-1, 1], positive clockwise.
    SetRotation(f64),
}

impl Command {
    pub fn apply<V: Propelled + ?Sized>(&self, vessel: &mut V) {
        match *self {
            Command::SetAcceleration(value) => vessel.set_acceleration(value),
            Command::SetRotation(value) => vessel.set_rotation(value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCommand {
    /// Time at which the command takes effect (seconds)
    pub time_s: f64,
    pub command: Command,
}

/// Commands ordered by time. Commands sharing a time keep their given order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    commands: Vec<ScheduledCommand>,
}

impl Schedule {
    /// Build a schedule, sorting commands by time.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a command time is negative or non-finite.
    pub fn new(mut commands: Vec<ScheduledCommand>) -> SimResult<Self> {
        if commands
            .iter()
            .any(|c| !c.time_s.is_finite() || c.time_s < 0.0)
        {
            return Err(SimError::InvalidArg {
                what: "command time must be finite and non-negative",
            });
        }
        commands.sort_by(|a, b| a.time_s.total_cmp(&b.time_s));
        Ok(Self { commands })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledCommand> {
        self.commands.iter()
    }

    pub fn cursor(&self) -> ScheduleCursor<'_> {
        ScheduleCursor {
            schedule: self,
            next: 0,
        }
    }
}

/// Walks a schedule forward in time, applying each command once.
#[derive(Debug)]
pub struct ScheduleCursor<'a> {
    schedule: &'a Schedule,
    next: usize,
}

impl ScheduleCursor<'_> {
    /// Apply every command due at or before `t`. Returns how many were applied.
    pub fn apply_due<V: Propelled + ?Sized>(&mut self, vessel: &mut V, t: f64) -> usize {
        let mut applied = 0;
        while let Some(entry) = self.schedule.commands.get(self.next) {
            if entry.time_s > t + crate::sim::TIME_EPS {
                break;
            }
            debug!(t, time_s = entry.time_s, command = ?entry.command, "applying command");
            entry.command.apply(vessel);
            self.next += 1;
            applied += 1;
        }
        applied
    }

    pub fn remaining(&self) -> usize {
        self.schedule.commands.len() - self.next
    }
}
