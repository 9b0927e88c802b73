//! Simulation result recording.

use std::io::Write;

use oar_vessel::{Position, Propelled};
use serde::{Deserialize, Serialize};

use crate::error::SimResult;

/// Observable vessel state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VesselSnapshot {
    pub position: Position,
    /// Signed speed along the heading (m/s)
    pub speed: f64,
    /// Heading (deg, 0 = +x axis, clockwise)
    pub direction: f64,
    pub rotation: f64,
    pub acceleration: f64,
    pub afloat: bool,
}

impl VesselSnapshot {
    pub fn capture<V: Propelled + ?Sized>(vessel: &V) -> Self {
        Self {
            position: vessel.position(),
            speed: vessel.speed(),
            direction: vessel.direction(),
            rotation: vessel.rotation(),
            acceleration: vessel.acceleration(),
            afloat: vessel.is_afloat(),
        }
    }
}

/// Record of simulation results.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<VesselSnapshot>,
}

impl SimRecord {
    pub(crate) fn push(&mut self, t: f64, snapshot: VesselSnapshot) {
        self.t.push(t);
        self.x.push(snapshot);
    }

    pub(crate) fn replace_last(&mut self, snapshot: VesselSnapshot) {
        if let Some(last) = self.x.last_mut() {
            *last = snapshot;
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn final_state(&self) -> Option<&VesselSnapshot> {
        self.x.last()
    }

    pub fn final_time(&self) -> Option<f64> {
        self.t.last().copied()
    }

    /// Largest speed magnitude seen across recorded samples.
    pub fn top_speed(&self) -> f64 {
        self.x.iter().map(|s| s.speed.abs()).fold(0.0, f64::max)
    }

    /// Path length through the recorded positions. Decimated records give a
    /// lower bound on the true path.
    pub fn distance_travelled(&self) -> f64 {
        self.x
            .windows(2)
            .map(|w| w[0].position.distance_to(&w[1].position))
            .sum()
    }

    /// Write the record as CSV with a header row.
    pub fn to_csv<W: Write>(&self, mut out: W) -> SimResult<()> {
        writeln!(out, "t_s,x_m,y_m,speed_mps,direction_deg,rotation,acceleration,afloat")?;
        for (t, s) in self.t.iter().zip(&self.x) {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{}",
                t,
                s.position.x,
                s.position.y,
                s.speed,
                s.direction,
                s.rotation,
                s.acceleration,
                s.afloat
            )?;
        }
        Ok(())
    }
}
