//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub vessel: VesselDef,
    #[serde(default)]
    pub sim: SimDef,
    #[serde(default)]
    pub schedule: Vec<EventDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum VesselDef {
    Rowing {
        max_weight_kg: f64,
        weight_kg: f64,
        /// Signed so that a negative crew size reaches validation instead of
        /// failing deserialization.
        rowers: i64,
        max_rowing_frequency_hz: f64,
        max_speed_mps: f64,
        max_rotation_deg_s: f64,
        rower_force_n: f64,
    },
    Boat {
        max_weight_kg: f64,
        weight_kg: f64,
        max_speed_mps: f64,
        max_rotation_deg_s: f64,
        max_force_n: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimDef {
    pub dt_s: f64,
    pub t_end_s: f64,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

fn default_record_every() -> usize {
    1
}

impl Default for SimDef {
    fn default() -> Self {
        Self {
            dt_s: 0.1,
            t_end_s: 10.0,
            record_every: default_record_every(),
            max_steps: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDef {
    pub time_s: f64,
    pub action: ActionDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ActionDef {
    SetAcceleration { value: f64 },
    SetRotation { value: f64 },
}
