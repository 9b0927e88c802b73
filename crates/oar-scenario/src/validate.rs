//! Scenario validation logic.

use crate::schema::{ActionDef, EventDef, Scenario, SimDef, VesselDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Schedule out of order at event {index}: {time_s} s follows {previous_s} s")]
    UnorderedSchedule {
        index: usize,
        time_s: f64,
        previous_s: f64,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(invalid("name", "\"\"", "must not be empty"));
    }

    validate_vessel(&scenario.vessel)?;
    validate_sim(&scenario.sim)?;
    validate_schedule(&scenario.schedule)?;
    Ok(())
}

fn validate_vessel(vessel: &VesselDef) -> Result<(), ValidationError> {
    match vessel {
        VesselDef::Rowing {
            max_weight_kg,
            weight_kg,
            rowers,
            max_rowing_frequency_hz,
            max_speed_mps,
            max_rotation_deg_s,
            rower_force_n,
        } => {
            positive("vessel.max_weight_kg", *max_weight_kg)?;
            non_negative("vessel.weight_kg", *weight_kg)?;
            if u32::try_from(*rowers).is_err() {
                return Err(invalid(
                    "vessel.rowers",
                    &rowers.to_string(),
                    "must be a non-negative crew size",
                ));
            }
            non_negative("vessel.max_rowing_frequency_hz", *max_rowing_frequency_hz)?;
            non_negative("vessel.max_speed_mps", *max_speed_mps)?;
            non_negative("vessel.max_rotation_deg_s", *max_rotation_deg_s)?;
            non_negative("vessel.rower_force_n", *rower_force_n)?;
        }
        VesselDef::Boat {
            max_weight_kg,
            weight_kg,
            max_speed_mps,
            max_rotation_deg_s,
            max_force_n,
        } => {
            positive("vessel.max_weight_kg", *max_weight_kg)?;
            non_negative("vessel.weight_kg", *weight_kg)?;
            non_negative("vessel.max_speed_mps", *max_speed_mps)?;
            non_negative("vessel.max_rotation_deg_s", *max_rotation_deg_s)?;
            non_negative("vessel.max_force_n", *max_force_n)?;
        }
    }
    Ok(())
}

fn validate_sim(sim: &SimDef) -> Result<(), ValidationError> {
    positive("sim.dt_s", sim.dt_s)?;
    non_negative("sim.t_end_s", sim.t_end_s)?;
    if sim.record_every == 0 {
        return Err(invalid("sim.record_every", "0", "must be at least 1"));
    }
    if sim.max_steps == Some(0) {
        return Err(invalid("sim.max_steps", "0", "must be at least 1"));
    }
    Ok(())
}

fn validate_schedule(events: &[EventDef]) -> Result<(), ValidationError> {
    let mut previous_s = 0.0;
    for (index, event) in events.iter().enumerate() {
        non_negative(&format!("schedule[{index}].time_s"), event.time_s)?;
        if event.time_s < previous_s {
            return Err(ValidationError::UnorderedSchedule {
                index,
                time_s: event.time_s,
                previous_s,
            });
        }
        previous_s = event.time_s;

        let value = match event.action {
            ActionDef::SetAcceleration { value } | ActionDef::SetRotation { value } => value,
        };
        if !value.is_finite() {
            return Err(invalid(
                &format!("schedule[{index}].action.value"),
                &value.to_string(),
                "must be finite",
            ));
        }
    }
    Ok(())
}

fn invalid(field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &value.to_string(), "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &value.to_string(), "must be non-negative"))
    }
}
