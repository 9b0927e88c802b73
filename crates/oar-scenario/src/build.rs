//! Turn scenario definitions into live simulation objects.

use oar_core::{OarError, OarResult};
use oar_sim::{Command, Schedule, ScheduledCommand, SimOptions, SimResult};
use oar_vessel::{Boat, Propelled, RowingBoat};

use crate::schema::{ActionDef, EventDef, SimDef, VesselDef};

pub fn build_vessel(def: &VesselDef) -> OarResult<Box<dyn Propelled>> {
    let vessel: Box<dyn Propelled> = match *def {
        VesselDef::Rowing {
            max_weight_kg,
            weight_kg,
            rowers,
            max_rowing_frequency_hz,
            max_speed_mps,
            max_rotation_deg_s,
            rower_force_n,
        } => {
            let rowers = u32::try_from(rowers).map_err(|_| OarError::InvalidParameter {
                what: "number_of_rowers",
                value: rowers as f64,
            })?;
            Box::new(RowingBoat::new(
                max_weight_kg,
                weight_kg,
                rowers,
                max_rowing_frequency_hz,
                max_speed_mps,
                max_rotation_deg_s,
                rower_force_n,
            )?)
        }
        VesselDef::Boat {
            max_weight_kg,
            weight_kg,
            max_speed_mps,
            max_rotation_deg_s,
            max_force_n,
        } => Box::new(Boat::new(
            max_weight_kg,
            weight_kg,
            max_speed_mps,
            max_rotation_deg_s,
            max_force_n,
        )?),
    };
    Ok(vessel)
}

pub fn build_schedule(events: &[EventDef]) -> SimResult<Schedule> {
    let commands = events
        .iter()
        .map(|event| ScheduledCommand {
            time_s: event.time_s,
            command: match event.action {
                ActionDef::SetAcceleration { value } => Command::SetAcceleration(value),
                ActionDef::SetRotation { value } => Command::SetRotation(value),
            },
        })
        .collect();
    Schedule::new(commands)
}

pub fn sim_options(def: &SimDef) -> SimOptions {
    let defaults = SimOptions::default();
    SimOptions {
        dt: def.dt_s,
        t_end: def.t_end_s,
        max_steps: def.max_steps.unwrap_or(defaults.max_steps),
        record_every: def.record_every,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_crew_is_invalid_parameter() {
        let def = VesselDef::Rowing {
            max_weight_kg: 500.0,
            weight_kg: 300.0,
            rowers: -1,
            max_rowing_frequency_hz: 2.0,
            max_speed_mps: 10.0,
            max_rotation_deg_s: 90.0,
            rower_force_n: 150.0,
        };
        let err = build_vessel(&def).err().unwrap();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn generic_boat_built() {
        let def = VesselDef::Boat {
            max_weight_kg: 500.0,
            weight_kg: 300.0,
            max_speed_mps: 10.0,
            max_rotation_deg_s: 90.0,
            max_force_n: 600.0,
        };
        let vessel = build_vessel(&def).unwrap();
        assert!(vessel.is_afloat());
    }

    #[test]
    fn options_from_def() {
        let opts = sim_options(&SimDef {
            dt_s: 0.5,
            t_end_s: 3.0,
            record_every: 2,
            max_steps: None,
        });
        assert_eq!(opts.dt, 0.5);
        assert_eq!(opts.t_end, 3.0);
        assert_eq!(opts.record_every, 2);
        assert_eq!(opts.max_steps, SimOptions::default().max_steps);
    }
}
