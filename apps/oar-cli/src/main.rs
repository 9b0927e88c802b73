use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use oar_core::units::{kg, kinetic_energy_j, m, mps, to_knots, to_nautical_miles};
use oar_scenario::{Scenario, ScenarioResult, VesselDef, load, run_scenario};
use oar_sim::SimRecord;
use tracing::info;

#[derive(Parser)]
#[command(name = "oar-cli")]
#[command(about = "oarsim CLI - rowing boat kinematics simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario file (YAML, or JSON by extension)
        scenario_path: PathBuf,
    },
    /// Run a scenario and print a summary
    Run {
        /// Path to the scenario file (YAML, or JSON by extension)
        scenario_path: PathBuf,
        /// Override time step in seconds
        #[arg(long)]
        dt: Option<f64>,
        /// Override end time in seconds
        #[arg(long)]
        t_end: Option<f64>,
        /// Write the recorded time series to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Format of the output file
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> ScenarioResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            dt,
            t_end,
            output,
            format,
        } => cmd_run(&scenario_path, dt, t_end, output.as_deref(), format),
    }
}

fn cmd_validate(scenario_path: &Path) -> ScenarioResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load(scenario_path)?;
    println!(
        "✓ Scenario '{}' is valid ({} scheduled commands)",
        scenario.name,
        scenario.schedule.len()
    );
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    dt: Option<f64>,
    t_end: Option<f64>,
    output: Option<&Path>,
    format: OutputFormat,
) -> ScenarioResult<()> {
    let mut scenario = load(scenario_path)?;
    apply_overrides(&mut scenario, dt, t_end);

    println!("Running scenario: {}", scenario.name);
    let started = Instant::now();
    let record = run_scenario(&scenario)?;
    println!("✓ Simulation completed in {:.2?}", started.elapsed());

    print_summary(&record, vessel_weight(&scenario.vessel));

    if let Some(path) = output {
        let writer = BufWriter::new(File::create(path)?);
        match format {
            OutputFormat::Csv => record.to_csv(writer)?,
            OutputFormat::Json => serde_json::to_writer_pretty(writer, &record)?,
        }
        println!("✓ Wrote {} samples to {}", record.len(), path.display());
    }
    Ok(())
}

fn apply_overrides(scenario: &mut Scenario, dt: Option<f64>, t_end: Option<f64>) {
    if let Some(dt) = dt {
        info!(from = scenario.sim.dt_s, to = dt, "overriding time step");
        scenario.sim.dt_s = dt;
    }
    if let Some(t_end) = t_end {
        info!(from = scenario.sim.t_end_s, to = t_end, "overriding end time");
        scenario.sim.t_end_s = t_end;
    }
}

fn vessel_weight(vessel: &VesselDef) -> f64 {
    match vessel {
        VesselDef::Rowing { weight_kg, .. } | VesselDef::Boat { weight_kg, .. } => *weight_kg,
    }
}

fn print_summary(record: &SimRecord, weight_kg: f64) {
    let Some(last) = record.final_state() else {
        println!("No samples recorded");
        return;
    };
    let t = record.final_time().unwrap_or(0.0);
    let top = mps(record.top_speed());
    let distance = m(record.distance_travelled());

    println!("\n=== Summary (t = {t:.2} s) ===");
    if !last.afloat {
        println!("  Vessel sank at launch (overloaded)");
    }
    println!(
        "  Position:   x = {:.2} m, y = {:.2} m",
        last.position.x, last.position.y
    );
    println!("  Heading:    {:.1} deg", last.direction);
    println!(
        "  Speed:      {:.2} m/s ({:.2} kn)",
        last.speed,
        to_knots(mps(last.speed))
    );
    println!(
        "  Top speed:  {:.2} m/s ({:.2} kn)",
        record.top_speed(),
        to_knots(top)
    );
    println!(
        "  Distance:   {:.1} m ({:.3} NM)",
        record.distance_travelled(),
        to_nautical_miles(distance)
    );
    println!(
        "  Energy:     {:.0} J",
        kinetic_energy_j(kg(weight_kg), mps(last.speed))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use oar_scenario::from_yaml_str;

    const SCENARIO: &str = r#"
version: 1
name: override check
vessel:
  type: Boat
  max_weight_kg: 500.0
  weight_kg: 300.0
  max_speed_mps: 10.0
  max_rotation_deg_s: 90.0
  max_force_n: 600.0
sim:
  dt_s: 1.0
  t_end_s: 60.0
"#;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut scenario = from_yaml_str(SCENARIO).unwrap();
        apply_overrides(&mut scenario, Some(0.5), None);
        assert_eq!(scenario.sim.dt_s, 0.5);
        assert_eq!(scenario.sim.t_end_s, 60.0);

        apply_overrides(&mut scenario, None, Some(5.0));
        assert_eq!(scenario.sim.dt_s, 0.5);
        assert_eq!(scenario.sim.t_end_s, 5.0);
    }

    #[test]
    fn overridden_scenario_runs_to_new_end() {
        let mut scenario = from_yaml_str(SCENARIO).unwrap();
        apply_overrides(&mut scenario, Some(0.5), Some(2.0));
        let record = run_scenario(&scenario).unwrap();
        assert_eq!(record.final_time(), Some(2.0));
        assert_eq!(record.len(), 5);
    }
}
