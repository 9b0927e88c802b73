//! oar-scenario: scenario file format, validation and execution.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{build_schedule, build_vessel, sim_options};
pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

use oar_sim::SimRecord;
use tracing::info;

pub const LATEST_VERSION: u32 = 1;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Vessel error: {0}")]
    Vessel(#[from] oar_core::OarError),

    #[error("Simulation error: {0}")]
    Sim(#[from] oar_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_yaml::from_str(content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &std::path::Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking the format from the file extension (`.json` or YAML).
pub fn load(path: &std::path::Path) -> ScenarioResult<Scenario> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Validate, build and run a scenario.
pub fn run_scenario(scenario: &Scenario) -> ScenarioResult<SimRecord> {
    validate_scenario(scenario)?;
    let mut vessel = build_vessel(&scenario.vessel)?;
    let schedule = build_schedule(&scenario.schedule)?;
    let opts = sim_options(&scenario.sim);

    info!(name = %scenario.name, "running scenario");
    let record = oar_sim::run_sim(vessel.as_mut(), &schedule, &opts)?;
    Ok(record)
}
