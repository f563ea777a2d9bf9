use serde::{Deserialize, Serialize};
use anyhow::Result;
use crate::sim_params::SimParams;
use std::path::Path;

// Size of the simulated plane. Bounds are centred on the origin.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UniverseConfig {
    pub width: f32,
    pub height: f32,
}

// Disease parameters
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiseaseConfig {
    pub cell_radius: f32,
    pub recovery_period: u32,
}

// Initial population, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InitialConditions {
    pub num_cells: u32,
    pub speed: f32,
    pub num_infected: u32,
    pub num_immune: u32,
    pub seed: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TimingConfig {
    /// Hard stop for the driver loop; `None` runs until no infections remain.
    #[serde(default)]
    pub max_ticks: Option<u64>,
    #[serde(default = "default_record_interval")]
    pub record_interval_ticks: u64,
}

// Configuration for output settings, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub base_filename: String,
    pub save_positions: bool,
    pub save_stats: bool,
    #[serde(default)]
    pub save_positions_in_snapshot: bool,
    pub format: Option<String>, // Output format: "json", "bincode", "messagepack"
}

fn default_record_interval() -> u64 {
    1
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            max_ticks: None,
            record_interval_ticks: default_record_interval(),
        }
    }
}

// Main simulation configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SimulationConfig {
    pub universe: UniverseConfig,
    pub disease: DiseaseConfig,
    pub initial_conditions: InitialConditions,
    #[serde(default)]
    pub timing: TimingConfig,
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Loads the simulation configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        Self::from_toml_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Invalid config '{}': {}", path_ref.display(), e))
    }

    /// Parses and validates a configuration held in memory.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        // --- Validation ---
        if !(config.universe.width > 0.0) || !(config.universe.height > 0.0) {
            anyhow::bail!("universe width and height must be positive.");
        }
        if !(config.disease.cell_radius >= 0.0) {
            anyhow::bail!("cell_radius must not be negative.");
        }
        if !(config.initial_conditions.speed >= 0.0) {
            anyhow::bail!("speed must not be negative.");
        }
        if config.initial_conditions.num_cells == 0 {
            anyhow::bail!("num_cells must be greater than 0.");
        }
        if config.timing.record_interval_ticks == 0 {
            anyhow::bail!("record_interval_ticks must be greater than 0.");
        }
        // Population split is validated by the model itself.

        Ok(config)
    }

    /// Converts the configuration into simulation parameters used at runtime.
    pub fn get_sim_params(&self) -> SimParams {
        SimParams::centered(
            self.universe.width,
            self.universe.height,
            self.disease.cell_radius,
            self.disease.recovery_period,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[universe]
width = 400.0
height = 300.0

[disease]
cell_radius = 15.0
recovery_period = 90

[initial_conditions]
num_cells = 50
speed = 5.0
num_infected = 2
num_immune = 3
seed = 7

[output]
base_filename = "run"
save_positions = true
save_stats = false
"#;

    #[test]
    fn parses_sample_and_derives_params() -> Result<()> {
        let config = SimulationConfig::from_toml_str(SAMPLE)?;
        assert_eq!(config.initial_conditions.num_cells, 50);
        assert_eq!(config.timing.max_ticks, None);
        assert_eq!(config.timing.record_interval_ticks, 1);
        assert!(!config.output.save_positions_in_snapshot);

        let params = config.get_sim_params();
        assert_eq!(params.max_x, 200.0);
        assert_eq!(params.min_y, -150.0);
        assert_eq!(params.recovery_period, 90);
        Ok(())
    }

    #[test]
    fn rejects_empty_population() {
        let bad = SAMPLE.replace("num_cells = 50", "num_cells = 0");
        let err = SimulationConfig::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("num_cells"));
    }

    #[test]
    fn rejects_non_positive_universe() {
        let bad = SAMPLE.replace("width = 400.0", "width = 0.0");
        assert!(SimulationConfig::from_toml_str(&bad).is_err());
    }

    #[test]
    fn rejects_missing_section() {
        let bad = SAMPLE.replace("[disease]", "[illness]");
        assert!(SimulationConfig::from_toml_str(&bad).is_err());
    }
}
