pub mod config;
pub mod point;
pub mod sim_params;
pub mod snapshot;

// Re-export key types for easier use by dependent crates
pub use config::{SimulationConfig, UniverseConfig, DiseaseConfig, TimingConfig, InitialConditions, OutputConfig};
pub use point::Point;
pub use sim_params::SimParams;
pub use snapshot::{CellRecord, Snapshot};
