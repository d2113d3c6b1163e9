//! Configuration system for branchgate.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod gate_config;
pub mod loader;

pub use gate_config::GateConfig;
pub use loader::ConfigOverrides;
