//! Configuration for the orbis planet mesher: RON persistence with CLI
//! overrides.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, PlanetConfig};
pub use error::ConfigError;
