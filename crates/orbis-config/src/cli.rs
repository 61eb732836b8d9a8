//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments for the planet mesher.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orbis", about = "Cube-sphere planet surface mesher")]
pub struct CliArgs {
    /// Planet radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Project the surface onto the sphere (false keeps the cube).
    #[arg(long)]
    pub spherized: Option<bool>,

    /// Cells per row/column in each leaf grid mesh.
    #[arg(long)]
    pub grid_resolution: Option<u32>,

    /// Regenerate when the config file changes.
    #[arg(long)]
    pub auto_update: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(spherized) = args.spherized {
            self.planet.spherized = spherized;
        }
        if let Some(resolution) = args.grid_resolution {
            self.planet.grid_resolution = resolution;
        }
        if let Some(auto_update) = args.auto_update {
            self.planet.auto_update = auto_update;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            radius: None,
            spherized: None,
            grid_resolution: None,
            auto_update: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            radius: Some(50.0),
            grid_resolution: Some(64),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.radius, 50.0);
        assert_eq!(config.planet.grid_resolution, 64);
        // Non-overridden fields retain defaults.
        assert!(config.planet.spherized);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }
}
