use serde::{Deserialize, Serialize};
use skyroute_gen::TerrainParams;
use skyroute_paths::Strategy;
use std::path::Path;

use crate::cli::Cli;
use crate::errors::CliError;

/// Largest map accepted, in cells.
pub const MAX_CELLS: u64 = 4_000_000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub terrain: TerrainConfig,
    pub strategies: Vec<Strategy>,
    pub show_visited: bool,
    pub json: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    pub width: i32,
    pub height: i32,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub params: TerrainParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            strategies: Strategy::ALL.to_vec(),
            show_visited: true,
            json: false,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
            params: TerrainParams::default(),
        }
    }
}

impl Config {
    /// Read a configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let file = std::fs::File::open(path).map_err(|e| CliError::Io {
            source: e.to_string(),
            path: Some(path.to_string_lossy().to_string()),
        })?;
        serde_json::from_reader(file).map_err(|e| CliError::ParseError { msg: e.to_string() })
    }

    /// Build the effective configuration: file (if any), then command-line
    /// overrides, then validation.
    pub fn from_cli(args: &Cli) -> Result<Self, CliError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &Cli) {
        if let Some(width) = args.width {
            self.terrain.width = width;
        }
        if let Some(height) = args.height {
            self.terrain.height = height;
        }
        if let Some(max_elevation) = args.max_elevation {
            self.terrain.params.max_elevation = max_elevation;
        }
        if let Some(no_fly_zones) = args.no_fly_zones {
            self.terrain.params.no_fly_zones = no_fly_zones;
        }
        if args.seed.is_some() {
            self.terrain.seed = args.seed;
        }
        if !args.strategies.is_empty() {
            self.strategies = args.strategies.clone();
        }
        if args.hide_visited {
            self.show_visited = false;
        }
        if args.json {
            self.json = true;
        }
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.terrain.width < 1 || self.terrain.height < 1 {
            return Err(CliError::Config {
                source: format!(
                    "map must be at least 1x1, got {}x{}",
                    self.terrain.width, self.terrain.height
                ),
            });
        }
        let cells = self.terrain.width as u64 * self.terrain.height as u64;
        if cells > MAX_CELLS {
            return Err(CliError::Config {
                source: format!(
                    "map of {}x{} has {cells} cells, more than the limit of {MAX_CELLS}",
                    self.terrain.width, self.terrain.height
                ),
            });
        }
        if self.terrain.params.max_elevation < 1 {
            return Err(CliError::Config {
                source: "max_elevation must be at least 1".to_string(),
            });
        }
        if self.strategies.is_empty() {
            return Err(CliError::Config {
                source: "no search strategy selected".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_takes_defaults() {
        let json = r#"{"terrain": {"width": 20, "no_fly_zones": 4}, "strategies": ["greedy"]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.terrain.width, 20);
        assert_eq!(config.terrain.height, 10);
        assert_eq!(config.terrain.params.no_fly_zones, 4);
        assert_eq!(config.terrain.params.max_elevation, 9);
        assert_eq!(config.strategies, vec![Strategy::Greedy]);
        assert!(config.show_visited);
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config = Config::default();
        let args = Cli {
            width: Some(5),
            seed: Some(99),
            strategies: vec![Strategy::AStar],
            hide_visited: true,
            ..Cli::default()
        };
        config.apply_overrides(&args);
        assert_eq!(config.terrain.width, 5);
        assert_eq!(config.terrain.height, 10);
        assert_eq!(config.terrain.seed, Some(99));
        assert_eq!(config.strategies, vec![Strategy::AStar]);
        assert!(!config.show_visited);
    }

    #[test]
    fn validation_rejects_bad_sizes() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.terrain.height = 0;
        assert!(matches!(config.validate(), Err(CliError::Config { .. })));

        let mut config = Config::default();
        config.terrain.params.max_elevation = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.strategies.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_caps_map_area() {
        let mut config = Config::default();
        config.terrain.width = 2_000_000_000;
        config.terrain.height = 4;
        assert!(matches!(config.validate(), Err(CliError::Config { .. })));

        config.terrain.width = 2000;
        config.terrain.height = 2000;
        assert!(config.validate().is_ok());
        config.terrain.height = 2001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/skyroute.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { path: Some(_), .. }));
    }
}
