// Configuration module for reading Tron.toml

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::arena::BoundaryPolicy;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub arena: ArenaConfig,
    pub search: SearchConfig,
    pub boost: BoostConfig,
    pub debug: DebugConfig,
}

/// Identity reported on the info endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    pub participant: String,
    pub agent_name: String,
}

/// Arena-level behavior
#[derive(Debug, Deserialize, Clone)]
pub struct ArenaConfig {
    /// "bounded" (canonical) or "wrapped" (toroidal). One policy is active
    /// per process.
    pub boundary: String,
}

impl ArenaConfig {
    /// Resolves the configured boundary name to a policy. Unknown names get
    /// the canonical bounded behavior with a logged warning.
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        match self.boundary.as_str() {
            "bounded" => BoundaryPolicy::Bounded,
            "wrapped" => BoundaryPolicy::Wrapped,
            other => {
                warn!("Unknown boundary policy '{}', using bounded", other);
                BoundaryPolicy::Bounded
            }
        }
    }
}

/// Move search constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Which MoveStrategy implementation to run ("area").
    pub strategy: String,
    /// Score bonus for continuing in the current heading.
    pub continuation_bias: f64,
}

/// Boost gating constants
#[derive(Debug, Deserialize, Clone)]
pub struct BoostConfig {
    /// Per-decision probability of spending a boost when one remains.
    pub probability: f64,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Tron.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Tron.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Tron.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Tron.toml
    pub fn default_hardcoded() -> Self {
        Config {
            bot: BotConfig {
                participant: "Peyton".to_string(),
                agent_name: "a1k0n-Stolen-94%".to_string(),
            },
            arena: ArenaConfig {
                boundary: "bounded".to_string(),
            },
            search: SearchConfig {
                strategy: "area".to_string(),
                continuation_bias: 0.1,
            },
            boost: BoostConfig { probability: 0.1 },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "tron_decisions.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Tron.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.search.strategy, "area");
        assert_eq!(config.search.continuation_bias, 0.1);
        assert_eq!(config.boost.probability, 0.1);
    }

    #[test]
    fn test_tron_toml_can_be_parsed() {
        // This test ensures Tron.toml is valid and can be parsed
        let result = Config::from_file("Tron.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Tron.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Tron.toml").expect("Tron.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(file_config.bot.participant, hardcoded_config.bot.participant);
        assert_eq!(file_config.bot.agent_name, hardcoded_config.bot.agent_name);
        assert_eq!(file_config.arena.boundary, hardcoded_config.arena.boundary);
        assert_eq!(file_config.search.strategy, hardcoded_config.search.strategy);
        assert_eq!(
            file_config.search.continuation_bias,
            hardcoded_config.search.continuation_bias
        );
        assert_eq!(
            file_config.boost.probability,
            hardcoded_config.boost.probability
        );
        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_boundary_policy_resolution() {
        let mut config = Config::default_hardcoded();
        assert_eq!(config.arena.boundary_policy(), BoundaryPolicy::Bounded);

        config.arena.boundary = "wrapped".to_string();
        assert_eq!(config.arena.boundary_policy(), BoundaryPolicy::Wrapped);

        config.arena.boundary = "spherical".to_string();
        assert_eq!(config.arena.boundary_policy(), BoundaryPolicy::Bounded);
    }

    #[test]
    fn test_load_or_default_works() {
        // This should succeed with the actual file
        let config = Config::load_or_default();
        assert_eq!(config.arena.boundary, "bounded");
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
