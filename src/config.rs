use std::path::Path;

use crate::error::ConfigError;

/// Search engine configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lookahead depth in plies. Full-width search, so cost grows with 7^depth.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 5 }
    }
}

/// Weights for the two components of the board evaluator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub possible_weight: f64,
    pub threat_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            possible_weight: 0.5,
            threat_weight: 0.5,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub heuristic: HeuristicConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            search: SearchConfig::default(),
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if !self.heuristic.possible_weight.is_finite() || self.heuristic.possible_weight < 0.0 {
            return Err(ConfigError::Validation(
                "heuristic.possible_weight must be finite and >= 0".into(),
            ));
        }
        if !self.heuristic.threat_weight.is_finite() || self.heuristic.threat_weight < 0.0 {
            return Err(ConfigError::Validation(
                "heuristic.threat_weight must be finite and >= 0".into(),
            ));
        }
        // The evaluator must stay inside [-1, 1] so it never outranks a
        // proven win; each component is already normalized to [-1, 1].
        let weight_sum = self.heuristic.possible_weight + self.heuristic.threat_weight;
        if weight_sum <= 0.0 || weight_sum > 1.0 {
            return Err(ConfigError::Validation(
                "heuristic weights must sum to a value in (0, 1]".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 5);
        assert!((config.heuristic.possible_weight - 0.5).abs() < 1e-9);
        assert!((config.heuristic.threat_weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 7
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 7);
        // Other fields should be defaults
        assert!((config.heuristic.possible_weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.search.depth, default.search.depth);
        assert!((config.heuristic.threat_weight - default.heuristic.threat_weight).abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_weight() {
        let mut config = AppConfig::default();
        config.heuristic.possible_weight = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_weight() {
        let mut config = AppConfig::default();
        config.heuristic.threat_weight = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_weight_sum_above_one() {
        let mut config = AppConfig::default();
        config.heuristic.possible_weight = 0.8;
        config.heuristic.threat_weight = 0.8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_weight_sum() {
        let mut config = AppConfig::default();
        config.heuristic.possible_weight = 0.0;
        config.heuristic.threat_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
depth = 3

[heuristic]
possible_weight = 0.25
threat_weight = 0.25
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.depth, 3);
        assert!((config.heuristic.possible_weight - 0.25).abs() < 1e-9);
        assert!((config.heuristic.threat_weight - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[search]\ndepth = 0").unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
