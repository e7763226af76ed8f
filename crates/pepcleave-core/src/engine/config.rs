use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("'{low}' must not exceed '{high}'")]
    InvertedRange {
        low: &'static str,
        high: &'static str,
    },

    #[error("'{0}' must be greater than zero")]
    ZeroParameter(&'static str),
}

/// The externally supplied numeric thresholds driving the criteria filter
/// bank and the hydrophobicity window. The engine never owns these values;
/// every filter receives them as parameters.
///
/// Defaults match the threshold set the criteria bank was calibrated with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DigestConfig {
    pub min_peptide_length: usize,
    pub max_peptide_length: usize,
    pub number_flanking_amino_acids: usize,
    pub low_pi_range: f64,
    pub high_pi_range: f64,
    pub low_charge_state: i32,
    pub high_charge_state: i32,
    pub max_homopolymeric_length: usize,
    pub max_hydrophobicity_window: usize,
    pub min_kd_score: f64,
    pub max_kd_score: f64,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            min_peptide_length: 7,
            max_peptide_length: 30,
            number_flanking_amino_acids: 6,
            low_pi_range: 4.0,
            high_pi_range: 9.0,
            low_charge_state: 1,
            high_charge_state: 4,
            max_homopolymeric_length: 3,
            max_hydrophobicity_window: 9,
            min_kd_score: 0.5,
            max_kd_score: 2.0,
        }
    }
}

impl DigestConfig {
    pub fn builder() -> DigestConfigBuilder {
        DigestConfigBuilder::default()
    }

    /// Loads thresholds from a TOML file; fields absent from the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_peptide_length > self.max_peptide_length {
            return Err(ConfigError::InvertedRange {
                low: "min_peptide_length",
                high: "max_peptide_length",
            });
        }
        if self.low_pi_range > self.high_pi_range {
            return Err(ConfigError::InvertedRange {
                low: "low_pi_range",
                high: "high_pi_range",
            });
        }
        if self.low_charge_state > self.high_charge_state {
            return Err(ConfigError::InvertedRange {
                low: "low_charge_state",
                high: "high_charge_state",
            });
        }
        if self.min_kd_score > self.max_kd_score {
            return Err(ConfigError::InvertedRange {
                low: "min_kd_score",
                high: "max_kd_score",
            });
        }
        if self.max_hydrophobicity_window == 0 {
            return Err(ConfigError::ZeroParameter("max_hydrophobicity_window"));
        }
        if self.max_homopolymeric_length == 0 {
            return Err(ConfigError::ZeroParameter("max_homopolymeric_length"));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DigestConfigBuilder {
    config: DigestConfig,
}

impl DigestConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_peptide_length(mut self, value: usize) -> Self {
        self.config.min_peptide_length = value;
        self
    }
    pub fn max_peptide_length(mut self, value: usize) -> Self {
        self.config.max_peptide_length = value;
        self
    }
    pub fn number_flanking_amino_acids(mut self, value: usize) -> Self {
        self.config.number_flanking_amino_acids = value;
        self
    }
    pub fn pi_range(mut self, low: f64, high: f64) -> Self {
        self.config.low_pi_range = low;
        self.config.high_pi_range = high;
        self
    }
    pub fn charge_state_range(mut self, low: i32, high: i32) -> Self {
        self.config.low_charge_state = low;
        self.config.high_charge_state = high;
        self
    }
    pub fn max_homopolymeric_length(mut self, value: usize) -> Self {
        self.config.max_homopolymeric_length = value;
        self
    }
    pub fn max_hydrophobicity_window(mut self, value: usize) -> Self {
        self.config.max_hydrophobicity_window = value;
        self
    }
    pub fn kd_score_range(mut self, min: f64, max: f64) -> Self {
        self.config.min_kd_score = min;
        self.config.max_kd_score = max;
        self
    }

    pub fn build(self) -> Result<DigestConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        let config = DigestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_peptide_length, 7);
        assert_eq!(config.max_peptide_length, 30);
        assert_eq!(config.max_hydrophobicity_window, 9);
    }

    #[test]
    fn builder_overrides_selected_thresholds() {
        let config = DigestConfig::builder()
            .min_peptide_length(5)
            .kd_score_range(-1.0, 3.0)
            .build()
            .unwrap();
        assert_eq!(config.min_peptide_length, 5);
        assert_eq!(config.min_kd_score, -1.0);
        assert_eq!(config.max_kd_score, 3.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.number_flanking_amino_acids, 6);
    }

    #[test]
    fn builder_rejects_inverted_ranges() {
        let result = DigestConfig::builder().pi_range(9.0, 4.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvertedRange {
                low: "low_pi_range",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_zero_window() {
        let result = DigestConfig::builder().max_hydrophobicity_window(0).build();
        assert!(matches!(result, Err(ConfigError::ZeroParameter(_))));
    }

    #[test]
    fn load_succeeds_with_partial_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("digest.toml");
        fs::write(
            &file_path,
            "min_peptide_length = 6\nmax_hydrophobicity_window = 5\n",
        )
        .unwrap();

        let config = DigestConfig::load(&file_path).unwrap();
        assert_eq!(config.min_peptide_length, 6);
        assert_eq!(config.max_hydrophobicity_window, 5);
        assert_eq!(config.max_peptide_length, 30);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = DigestConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = DigestConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_unknown_threshold_names() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("unknown.toml");
        fs::write(&file_path, "min_peptide_len = 6\n").unwrap();
        let result = DigestConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }
}
