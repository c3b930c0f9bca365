//! Survey configuration with JSON file persistence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::DEFAULT_EYE_HEIGHT_M;
use crate::validation::data::ValidationConfig;

/// Survey-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Observer eye height added to every pair estimate (meters)
    pub eye_height_m: f64,
    /// When true, a degenerate (equal-angle) pair is skipped instead of
    /// aborting the whole survey run
    pub skip_degenerate_pairs: bool,
    /// Observation and pair-separation validation limits applied during
    /// a survey run
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            eye_height_m: DEFAULT_EYE_HEIGHT_M,
            skip_degenerate_pairs: false,
            validation: ValidationConfig::default(),
        }
    }
}

/// Errors raised while loading, saving, or updating configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { message: String },
    Parse { message: String },
    InvalidParameter { parameter: String, value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { message } => write!(f, "Configuration I/O error: {}", message),
            ConfigError::Parse { message } => write!(f, "Configuration parse error: {}", message),
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter {} = {}: {}", parameter, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Manages survey configuration with optional JSON file backing
#[derive(Debug, Clone, Default)]
pub struct ConfigurationManager {
    config: SurveyConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager and load settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Current survey configuration
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Whether the configuration has unsaved changes
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: SurveyConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            message: e.to_string(),
        })?;
        let config: SurveyConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        Self::validate(&config)?;

        self.config = config;
        self.config_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save the current configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let contents =
            serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        fs::write(path.as_ref(), contents).map_err(|e| ConfigError::Io {
            message: e.to_string(),
        })?;

        self.config_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    fn validate(config: &SurveyConfig) -> Result<(), ConfigError> {
        if !config.eye_height_m.is_finite() || config.eye_height_m < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "eye_height_m".to_string(),
                value: config.eye_height_m.to_string(),
                reason: "must be a finite non-negative height".to_string(),
            });
        }
        let separation = config.validation.min_pair_separation_m;
        if !separation.is_finite() || separation < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "validation.min_pair_separation_m".to_string(),
                value: separation.to_string(),
                reason: "must be a finite non-negative distance".to_string(),
            });
        }
        if !(config.validation.min_angle_rad < config.validation.max_angle_rad) {
            return Err(ConfigError::InvalidParameter {
                parameter: "validation.min_angle_rad".to_string(),
                value: config.validation.min_angle_rad.to_string(),
                reason: "must be below validation.max_angle_rad".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SurveyConfig::default();
        assert_eq!(config.eye_height_m, 1.68);
        assert!(!config.skip_degenerate_pairs);
    }

    #[test]
    fn test_manager_creation() {
        let manager = ConfigurationManager::new();
        assert_eq!(manager.config().eye_height_m, 1.68);
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_update_rejects_negative_eye_height() {
        let mut manager = ConfigurationManager::new();
        let result = manager.update_config(SurveyConfig {
            eye_height_m: -1.0,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { .. })
        ));
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_update_rejects_negative_separation_bound() {
        let mut manager = ConfigurationManager::new();
        let result = manager.update_config(SurveyConfig {
            validation: ValidationConfig {
                min_pair_separation_m: -5.0,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_update_rejects_inverted_angle_bounds() {
        let mut manager = ConfigurationManager::new();
        let result = manager.update_config(SurveyConfig {
            validation: ValidationConfig {
                min_angle_rad: 1.0,
                max_angle_rad: 0.5,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let mut path = std::env::temp_dir();
        path.push("inclinometry_config_test.json");

        let mut manager = ConfigurationManager::new();
        manager
            .update_config(SurveyConfig {
                eye_height_m: 1.75,
                skip_degenerate_pairs: true,
                ..Default::default()
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let reloaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(reloaded.config(), manager.config());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validation_limits_ride_the_config_file() {
        let mut path = std::env::temp_dir();
        path.push("inclinometry_config_validation.json");

        let mut manager = ConfigurationManager::new();
        manager
            .update_config(SurveyConfig {
                validation: ValidationConfig {
                    min_angle_rad: 0.05,
                    max_angle_rad: 1.2,
                    min_pair_separation_m: 25.0,
                },
                ..Default::default()
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(reloaded.config().validation.min_pair_separation_m, 25.0);
        assert_eq!(reloaded.config().validation.min_angle_rad, 0.05);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_config_without_validation_block_still_parses() {
        let mut path = std::env::temp_dir();
        path.push("inclinometry_config_legacy.json");
        fs::write(
            &path,
            r#"{ "eye_height_m": 1.7, "skip_degenerate_pairs": false }"#,
        )
        .unwrap();

        let manager = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(manager.config().eye_height_m, 1.7);
        assert_eq!(manager.config().validation, ValidationConfig::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_error_on_malformed_file() {
        let mut path = std::env::temp_dir();
        path.push("inclinometry_config_malformed.json");
        fs::write(&path, "{ not json").unwrap();

        let result = ConfigurationManager::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let _ = fs::remove_file(&path);
    }
}
