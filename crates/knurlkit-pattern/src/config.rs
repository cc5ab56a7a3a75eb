//! Pattern generation configuration.
//!
//! Loadable from a JSON file; every field has a default matching the stock
//! knife-relief setup (10 unit cells, 2 unit erosion spacing, 10 unit safety
//! margin, checkerboard alternation on).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PatternError;

/// Recognized pattern generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Cell side length in drawing units.
    pub rect_size: f64,
    /// Erosion spacing per iteration.
    pub space: f64,
    /// Initial inward safety offset applied to the working region.
    pub margin: f64,
    /// Checkerboard-phased contour retention; `false` keeps every iteration.
    pub alternate: bool,
    /// `id` attribute of the blade outline in the input document.
    pub blade_id: String,
    /// `id` attribute of the cutting bounding box in the input document.
    pub bounding_id: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            rect_size: 10.0,
            space: 2.0,
            margin: 10.0,
            alternate: true,
            blade_id: "blade".to_string(),
            bounding_id: "cutting_bounding_box".to_string(),
        }
    }
}

impl PatternConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = std::fs::read_to_string(path)?;
        let config: PatternConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a run at all.
    pub fn validate(&self) -> Result<(), PatternError> {
        if !(self.rect_size > 0.0) {
            return Err(PatternError::InvalidConfig(format!(
                "rect_size must be positive, got {}",
                self.rect_size
            )));
        }
        if !(self.space > 0.0) {
            return Err(PatternError::InvalidConfig(format!(
                "space must be positive, got {}",
                self.space
            )));
        }
        if self.margin < 0.0 {
            return Err(PatternError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.blade_id == self.bounding_id {
            return Err(PatternError::InvalidConfig(format!(
                "blade_id and bounding_id must differ, both are \"{}\"",
                self.blade_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = PatternConfig::default();
        config.validate().unwrap();
        assert_eq!(config.rect_size, 10.0);
        assert_eq!(config.space, 2.0);
        assert_eq!(config.margin, 10.0);
        assert!(config.alternate);
    }

    #[test]
    fn json_round_trip() {
        let config = PatternConfig {
            space: 3.0,
            alternate: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PatternConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.space, 3.0);
        assert!(!back.alternate);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: PatternConfig = serde_json::from_str(r#"{"space": 2.5}"#).unwrap();
        assert_eq!(config.space, 2.5);
        assert_eq!(config.rect_size, 10.0);
        assert_eq!(config.blade_id, "blade");
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let config = PatternConfig {
            rect_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PatternError::InvalidConfig(_))
        ));

        let config = PatternConfig {
            space: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_ids_are_rejected() {
        let config = PatternConfig {
            bounding_id: "blade".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rect_size": 8.0, "margin": 5.0}}"#).unwrap();
        let config = PatternConfig::load(file.path()).unwrap();
        assert_eq!(config.rect_size, 8.0);
        assert_eq!(config.margin, 5.0);
        assert_eq!(config.space, 2.0);
    }
}
