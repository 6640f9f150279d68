use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::{Result, StartListError};
use crate::utils::validation::{self, Validate};

/// Options for the starter display, read from a TOML settings file.
/// Reading is one-way: the file is loaded at startup and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Location of the start list files.
    pub startlist_dir: String,
    /// Number of lanes shown on the board (the data always has 10).
    pub num_lanes: usize,
    pub color_bg: String,
    pub color_fg: String,
    /// Event/description text color.
    pub color_ehd: String,
    pub normal_font: String,
    /// Font size relative to the line height.
    pub font_scale: f64,
    pub fullscreen: bool,
    /// Boards at some pools label the tenth lane as lane 0.
    pub lane10_is_zero: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            startlist_dir: ".".to_string(),
            num_lanes: 10,
            color_bg: "black".to_string(),
            color_fg: "white".to_string(),
            color_ehd: "white".to_string(),
            normal_font: "Helvetica".to_string(),
            font_scale: 0.67,
            fullscreen: false,
            lane10_is_zero: false,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. A missing file is not an error and
    /// yields the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| StartListError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StartListError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("startlist_dir", &self.startlist_dir)?;
        validation::validate_range("num_lanes", self.num_lanes, 1, 10)?;
        validation::validate_range("font_scale", self.font_scale, 0.05, 1.0)?;
        validation::validate_non_empty_string("normal_font", &self.normal_font)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.num_lanes, 10);
        assert_eq!(settings.startlist_dir, ".");
    }

    #[test]
    fn test_parse_full_settings() {
        let toml_content = r#"
startlist_dir = "/meets/regionals"
num_lanes = 8
color_bg = "navy"
color_fg = "yellow"
color_ehd = "yellow"
normal_font = "Arial"
font_scale = 0.5
fullscreen = true
lane10_is_zero = true
"#;
        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.startlist_dir, "/meets/regionals");
        assert_eq!(settings.num_lanes, 8);
        assert!(settings.fullscreen);
        assert!(settings.lane10_is_zero);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings = Settings::from_toml_str("num_lanes = 6\n").unwrap();
        assert_eq!(settings.num_lanes, 6);
        assert_eq!(settings.color_bg, "black");
        assert_eq!(settings.normal_font, "Helvetica");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = Settings::from_toml_str("num_lanes = \"lots\"");
        assert!(matches!(result, Err(StartListError::Config { .. })));
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let settings = Settings::from_toml_str("num_lanes = 12\n").unwrap();
        assert!(matches!(
            settings.validate(),
            Err(StartListError::InvalidSetting { ref field, .. }) if field == "num_lanes"
        ));

        let settings = Settings::from_toml_str("font_scale = 3.0\n").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "startlist_dir = \"/tmp/lists\"").unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.startlist_dir, "/tmp/lists");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::from_file("/no/such/settings.toml").unwrap();
        assert_eq!(settings.startlist_dir, ".");
    }
}
