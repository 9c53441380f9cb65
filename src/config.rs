//! Configuration management for theme tooling
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (theme-tools.toml)
//! - Environment variables (THEME_TOOLS__*)
//!
//! ## Example config file (theme-tools.toml):
//! ```toml
//! [archive]
//! source_dir = "theme"
//! output = "theme_fixed.zip"
//! compression_level = 6
//!
//! [validate]
//! file = "sections/mobile-bar.liquid"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::archive::ArchiveOptions;
use crate::error::{Result, ThemeError};

/// Default config file name, written by `theme-config init`
pub const CONFIG_FILE: &str = "theme-tools.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Archive settings
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Archive configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Theme directory to pack
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Zip file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// 0 stores files uncompressed, 1-9 picks the deflate level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<i64>,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Template checked when no path is given on the command line
    #[serde(default = "default_template")]
    pub file: PathBuf,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("theme")
}

fn default_output() -> PathBuf {
    PathBuf::from("theme_fixed.zip")
}

fn default_template() -> PathBuf {
    PathBuf::from("sections/mobile-bar.liquid")
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output: default_output(),
            compression_level: None,
        }
    }
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            file: default_template(),
        }
    }
}

impl ArchiveConfig {
    /// Archive options, rejecting a compression level outside 0-9
    pub fn options(&self) -> Result<ArchiveOptions> {
        let options = ArchiveOptions {
            compression_level: self.compression_level,
        };
        options.validate()?;
        Ok(options)
    }
}

impl ToolsConfig {
    /// Load configuration, layering `config_path` over the default locations
    pub fn load_from(config_path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "theme-tools.toml",
            ".theme-tools.toml",
            "config/theme-tools.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "theme-tools") {
            let xdg_config = config_dir.config_dir().join(CONFIG_FILE);
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // THEME_TOOLS__ARCHIVE__SOURCE_DIR=...
        builder = builder.add_source(
            Environment::with_prefix("THEME_TOOLS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a file, refusing to replace one unless `force`
    pub fn save(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(ThemeError::ConfigExists(path.display().to_string()));
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolsConfig::default();
        assert_eq!(config.archive.source_dir, PathBuf::from("theme"));
        assert_eq!(config.archive.output, PathBuf::from("theme_fixed.zip"));
        assert_eq!(config.archive.options().unwrap(), ArchiveOptions::default());
    }

    #[test]
    fn test_serialize_config() {
        let toml_str = ToolsConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[archive]"));
        assert!(toml_str.contains("[validate]"));
        assert!(!toml_str.contains("compression_level"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[archive]\nsource_dir = \"dawn\"\ncompression_level = 9\n").unwrap();

        let config = ToolsConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.archive.source_dir, PathBuf::from("dawn"));
        assert_eq!(config.archive.compression_level, Some(9));
        assert_eq!(config.validate.file, PathBuf::from("sections/mobile-bar.liquid"));
    }

    #[test]
    fn test_out_of_range_level_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[archive]\ncompression_level = 42\n").unwrap();

        let config = ToolsConfig::load_from(Some(&path)).unwrap();
        assert!(matches!(
            config.archive.options(),
            Err(ThemeError::InvalidCompressionLevel(42))
        ));
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = ToolsConfig::default();

        config.save(&path, false).unwrap();
        assert!(matches!(config.save(&path, false), Err(ThemeError::ConfigExists(_))));
        config.save(&path, true).unwrap();
    }
}
