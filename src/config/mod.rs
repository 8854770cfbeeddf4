// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded once at startup
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[generation]` - Simulated generation timing and gating
//! - `[mockup]` - Cart acknowledgment timing and garment images
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `PIXELWEAVER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pixelweaver::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("generation takes {:?}", config.generation_duration());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Simulated generation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// Length of the progress animation in milliseconds.
    #[serde(default = "default_generation_duration_ms")]
    pub duration_ms: Option<u64>,

    /// Whether a result image must be uploaded before generation can start.
    #[serde(default = "default_require_result_upload")]
    pub require_result_upload: Option<bool>,

    /// Template name shown in the generating caption.
    #[serde(default)]
    pub template_name: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_generation_duration_ms(),
            require_result_upload: default_require_result_upload(),
            template_name: None,
        }
    }
}

/// Mockup screen settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MockupConfig {
    /// How long the add-to-cart acknowledgment stays visible, in milliseconds.
    #[serde(default = "default_cart_ack_ms")]
    pub cart_ack_ms: Option<u64>,

    /// Optional image used for the black garment instead of the drawn silhouette.
    #[serde(default)]
    pub black_garment: Option<PathBuf>,

    /// Optional image used for the white garment instead of the drawn silhouette.
    #[serde(default)]
    pub white_garment: Option<PathBuf>,
}

impl Default for MockupConfig {
    fn default() -> Self {
        Self {
            cart_ack_ms: default_cart_ack_ms(),
            black_garment: None,
            white_garment: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Simulated generation settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Mockup screen settings.
    #[serde(default)]
    pub mockup: MockupConfig,
}

impl Config {
    /// Generation duration, clamped to the supported range.
    #[must_use]
    pub fn generation_duration(&self) -> Duration {
        let ms = self
            .generation
            .duration_ms
            .unwrap_or(DEFAULT_GENERATION_DURATION_MS)
            .clamp(MIN_GENERATION_DURATION_MS, MAX_GENERATION_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Cart acknowledgment duration, clamped to the supported range.
    #[must_use]
    pub fn cart_ack_duration(&self) -> Duration {
        let ms = self
            .mockup
            .cart_ack_ms
            .unwrap_or(DEFAULT_CART_ACK_MS)
            .clamp(MIN_CART_ACK_MS, MAX_CART_ACK_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn require_result_upload(&self) -> bool {
        self.generation.require_result_upload.unwrap_or(true)
    }

    #[must_use]
    pub fn template_name(&self) -> String {
        self.generation
            .template_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_generation_duration_ms() -> Option<u64> {
    Some(DEFAULT_GENERATION_DURATION_MS)
}

fn default_require_result_upload() -> Option<bool> {
    Some(true)
}

fn default_cart_ack_ms() -> Option<u64> {
    Some(DEFAULT_CART_ACK_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    log::warn!("failed to load {}: {error}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn full_file_populates_every_section() {
        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            generation: GenerationConfig {
                duration_ms: Some(800),
                require_result_upload: Some(false),
                template_name: Some("Neonwave".to_string()),
            },
            mockup: MockupConfig {
                cart_ack_ms: Some(1000),
                black_garment: Some(PathBuf::from("/opt/shirts/black.png")),
                white_garment: None,
            },
        };
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[general]
language = "fr"
theme_mode = "light"

[generation]
duration_ms = 800
require_result_upload = false
template_name = "Neonwave"

[mockup]
cart_ack_ms = 1000
black_garment = "/opt/shirts/black.png"
"#,
        )
        .expect("write");

        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded, expected);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.generation, GenerationConfig::default());
        assert_eq!(loaded.mockup, MockupConfig::default());
        assert_eq!(
            loaded.generation_duration(),
            Duration::from_millis(DEFAULT_GENERATION_DURATION_MS)
        );
    }

    #[test]
    fn durations_are_clamped() {
        let mut config = Config::default();
        config.generation.duration_ms = Some(1);
        config.mockup.cart_ack_ms = Some(u64::MAX);

        assert_eq!(
            config.generation_duration(),
            Duration::from_millis(MIN_GENERATION_DURATION_MS)
        );
        assert_eq!(
            config.cart_ack_duration(),
            Duration::from_millis(MAX_CART_ACK_MS)
        );
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.generation_duration(), Duration::from_millis(1500));
        assert_eq!(config.cart_ack_duration(), Duration::from_millis(2000));
        assert!(config.require_result_upload());
        assert_eq!(config.template_name(), "Cyberglyph");
    }

    #[test]
    fn invalid_theme_mode_is_a_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"DARK\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_returns_warning_for_broken_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "this is = = not toml").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
