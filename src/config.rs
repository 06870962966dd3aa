//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml`
//! 3. Explicit config file: `--config <FILE>`
//! 4. Environment variables: `TAGTREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::application::services::DEFAULT_SENTINEL;
use crate::domain::DEFAULT_TEXT_LEN;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "TAGTREE";

/// Unified configuration for tagtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Length of random text values
    pub text_len: usize,
    /// Seed for reproducible values (default: entropy)
    pub seed: Option<u64>,
    /// Tag that ends the interactive search
    pub sentinel: char,
    /// Reject duplicate tags while building
    pub unique_tags: bool,
    /// Print each node as it is constructed
    pub echo_construction: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text_len: DEFAULT_TEXT_LEN,
            seed: None,
            sentinel: DEFAULT_SENTINEL,
            unique_tags: false,
            echo_construction: true,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub text_len: Option<usize>,
    pub seed: Option<u64>,
    pub sentinel: Option<char>,
    pub unique_tags: Option<bool>,
    pub echo_construction: Option<bool>,
}

/// Get the XDG config directory for tagtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tagtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tagtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    let raw: RawSettings = toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })?;
    // Whitespace is never read as a tag.
    if let Some(c) = raw.sentinel.filter(|c| c.is_whitespace()) {
        return Err(ApplicationError::Config {
            message: format!("{}: sentinel must not be whitespace: {:?}", path.display(), c),
        });
    }
    Ok(raw)
}

impl Settings {
    /// Merge overlay config onto self: overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            text_len: overlay.text_len.unwrap_or(self.text_len),
            seed: overlay.seed.or(self.seed),
            sentinel: overlay.sentinel.unwrap_or(self.sentinel),
            unique_tags: overlay.unique_tags.unwrap_or(self.unique_tags),
            echo_construction: overlay.echo_construction.unwrap_or(self.echo_construction),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("load: config file {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = current.apply_env_overrides(Environment::with_prefix(ENV_PREFIX))?;

        Ok(current)
    }

    /// Apply `TAGTREE_*` environment variables as explicit overrides.
    pub fn apply_env_overrides(mut self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_int("text_len"))? {
            self.text_len = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("text_len must not be negative: {}", val),
            })?;
        }
        if let Some(val) = optional(config.get_int("seed"))? {
            self.seed = Some(u64::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("seed must not be negative: {}", val),
            })?);
        }
        if let Some(val) = optional(config.get_string("sentinel"))? {
            self.sentinel = parse_tag(&val).ok_or_else(|| ApplicationError::Config {
                message: format!("sentinel must be a single character: {:?}", val),
            })?;
        }
        if let Some(val) = optional(config.get_bool("unique_tags"))? {
            self.unique_tags = val;
        }
        if let Some(val) = optional(config.get_bool("echo_construction"))? {
            self.echo_construction = val;
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# tagtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/tagtree/tagtree.toml
#   File:   --config <FILE>
#   Env:    TAGTREE_* environment variables (e.g. TAGTREE_SEED=42)

# Length of random text values
# text_len = 10

# Seed for reproducible node values (unset: random each run)
# seed = 42

# Tag that ends the interactive search
# sentinel = "0"

# Reject duplicate tags while building the tree
# unique_tags = false

# Print each node as it is constructed
# echo_construction = true
"#
        .to_string()
    }
}

/// Single non-whitespace character, or None.
pub fn parse_tag(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Missing key as `None`; any other lookup failure is a config error.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn given_defaults_then_match_console_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.text_len, 10);
        assert_eq!(settings.sentinel, '0');
        assert!(settings.seed.is_none());
        assert!(!settings.unique_tags);
        assert!(settings.echo_construction);
    }

    #[test]
    fn given_overlay_when_merging_then_only_specified_fields_change() {
        let overlay = RawSettings {
            seed: Some(7),
            unique_tags: Some(true),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.seed, Some(7));
        assert!(merged.unique_tags);
        assert_eq!(merged.text_len, 10);
        assert_eq!(merged.sentinel, '0');
    }

    #[test]
    fn given_env_vars_when_applying_then_override() {
        let settings = Settings::default()
            .apply_env_overrides(env(&[
                ("TAGTREE_TEXT_LEN", "4"),
                ("TAGTREE_SEED", "123"),
                ("TAGTREE_SENTINEL", "q"),
                ("TAGTREE_UNIQUE_TAGS", "true"),
            ]))
            .unwrap();
        assert_eq!(settings.text_len, 4);
        assert_eq!(settings.seed, Some(123));
        assert_eq!(settings.sentinel, 'q');
        assert!(settings.unique_tags);
        assert!(settings.echo_construction);
    }

    #[test]
    fn given_multi_char_sentinel_in_env_when_applying_then_config_error() {
        let result = Settings::default().apply_env_overrides(env(&[("TAGTREE_SENTINEL", "xy")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_negative_text_len_in_env_when_applying_then_config_error() {
        let result = Settings::default().apply_env_overrides(env(&[("TAGTREE_TEXT_LEN", "-1")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_non_numeric_text_len_in_env_when_applying_then_config_error() {
        let result = Settings::default().apply_env_overrides(env(&[("TAGTREE_TEXT_LEN", "abc")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_non_boolean_flag_in_env_when_applying_then_config_error() {
        let result =
            Settings::default().apply_env_overrides(env(&[("TAGTREE_UNIQUE_TAGS", "maybe")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_no_env_vars_when_applying_then_unchanged() {
        let settings = Settings::default().apply_env_overrides(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_raw() {
        let settings = Settings {
            seed: Some(9),
            sentinel: 'x',
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }

    #[test]
    fn given_template_when_parsing_then_all_commented_out() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.text_len.is_none());
        assert!(raw.sentinel.is_none());
    }

    #[test]
    fn given_inputs_when_parsing_tag_then_single_char_only() {
        assert_eq!(parse_tag("A"), Some('A'));
        assert_eq!(parse_tag(" 0 "), Some('0'));
        assert_eq!(parse_tag(""), None);
        assert_eq!(parse_tag("AB"), None);
    }
}
