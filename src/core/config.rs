//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.citadel/config.toml`. If missing on first run, a
//! commented-out default is generated so visitors can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CitadelConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub admin_token: Option<String>,
    pub offline: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IntroConfig {
    pub skip: Option<bool>,
    pub typing_min_ms: Option<u64>,
    pub typing_max_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerminalConfig {
    pub suggestion_interval_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SUGGESTION_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_TYPING_MIN_MS: u64 = 50;
pub const DEFAULT_TYPING_MAX_MS: u64 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub admin_token: Option<String>,
    pub skip_intro: bool,
    pub offline: bool,
    pub suggestion_interval: Duration,
    /// Per-character typing delay range in milliseconds, `min..max`.
    pub typing_delay_ms: (u64, u64),
}

/// Overrides taken from command-line flags. `None`/`false` = not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub skip_intro: bool,
    pub offline: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.citadel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".citadel").join("config.toml"))
}

/// Load config from `~/.citadel/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CitadelConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CitadelConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(CitadelConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CitadelConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CitadelConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CitadelConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Citadel Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:5000"   # Or set CITADEL_API_URL
# admin_token = "..."                  # Or set CITADEL_ADMIN_TOKEN / ADMIN_TOKEN
# offline = false                      # true = never call the API, use built-in content

# [intro]
# skip = false
# typing_min_ms = 50
# typing_max_ms = 100

# [terminal]
# suggestion_interval_secs = 5
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CitadelConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &CitadelConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli
        .api_url
        .clone()
        .or_else(|| env("CITADEL_API_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    // Admin token: env (either name) → config
    let admin_token = env("CITADEL_ADMIN_TOKEN")
        .or_else(|| env("ADMIN_TOKEN"))
        .or_else(|| config.api.admin_token.clone())
        .filter(|t| !t.trim().is_empty());

    let min = config.intro.typing_min_ms.unwrap_or(DEFAULT_TYPING_MIN_MS);
    let max = config
        .intro
        .typing_max_ms
        .unwrap_or(DEFAULT_TYPING_MAX_MS)
        .max(min);

    let interval_secs = config
        .terminal
        .suggestion_interval_secs
        .unwrap_or(DEFAULT_SUGGESTION_INTERVAL_SECS);

    ResolvedConfig {
        api_base_url,
        admin_token,
        skip_intro: cli.skip_intro || config.intro.skip.unwrap_or(false),
        offline: cli.offline || config.api.offline.unwrap_or(false),
        suggestion_interval: Duration::from_secs(interval_secs),
        typing_delay_ms: (min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&CitadelConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.admin_token, None);
        assert!(!resolved.skip_intro);
        assert!(!resolved.offline);
        assert_eq!(resolved.suggestion_interval, Duration::from_secs(5));
        assert_eq!(resolved.typing_delay_ms, (50, 100));
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = CitadelConfig {
            api: ApiConfig {
                base_url: Some("https://example.com/".to_string()),
                admin_token: Some("secret".to_string()),
                offline: Some(true),
            },
            intro: IntroConfig {
                skip: Some(true),
                typing_min_ms: Some(10),
                typing_max_ms: Some(20),
            },
            terminal: TerminalConfig {
                suggestion_interval_secs: Some(2),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, "https://example.com");
        assert_eq!(resolved.admin_token.as_deref(), Some("secret"));
        assert!(resolved.skip_intro);
        assert!(resolved.offline);
        assert_eq!(resolved.suggestion_interval, Duration::from_secs(2));
        assert_eq!(resolved.typing_delay_ms, (10, 20));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = CitadelConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                admin_token: Some("config-token".to_string()),
                offline: None,
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "CITADEL_API_URL" => Some("http://from-env".to_string()),
            "ADMIN_TOKEN" => Some("env-token".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.api_base_url, "http://from-env");
        assert_eq!(resolved.admin_token.as_deref(), Some("env-token"));

        let cli = CliOverrides {
            api_url: Some("http://from-cli".to_string()),
            skip_intro: true,
            offline: true,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.api_base_url, "http://from-cli");
        assert!(resolved.skip_intro);
        assert!(resolved.offline);
    }

    #[test]
    fn test_blank_token_is_treated_as_missing() {
        let env = |key: &str| (key == "CITADEL_ADMIN_TOKEN").then(|| "  ".to_string());
        let resolved = resolve_with_env(&CitadelConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.admin_token, None);
    }

    #[test]
    fn test_inverted_typing_range_is_clamped() {
        let config = CitadelConfig {
            intro: IntroConfig {
                typing_min_ms: Some(80),
                typing_max_ms: Some(30),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.typing_delay_ms, (80, 80));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[api]
base_url = "https://tarush.dev"
"#;
        let config: CitadelConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://tarush.dev"));
        assert!(config.api.admin_token.is_none());
        assert!(config.intro.skip.is_none());
        assert!(config.terminal.suggestion_interval_secs.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("citadel-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("citadel-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Citadel Configuration"));
        // Everything is commented out, so it parses to defaults.
        let reparsed: CitadelConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.api.base_url.is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
