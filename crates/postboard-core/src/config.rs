//! Configuration management for Postboard.
//!
//! Loads configuration from ${POSTBOARD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "POSTBOARD_BASE_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for Postboard configuration and data files.
    //!
    //! POSTBOARD_HOME resolution order:
    //! 1. POSTBOARD_HOME environment variable (if set)
    //! 2. ~/.config/postboard (default)

    use std::path::PathBuf;

    /// Returns the Postboard home directory.
    ///
    /// Checks POSTBOARD_HOME first, falls back to ~/.config/postboard
    /// (or `./.postboard` when no home directory can be determined).
    pub fn postboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("POSTBOARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".postboard"),
            |h| h.join(".config").join("postboard"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        postboard_home().join("config.toml")
    }

    /// Returns the path to the persisted session token.
    pub fn session_path() -> PathBuf {
        postboard_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        postboard_home().join("logs")
    }
}

/// Filler profile fields sent with a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Domain used to build `<login>@<domain>` emails.
    pub email_domain: String,
    pub phone: String,
    pub role: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            email_domain: "example.com".to_string(),
            phone: "0000000000".to_string(),
            role: "user".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive (e.g. "info", "postboard_core=debug").
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the posts service
    pub base_url: String,

    /// Request timeout in seconds (0 disables)
    pub request_timeout_secs: u32,

    /// Registration profile defaults
    pub register: RegisterConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    /// Default is disabled
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 0;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the base URL with precedence: env > config > default.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn resolve_base_url(&self) -> Result<String> {
        let env_url = std::env::var(BASE_URL_ENV).ok();
        resolve_base_url(env_url.as_deref(), &self.base_url)
    }

    /// Returns the request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Saves only the base_url field to the config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or written.
    pub fn save_base_url(url: &str) -> Result<()> {
        Self::save_base_url_to(&paths::config_path(), url)
    }

    /// Saves only the base_url field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let url = url.trim();
        validate_url(url)?;

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["base_url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let config = Config::default();
        let generated_toml =
            toml::to_string(&config).context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;

        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            register: RegisterConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Picks the first non-blank candidate (env, then config), falling back to
/// the default URL.
fn resolve_base_url(env_url: Option<&str>, config_url: &str) -> Result<String> {
    let chosen = [env_url, Some(config_url)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(Config::DEFAULT_BASE_URL);

    validate_url(chosen)?;
    Ok(chosen.trim_end_matches('/').to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid base URL: {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 0);
        assert_eq!(config.register, RegisterConfig::default());
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "base_url = \"https://posts.example.com\"\n[register]\nrole = \"viewer\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "https://posts.example.com");
        assert_eq!(config.register.role, "viewer");
        assert_eq!(config.register.phone, "0000000000");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("http://localhost:8000"));
        assert!(contents.contains("# request_timeout_secs = 0"));

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), None);

        let config = Config {
            request_timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_resolve_base_url_prefers_env() {
        let url = resolve_base_url(Some("http://127.0.0.1:9000/"), "https://cfg.example.com").unwrap();
        assert_eq!(url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_resolve_base_url_blank_values_fall_through() {
        let url = resolve_base_url(Some("   "), "https://cfg.example.com").unwrap();
        assert_eq!(url, "https://cfg.example.com");

        let url = resolve_base_url(None, "  ").unwrap();
        assert_eq!(url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        let err = resolve_base_url(None, "not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    }

    #[test]
    fn test_save_base_url_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_base_url_to(&config_path, "https://posts.example.com").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "https://posts.example.com");

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Postboard Configuration"));
        assert!(contents.contains("[register]"));
    }

    #[test]
    fn test_save_base_url_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "request_timeout_secs = 30\n[register]\nrole = \"admin\"\n").unwrap();

        Config::save_base_url_to(&config_path, "https://posts.example.com").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "https://posts.example.com");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.register.role, "admin");
    }

    #[test]
    fn test_save_base_url_rejects_invalid_url() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        assert!(Config::save_base_url_to(&config_path, "::nope::").is_err());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_generate_keeps_comments_and_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("# Postboard Configuration"));

        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed.base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(parsed.request_timeout_secs, 0);
    }
}
