//! Site configuration module.
//!
//! Handles loading and validating the `config.toml` at the content root.
//! Config files are sparse: stock defaults cover everything, user files
//! override only the values they care about, and unknown keys are rejected
//! to catch typos early.
//!
//! ```toml
//! [site]
//! title = "RAWK Tattoo"
//! base_url = "http://localhost:4321"
//!
//! [auth]
//! # client_id = "Iv1.example"   # usually supplied via GITHUB_CLIENT_ID
//! ```
//!
//! The OAuth client id deliberately has an environment-variable override
//! (`GITHUB_CLIENT_ID`): secrets belong in the deployment environment, not
//! in a content directory that gets committed. Resolution happens in
//! [`crate::auth`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub auth: AuthSection,
}

/// Public identity of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Studio name, used as the manifest's site title.
    pub title: String,
    /// Origin the OAuth callback is registered under, no trailing slash.
    /// Overridable at runtime via `PUBLIC_BASE_URL`.
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "RAWK Tattoo".to_string(),
            base_url: "http://localhost:4321".to_string(),
        }
    }
}

/// CMS backend OAuth settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthSection {
    /// GitHub OAuth app client id. The `GITHUB_CLIENT_ID` environment
    /// variable takes precedence when set.
    pub client_id: Option<String>,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns defaults when no file exists; rejects unknown keys and
/// validates the result otherwise.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Stencil Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Place this file at the content root: content/config.toml

[site]
# Studio name, used as the site title in the composed manifest.
title = "RAWK Tattoo"

# Origin the OAuth callback is registered under, no trailing slash.
# The PUBLIC_BASE_URL environment variable overrides this at runtime.
base_url = "http://localhost:4321"

# ---------------------------------------------------------------------------
# CMS backend OAuth
# ---------------------------------------------------------------------------
[auth]
# GitHub OAuth app client id for the CMS login flow.
# Prefer the GITHUB_CLIENT_ID environment variable over committing it here.
# client_id = "Iv1.example"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_validates() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.site.title, "RAWK Tattoo");
        assert!(config.auth.client_id.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[site]
title = "Needle & Thread"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Needle & Thread");
        // Default values preserved
        assert_eq!(config.site.base_url, "http://localhost:4321");
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = r##"
[site]
titel = "typo"
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn trailing_slash_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn bare_host_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.base_url, "http://localhost:4321");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
title = "Ink District"
base_url = "https://ink.example"

[auth]
client_id = "Iv1.abc123"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Ink District");
        assert_eq!(config.site.base_url, "https://ink.example");
        assert_eq!(config.auth.client_id.as_deref(), Some("Iv1.abc123"));
    }

    #[test]
    fn stock_config_parses_as_default() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.site.title, SiteConfig::default().site.title);
    }
}
