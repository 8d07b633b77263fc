use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "rfc-table.yaml";

/// Prefix for environment overrides, e.g. `RFC_TABLE_GITHUB__OWNER`.
pub const ENV_PREFIX: &str = "RFC_TABLE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid repository '{0}'. Expected OWNER/NAME")]
    InvalidRepository(String),

    #[error("Invalid per_page: {0}. Must be between 1 and 100")]
    InvalidPerPage(u32),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Docs directory cannot be empty")]
    EmptyDocsDir,

    #[error("Token environment variable name cannot be empty")]
    EmptyTokenEnv,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `OWNER/NAME`
    pub repo: Option<String>,
    pub docs_dir: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(slug) = &self.repo {
            let (owner, repo) = parse_repo_slug(slug)?;
            config.github.owner = owner;
            config.github.repo = repo;
        }
        if let Some(dir) = &self.docs_dir {
            config.docs.dir.clone_from(dir);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        Ok(())
    }
}

/// Split `owner/name` into its parts.
pub fn parse_repo_slug(slug: &str) -> Result<(String, String), ConfigError> {
    match slug.trim().split_once('/') {
        Some((owner, repo))
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
        {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ConfigError::InvalidRepository(slug.to_string())),
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `rfc-table.yaml` in the working directory, or `path` when given
    /// 3. Environment variables (`RFC_TABLE_*` prefix, `__` nests)
    /// 4. Command line overrides
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if let Some(explicit) = path {
            if !explicit.exists() {
                anyhow::bail!("Config file not found: {}", explicit.display());
            }
        }

        let mut config: Config = Self::figment(file)
            .extract()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        overrides.apply(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// The figment for a config file, without CLI overrides.
    pub fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let github = &config.github;
        if github.owner.is_empty() || github.repo.is_empty() {
            return Err(ConfigError::InvalidRepository(github.slug()));
        }

        if github.per_page == 0 || github.per_page > 100 {
            return Err(ConfigError::InvalidPerPage(github.per_page));
        }

        if github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(github.timeout_secs));
        }

        if github.token_env.is_empty() {
            return Err(ConfigError::EmptyTokenEnv);
        }

        if config.docs.dir.is_empty() {
            return Err(ConfigError::EmptyDocsDir);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
