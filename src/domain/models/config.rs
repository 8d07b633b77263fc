use serde::{Deserialize, Serialize};

/// Main configuration structure for rfc-table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub repository and API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Documentation directory settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub repository and API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Repository owner (user or organisation)
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Base URL of the REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL used for links in the rendered table
    #[serde(default = "default_web_base")]
    pub web_base: String,

    /// Search results requested per page (1-100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the access token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_owner() -> String {
    "aws".to_string()
}

fn default_repo() -> String {
    "aws-cdk-rfcs".to_string()
}

/// Base URL for the GitHub REST API v3.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

fn default_web_base() -> String {
    "https://github.com".to_string()
}

const fn default_per_page() -> u32 {
    100
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            api_base: default_api_base(),
            web_base: default_web_base(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
            token_env: default_token_env(),
        }
    }
}

impl GitHubConfig {
    /// `owner/repo` slug.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Documentation directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocsConfig {
    /// Directory holding the numbered documents, relative to the
    /// repository root. It is both listed locally and used in doc links.
    #[serde(default = "default_docs_dir")]
    pub dir: String,

    /// Branch that doc links point at
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_docs_dir() -> String {
    "text".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            branch: default_branch(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
