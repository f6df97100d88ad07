use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub graphql: GraphQlConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST endpoint serving the paginated user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g., "https://dummyapi.io/data/v1").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Value sent in the `app-id` header, when the endpoint requires one.
    #[serde(default)]
    pub app_id: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Page size of the card strip (default: 7).
    #[serde(default = "default_cards_limit")]
    pub cards_limit: u32,
    /// Page size of the table (default: 5).
    #[serde(default = "default_table_limit")]
    pub table_limit: u32,
}

/// GraphQL endpoint serving the country list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlConfig {
    #[serde(default = "default_graphql_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Local key/value storage used to cache the country list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Store file. Defaults to `<cache dir>/userdeck/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Sliding window over the country list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of rendered items (default: 60).
    #[serde(default = "default_window_range")]
    pub range: usize,
    /// Items added or dropped per shift (default: 15).
    #[serde(default = "default_window_step")]
    pub step: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/userdeck/userdeck.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "https://dummyapi.io/data/v1".to_string()
}

fn default_graphql_endpoint() -> String {
    "https://countries.trevorblades.com/".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_cards_limit() -> u32 {
    7
}

fn default_table_limit() -> u32 {
    5
}

fn default_window_range() -> usize {
    60
}

fn default_window_step() -> usize {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            app_id: None,
            timeout_seconds: default_timeout_seconds(),
            cards_limit: default_cards_limit(),
            table_limit: default_table_limit(),
        }
    }
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_graphql_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            range: default_window_range(),
            step: default_window_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl CacheConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| data_dir().join("storage.json"))
    }
}

impl LoggingConfig {
    pub fn resolved_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join("userdeck.log"))
    }
}

fn data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("userdeck")
}
