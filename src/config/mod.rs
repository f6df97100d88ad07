//! Configuration loading and types.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CacheConfig, Config, GraphQlConfig, LoggingConfig, WindowConfig};
