//! Configuration system for eta.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod cache_config;
pub mod defaults;
pub mod eta_config;
pub mod observability_config;
pub mod poller_config;
pub mod prediction_config;
pub mod server_config;
pub mod source_config;
pub mod storage_config;

pub use cache_config::CacheConfig;
pub use eta_config::{CliOverrides, EtaConfig};
pub use observability_config::ObservabilityConfig;
pub use poller_config::PollerConfig;
pub use prediction_config::PredictionConfig;
pub use server_config::ServerConfig;
pub use source_config::{ApiSourceConfig, ScrapeSourceConfig, SourceConfig, SourceKind};
pub use storage_config::StorageConfig;
