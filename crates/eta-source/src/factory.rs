//! Source selection by configuration.

use std::sync::Arc;

use eta_core::config::{SourceConfig, SourceKind};
use eta_core::errors::ConfigError;
use eta_core::traits::SampleSource;

use crate::api::ApiSource;
use crate::scrape::ScrapeSource;

/// Build the sample source selected by `config.kind`.
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn SampleSource>, ConfigError> {
    let source: Arc<dyn SampleSource> = match config.kind {
        SourceKind::Scrape => Arc::new(ScrapeSource::new(config)?),
        SourceKind::Api => Arc::new(ApiSource::new(config)?),
    };
    tracing::info!(
        source = source.name(),
        url = config.active_url(),
        timeout_secs = config.timeout_secs,
        "sample source configured"
    );
    Ok(source)
}
