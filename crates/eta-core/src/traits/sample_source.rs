use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::models::Observation;

/// Produces one observation from a remote source.
///
/// Implementations do not retry; retry cadence belongs to the poller.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Short strategy name for logs (e.g. "scrape", "api").
    fn name(&self) -> &'static str;

    /// Fetch the current (timestamp, percentage) pair.
    async fn fetch(&self) -> Result<Observation, FetchError>;
}

#[async_trait]
impl<T: SampleSource + ?Sized> SampleSource for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn fetch(&self) -> Result<Observation, FetchError> {
        (**self).fetch().await
    }
}

#[async_trait]
impl<T: SampleSource + ?Sized> SampleSource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn fetch(&self) -> Result<Observation, FetchError> {
        (**self).fetch().await
    }
}
