//! Span definitions per pipeline operation: poll, fetch, rebuild.

/// Span around one poller iteration.
#[macro_export]
macro_rules! poll_span {
    ($iteration:expr) => {
        ::tracing::info_span!($crate::observability::spans::names::POLL, iteration = $iteration)
    };
}

/// Span around one upstream fetch.
#[macro_export]
macro_rules! fetch_span {
    ($source:expr, $url:expr) => {
        ::tracing::debug_span!($crate::observability::spans::names::FETCH, source = %$source, url = %$url)
    };
}

/// Span around one snapshot rebuild.
#[macro_export]
macro_rules! rebuild_span {
    ($now:expr) => {
        ::tracing::info_span!($crate::observability::spans::names::REBUILD, now = $now)
    };
}

/// Span names, shared by the macros and by log filters.
pub mod names {
    pub const POLL: &str = "eta.poll";
    pub const FETCH: &str = "eta.fetch";
    pub const REBUILD: &str = "eta.rebuild";
}
