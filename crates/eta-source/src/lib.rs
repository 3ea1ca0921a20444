//! # eta-source
//!
//! Sample source adapters. Each produces one `Observation` per `fetch()`
//! from the upstream progress page:
//!
//! | Strategy | Input | Percentage | Timestamp |
//! |----------|-------|------------|-----------|
//! | `ScrapeSource` | HTML page | CSS-selected text, `%` stripped | CSS-selected text, prefix stripped, `strftime` format |
//! | `ApiSource` | JSON document | JSON Pointer, number or numeric string | JSON Pointer, RFC 3339 |
//!
//! Parsing is split from transport so both can be tested without a network.
//! No retries happen here; the poller owns cadence.

pub mod api;
pub mod factory;
pub mod http;
pub mod parsing;
pub mod scrape;

pub use api::{ApiRules, ApiSource};
pub use factory::build_source;
pub use http::HttpFetcher;
pub use scrape::{ScrapeRules, ScrapeSource};
