//! # eta-poller
//!
//! The single writer of the history log. Every `interval` it fetches one
//! observation and appends it if its timestamp is newer than the last one
//! it appended (the cursor). Fetch failures are logged and skipped; an
//! append failure stops the loop.

pub mod poller;

pub use poller::{PollOutcome, Poller, PollerStats};
