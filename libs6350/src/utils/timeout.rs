//! Read timeouts for reader round trips.
//!
//! An inventory round gives the reader time to power the field, run 16 slots
//! and collect replies, so it waits much longer than a simple query.

use std::time::Duration;

/// Default read timeout for an inventory round.
pub const DEFAULT_INVENTORY_TIMEOUT_MS: u64 = 5000;

/// Default read timeout for single-shot reader queries.
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_inventory_timeout() -> Duration {
    ms(DEFAULT_INVENTORY_TIMEOUT_MS)
}
