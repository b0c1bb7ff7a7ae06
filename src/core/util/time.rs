// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nanosecond clock used for processing-time stamps and tick times.
//!
//! Readings are Unix-epoch nanoseconds, but they advance with tokio's monotonic
//! [`Instant`] rather than the system clock, so they never go backwards and they
//! follow the paused clock in `tokio::time::pause()` tests.

use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use tokio::time::Instant;

/// Nanoseconds since the Unix epoch
pub type Timestamp = i64;

/// Wall-clock reading paired with the monotonic instant it was taken at
static CLOCK_ANCHOR: Lazy<(Timestamp, Instant)> = Lazy::new(|| {
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| Timestamp::try_from(d.as_nanos()).unwrap_or(Timestamp::MAX))
        .unwrap_or(0);
    (wall, Instant::now())
});

/// Convert a monotonic instant to a timestamp on the anchored clock
pub fn nanos_at(instant: Instant) -> Timestamp {
    let (wall, base) = *CLOCK_ANCHOR;
    if instant >= base {
        wall.saturating_add(saturating_nanos(instant - base))
    } else {
        wall.saturating_sub(saturating_nanos(base - instant))
    }
}

/// Current timestamp in nanoseconds
pub fn now_nanos() -> Timestamp {
    nanos_at(Instant::now())
}

fn saturating_nanos(elapsed: std::time::Duration) -> Timestamp {
    Timestamp::try_from(elapsed.as_nanos()).unwrap_or(Timestamp::MAX)
}
