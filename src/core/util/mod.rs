// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod logging;
pub mod time;

pub use logging::{init_logging, init_test_logging};
pub use time::{now_nanos, Timestamp};
