// SPDX-License-Identifier: MIT OR Apache-2.0

use env_logger::Env;

/// Install `env_logger` as the `log` backend
///
/// Honours `RUST_LOG` and falls back to `default_filter` (e.g. `"info"`).
/// Calling it more than once is harmless; only the first call installs a logger.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}

/// Logger for tests: output is captured by the test harness
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_logging("warn");
        log::debug!("[logging] still usable after repeated initialisation");
    }
}
