// SPDX-License-Identifier: MIT OR Apache-2.0

//! Window Type Constants

/// Sliding window: overlapping time windows emitted every slide interval
pub const WINDOW_TYPE_SLIDING: &str = "sliding";

/// Check if a window type is supported
///
/// Matching is case-insensitive so configuration files may spell it `Sliding`.
pub fn is_supported_window_type(window_type: &str) -> bool {
    window_type.eq_ignore_ascii_case(WINDOW_TYPE_SLIDING)
}
