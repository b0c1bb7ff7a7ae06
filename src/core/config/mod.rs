// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod duration;
pub mod flat_config;
pub mod window_config;

pub use duration::parse_duration;
pub use flat_config::{FlatConfig, PropertySource};
pub use window_config::{SlidingWindowConfig, DEFAULT_CHANNEL_CAPACITY};
