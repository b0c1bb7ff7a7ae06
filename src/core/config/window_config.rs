// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sliding Window Configuration
//!
//! Validated, immutable parameters for a sliding window.
//!
//! ## Properties
//! - `window.type`: optional, must be `sliding` when present
//! - `window.size` (required): window length, e.g. `50ms`
//! - `window.slide` (required): emission interval, must not exceed the size
//! - `window.channel-capacity`: buffer of the channels created by
//!   [`SlidingWindow::spawn`](crate::core::query::processor::stream::window::SlidingWindow::spawn), default 64
//!
//! ```toml
//! [window]
//! type = "sliding"
//! size = "50ms"
//! slide = "20ms"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use super::duration::parse_duration;
use super::flat_config::{FlatConfig, PropertySource};
use crate::core::error::{FlowError, FlowResult};
use crate::core::query::processor::stream::window::types::{
    is_supported_window_type, WINDOW_TYPE_SLIDING,
};
use crate::core::util::time::Timestamp;

pub const KEY_WINDOW_TYPE: &str = "window.type";
pub const KEY_WINDOW_SIZE: &str = "window.size";
pub const KEY_WINDOW_SLIDE: &str = "window.slide";
pub const KEY_CHANNEL_CAPACITY: &str = "window.channel-capacity";

pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowConfig {
    size: Duration,
    slide: Duration,
    size_nanos: Timestamp,
    channel_capacity: usize,
}

impl SlidingWindowConfig {
    /// Validate window parameters
    ///
    /// # Errors
    /// `FlowError::Configuration` when `size` or `slide` is zero, when `slide`
    /// exceeds `size` (windows would not overlap and elements could be skipped),
    /// or when `size` does not fit in an `i64` nanosecond count.
    pub fn new(size: Duration, slide: Duration) -> FlowResult<Self> {
        if size.is_zero() {
            return Err(FlowError::configuration_with_key(
                "window size must be greater than zero",
                KEY_WINDOW_SIZE,
            ));
        }

        if slide.is_zero() {
            return Err(FlowError::configuration_with_key(
                "slide interval must be greater than zero",
                KEY_WINDOW_SLIDE,
            ));
        }

        if slide > size {
            return Err(FlowError::configuration_with_key(
                format!(
                    "slide interval ({:?}) must not exceed window size ({:?})",
                    slide, size
                ),
                KEY_WINDOW_SLIDE,
            ));
        }

        let size_nanos = Timestamp::try_from(size.as_nanos()).map_err(|_| {
            FlowError::configuration_with_key(
                format!("window size ({:?}) is too large", size),
                KEY_WINDOW_SIZE,
            )
        })?;

        Ok(Self {
            size,
            slide,
            size_nanos,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        })
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> FlowResult<Self> {
        if capacity == 0 {
            return Err(FlowError::configuration_with_key(
                "channel capacity must be greater than zero",
                KEY_CHANNEL_CAPACITY,
            ));
        }
        self.channel_capacity = capacity;
        Ok(self)
    }

    #[inline]
    pub fn size(&self) -> Duration {
        self.size
    }

    #[inline]
    pub fn slide(&self) -> Duration {
        self.slide
    }

    /// Window size in nanoseconds, the unit timestamps are expressed in
    #[inline]
    pub fn size_nanos(&self) -> Timestamp {
        self.size_nanos
    }

    #[inline]
    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Built-in values, the lowest layer under files and properties
    pub fn defaults() -> FlatConfig {
        let mut defaults = FlatConfig::new();
        defaults.set(KEY_WINDOW_TYPE, WINDOW_TYPE_SLIDING, PropertySource::RustDefault);
        defaults.set(
            KEY_CHANNEL_CAPACITY,
            DEFAULT_CHANNEL_CAPACITY.to_string(),
            PropertySource::RustDefault,
        );
        defaults
    }

    /// Build a typed window configuration from a flat configuration
    ///
    /// Keys missing from `config` fall back to [`defaults`](Self::defaults).
    pub fn from_flat_config(config: &FlatConfig) -> FlowResult<Self> {
        let mut layered = Self::defaults();
        layered.merge(config);
        let config = &layered;

        if let Some(window_type) = config.get(KEY_WINDOW_TYPE) {
            if !is_supported_window_type(window_type) {
                return Err(FlowError::configuration_with_key(
                    format!(
                        "Unsupported window type '{}'. Valid values: '{}'",
                        window_type, WINDOW_TYPE_SLIDING
                    ),
                    KEY_WINDOW_TYPE,
                ));
            }
        }

        let size = required_duration(config, KEY_WINDOW_SIZE)?;
        let slide = required_duration(config, KEY_WINDOW_SLIDE)?;

        let raw_capacity = config
            .get(KEY_CHANNEL_CAPACITY)
            .map(String::as_str)
            .unwrap_or_default();
        let channel_capacity = raw_capacity.trim().parse::<usize>().map_err(|_| {
            FlowError::invalid_parameter_with_details(
                format!("'{}' is not a valid capacity", raw_capacity),
                KEY_CHANNEL_CAPACITY,
                "positive integer",
            )
        })?;

        Self::new(size, slide)?.with_channel_capacity(channel_capacity)
    }

    /// Build from code-supplied properties such as `window.size = "50ms"`
    pub fn from_properties(properties: &HashMap<String, String>) -> FlowResult<Self> {
        Self::from_flat_config(&FlatConfig::from_properties(properties))
    }

    pub fn from_toml_str(content: &str) -> FlowResult<Self> {
        Self::from_flat_config(&FlatConfig::from_toml_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> FlowResult<Self> {
        Self::from_flat_config(&FlatConfig::from_yaml_str(content)?)
    }

    /// Load from a configuration file, letting `overrides` win over file values
    pub fn from_file(
        path: impl AsRef<Path>,
        overrides: &HashMap<String, String>,
    ) -> FlowResult<Self> {
        let mut config = FlatConfig::from_properties(overrides);
        config.merge(&FlatConfig::from_file(path)?);
        Self::from_flat_config(&config)
    }
}

fn required_duration(config: &FlatConfig, key: &str) -> FlowResult<Duration> {
    let raw = config
        .get(key)
        .ok_or_else(|| FlowError::configuration_with_key(format!("Missing required property: {}", key), key))?;

    parse_duration(raw).map_err(|e| {
        FlowError::invalid_parameter_with_details(e, key, "duration such as '50ms', '2s' or '1m'")
    })
}
