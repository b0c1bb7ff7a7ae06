// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Windowflow
//!
//! Sliding-window operator for asynchronous element streams.
//!
//! - [`SlidingWindow`] - buffers elements and emits overlapping windows every
//!   slide interval, using processing time or a caller-supplied
//!   [`TimestampExtractor`] for event time.
//! - [`Source`] / [`Sink`] - the two ends a window runs between, with channel,
//!   stream and logging adapters in [`core::stream`].
//! - [`SlidingWindowConfig`] - validated parameters, loadable from properties,
//!   TOML or YAML.
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use windowflow::SlidingWindow;
//!
//! let window = SlidingWindow::new(Duration::from_millis(50), Duration::from_millis(20))?;
//! let mut pipeline = window.spawn();
//! pipeline.input.send("a").await?;
//! while let Some(window) = pipeline.output.recv().await {
//!     println!("{:?}", window);
//! }
//! ```
//!
//! Elements still buffered when the source ends are not emitted.

pub mod core;

pub use crate::core::config::SlidingWindowConfig;
pub use crate::core::error::{FlowError, FlowResult};
pub use crate::core::query::processor::stream::window::{
    ProcessingTimeExtractor, SlidingWindow, TimestampExtractor,
};
pub use crate::core::stream::{Sink, Source};
pub use crate::core::util::time::Timestamp;
