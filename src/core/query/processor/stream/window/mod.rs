// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod buffer;
pub mod sliding_window;
pub mod timestamp;
pub mod types;

pub use buffer::{BufferedRecord, WindowBuffer};
pub use sliding_window::SlidingWindow;
pub use timestamp::{ProcessingTimeExtractor, TimestampExtractor};
