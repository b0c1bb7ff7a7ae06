// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timestamp extraction strategies for windowed processing.
//!
//! A window asks its extractor for a timestamp exactly once per element, at
//! the moment the element is taken off the source. Extractors are expected to
//! be cheap, non-blocking and infallible: timestamps drive eviction, so a
//! broken extractor is a bug in the caller's code rather than a per-element
//! error the window could recover from.

use std::fmt::Debug;

use crate::core::util::time::{now_nanos, Timestamp};

/// Maps an element to a nanosecond timestamp
///
/// Any `Fn(&T) -> Timestamp` closure is an extractor, which is how event-time
/// windows are usually configured:
///
/// ```rust,ignore
/// let window = SlidingWindow::with_extractor(size, slide, |trade: &Trade| trade.executed_at)?;
/// ```
pub trait TimestampExtractor<T>: Send + Sync {
    fn extract(&self, element: &T) -> Timestamp;
}

impl<T, F> TimestampExtractor<T> for F
where
    F: Fn(&T) -> Timestamp + Send + Sync,
{
    #[inline]
    fn extract(&self, element: &T) -> Timestamp {
        self(element)
    }
}

/// Processing-time semantics: the element is stamped with the clock reading
/// taken when the window observes it
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingTimeExtractor;

impl<T> TimestampExtractor<T> for ProcessingTimeExtractor {
    #[inline]
    fn extract(&self, _element: &T) -> Timestamp {
        now_nanos()
    }
}
