// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sliding Window
//!
//! Buffers elements from a [`Source`] and, every `slide` interval, emits the
//! elements whose timestamps fall within the trailing `size` duration.
//!
//! ## Timing
//!
//! ```text
//! start        start+size    +slide        +slide
//!   |-------------|-------------|-------------|----> time
//!                 tick 0        tick 1        tick 2
//! ```
//!
//! The first tick waits a full window so the first emission covers `size` worth
//! of data. At a tick scheduled for time `T` every leading record with
//! `timestamp < T - size` is evicted; a record stamped exactly `T - size` stays.
//! The remaining values are published as one `Vec<T>`. Ticks that leave the
//! buffer empty publish nothing.
//!
//! ## Shutdown
//!
//! When the source ends the timer is dropped and the sink is completed right
//! away. Elements still buffered at that moment are **discarded**: there is no
//! trailing partial window. Callers that need every element to appear in some
//! window must keep the source open for at least `size` after the last element.
//!
//! ## Concurrency
//!
//! A single task owns the buffer and handles one event at a time: a tick, an
//! element, or end-of-stream. No lock guards the buffer. When a tick and an
//! element are ready together the tick is handled first, so an element arriving
//! at the instant of a tick belongs to the next window.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use super::buffer::WindowBuffer;
use super::timestamp::{ProcessingTimeExtractor, TimestampExtractor};
use crate::core::config::SlidingWindowConfig;
use crate::core::error::FlowResult;
use crate::core::stream::input::source::Source;
use crate::core::stream::output::sink::Sink;
use crate::core::util::time::nanos_at;

/// Sliding-window operator
///
/// Construction validates the parameters; [`run`](Self::run) consumes the
/// window, so each instance processes exactly one stream.
pub struct SlidingWindow<T> {
    config: SlidingWindowConfig,
    extractor: Arc<dyn TimestampExtractor<T>>,
}

impl<T> Debug for SlidingWindow<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingWindow")
            .field("size", &self.config.size())
            .field("slide", &self.config.slide())
            .finish()
    }
}

impl<T> Clone for SlidingWindow<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<T> SlidingWindow<T>
where
    T: Clone + Send + 'static,
{
    /// Processing-time sliding window
    ///
    /// # Errors
    /// `FlowError::Configuration` unless `0 < slide <= size`.
    pub fn new(size: Duration, slide: Duration) -> FlowResult<Self> {
        Ok(Self::from_config(SlidingWindowConfig::new(size, slide)?))
    }

    /// Event-time sliding window stamping elements with `extractor`
    pub fn with_extractor<E>(size: Duration, slide: Duration, extractor: E) -> FlowResult<Self>
    where
        E: TimestampExtractor<T> + 'static,
    {
        Ok(Self::from_config_with_extractor(
            SlidingWindowConfig::new(size, slide)?,
            extractor,
        ))
    }

    pub fn from_config(config: SlidingWindowConfig) -> Self {
        Self::from_config_with_extractor(config, ProcessingTimeExtractor)
    }

    pub fn from_config_with_extractor<E>(config: SlidingWindowConfig, extractor: E) -> Self
    where
        E: TimestampExtractor<T> + 'static,
    {
        Self {
            config,
            extractor: Arc::new(extractor),
        }
    }

    #[inline]
    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    /// Consume `source` until it ends, publishing windows to `sink`
    ///
    /// Returns after `sink.complete()` once the source is exhausted. Anything
    /// still buffered at that point is dropped without being published.
    ///
    /// # Errors
    /// Propagates the sink's error if publishing or completing fails; the
    /// window stops immediately in that case.
    pub async fn run<Src, Snk>(self, mut source: Src, mut sink: Snk) -> FlowResult<()>
    where
        Src: Source<T>,
        Snk: Sink<Vec<T>>,
    {
        let SlidingWindow { config, extractor } = self;
        let size_nanos = config.size_nanos();

        let start = Instant::now();
        let mut ticker = time::interval_at(start + config.size(), config.slide());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let mut buffer = WindowBuffer::new();
        let mut received: u64 = 0;
        let mut emitted: u64 = 0;

        log::debug!(
            "[SlidingWindow] Started (size={:?}, slide={:?})",
            config.size(),
            config.slide()
        );

        loop {
            tokio::select! {
                biased;

                scheduled = ticker.tick() => {
                    let cutoff = nanos_at(scheduled).saturating_sub(size_nanos);
                    let evicted = buffer.evict_before(cutoff);

                    if buffer.is_empty() {
                        log::trace!("[SlidingWindow] Tick with empty buffer (evicted {})", evicted);
                        continue;
                    }

                    let window = buffer.snapshot();
                    log::trace!(
                        "[SlidingWindow] Emitting {} elements (evicted {})",
                        window.len(),
                        evicted
                    );
                    if let Err(e) = sink.publish(window).await {
                        log::warn!("[SlidingWindow] Downstream rejected window, stopping: {}", e);
                        return Err(e);
                    }
                    emitted += 1;
                }

                next = source.next() => match next {
                    Some(element) => {
                        let timestamp = extractor.extract(&element);
                        buffer.push(element, timestamp);
                        received += 1;
                    }
                    None => break,
                },
            }
        }

        drop(ticker);
        log::debug!(
            "[SlidingWindow] Input completed: received={}, windows={}, discarded={}",
            received,
            emitted,
            buffer.len()
        );

        sink.complete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FlowError;
    use crate::core::stream::input::source::ChannelSource;
    use crate::core::stream::output::sink::{ChannelSink, LogSink};
    use crate::core::util::time::{now_nanos, Timestamp};

    const MS: Timestamp = 1_000_000;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_rejects_slide_over_size() {
        let result = SlidingWindow::<u32>::new(ms(10), ms(20));
        assert!(matches!(result, Err(FlowError::Configuration { .. })));
    }

    #[test]
    fn test_with_extractor_rejects_zero_size() {
        let result = SlidingWindow::<i64>::with_extractor(Duration::ZERO, ms(20), |v: &i64| *v);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_valid_parameters() {
        let window = SlidingWindow::<u32>::new(ms(50), ms(20)).unwrap();
        assert_eq!(window.config().size(), ms(50));
        assert_eq!(window.config().slide(), ms(20));
        assert!(format!("{:?}", window).contains("SlidingWindow"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_elements_no_windows() {
        let window = SlidingWindow::<u32>::new(ms(50), ms(20)).unwrap();
        let (sender, source) = ChannelSource::new(8);
        let sink = LogSink::new();

        let task = tokio::spawn(window.run(source, sink.clone()));
        time::sleep(ms(500)).await;
        drop(sender);
        task.await.unwrap().unwrap();

        assert!(sink.received().is_empty());
        assert!(sink.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_element_stamped_at_cutoff_is_retained() {
        // Timestamps relative to the instant the window starts
        let base = now_nanos();
        let window = SlidingWindow::<(char, Timestamp)>::with_extractor(ms(50), ms(20), move |v: &(char, Timestamp)| {
            base + v.1
        })
        .unwrap();

        let (sender, source) = ChannelSource::new(8);
        let (sink, mut windows) = ChannelSink::new(8);
        sender.send(('a', 0)).await.unwrap();
        sender.send(('b', 20 * MS)).await.unwrap();
        let task = tokio::spawn(window.run(source, sink));

        // tick at 50ms: cutoff 0ms keeps 'a'
        assert_eq!(windows.recv().await, Some(vec![('a', 0), ('b', 20 * MS)]));
        // tick at 70ms: cutoff 20ms evicts 'a' and keeps 'b'
        assert_eq!(windows.recv().await, Some(vec![('b', 20 * MS)]));

        drop(sender);
        task.await.unwrap().unwrap();
        assert_eq!(windows.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_final_flush_on_completion() {
        let window = SlidingWindow::new(ms(50), ms(20)).unwrap();
        let (sender, source) = ChannelSource::new(8);
        let sink = LogSink::new();
        let task = tokio::spawn(window.run(source, sink.clone()));

        time::sleep(ms(10)).await;
        sender.send("early").await.unwrap();
        time::sleep(ms(30)).await;
        drop(sender);
        task.await.unwrap().unwrap();

        // Source closed at 40ms, before the first tick at 50ms
        assert!(sink.received().is_empty());
        assert!(sink.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_downstream_dropped() {
        let window = SlidingWindow::new(ms(20), ms(10)).unwrap();
        let (sender, source) = ChannelSource::new(8);
        let (sink, windows) = ChannelSink::new(1);
        drop(windows);

        sender.send(1u32).await.unwrap();
        let result = window.run(source, sink).await;
        assert!(matches!(result, Err(FlowError::SinkClosed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slide_equal_to_size_gives_disjoint_windows() {
        let window = SlidingWindow::new(ms(20), ms(20)).unwrap();
        let (sender, source) = ChannelSource::new(8);
        let sink = LogSink::new();
        let task = tokio::spawn(window.run(source, sink.clone()));

        for value in [1u32, 2, 3, 4] {
            time::sleep(ms(9)).await;
            sender.send(value).await.unwrap();
        }
        time::sleep(ms(100)).await;
        drop(sender);
        task.await.unwrap().unwrap();

        // Arrivals at 9, 18, 27, 36ms; ticks at 20, 40ms
        assert_eq!(sink.received(), vec![vec![1, 2], vec![3, 4]]);
    }
}
