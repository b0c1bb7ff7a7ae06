// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use std::fmt::Debug;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use windowflow::core::stream::{ChannelSource, LogSink};
use windowflow::core::util::init_test_logging;
use windowflow::SlidingWindow;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Drives a window with inputs released at fixed offsets from its start
///
/// Offsets are measured from the instant the window starts; the source is
/// closed at `close_at`. Intended for paused-clock tests.
pub struct WindowRunner<T> {
    inputs: Vec<(Duration, T)>,
    close_at: Duration,
}

impl<T> WindowRunner<T>
where
    T: Clone + Debug + Send + 'static,
{
    pub fn new(close_at: Duration) -> Self {
        Self {
            inputs: Vec::new(),
            close_at,
        }
    }

    pub fn input_at(mut self, offset: Duration, value: T) -> Self {
        self.inputs.push((offset, value));
        self
    }

    /// Queue every value at offset zero
    pub fn inputs_now(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.inputs
            .extend(values.into_iter().map(|value| (Duration::ZERO, value)));
        self
    }

    /// Run to completion and return the emitted windows
    pub async fn run(self, window: SlidingWindow<T>) -> Vec<Vec<T>> {
        self.run_with_sink(window).await.received()
    }

    pub async fn run_with_sink(self, window: SlidingWindow<T>) -> LogSink<Vec<T>> {
        init_test_logging();

        let (sender, source) = ChannelSource::new(self.inputs.len().max(1));
        let sink = LogSink::with_prefix("[window]");
        let start = Instant::now();

        let inputs = self.inputs;
        let close_at = self.close_at;
        tokio::spawn(async move {
            for (offset, value) in inputs {
                sleep_until(start + offset).await;
                if sender.send(value).await.is_err() {
                    return;
                }
            }
            sleep_until(start + close_at).await;
            drop(sender);
        });

        window
            .run(source, sink.clone())
            .await
            .expect("window run failed");
        sink
    }
}

pub fn labels<T: AsRef<str>>(windows: &[Vec<T>]) -> Vec<Vec<String>> {
    windows
        .iter()
        .map(|w| w.iter().map(|v| v.as_ref().to_string()).collect())
        .collect()
}

pub fn expected(windows: &[&[&str]]) -> Vec<Vec<String>> {
    windows
        .iter()
        .map(|w| w.iter().map(|v| v.to_string()).collect())
        .collect()
}
