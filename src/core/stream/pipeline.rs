// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring a window between a source and a sink on the tokio runtime.
//!
//! ```text
//! Source ──► SlidingWindow ──► Sink
//! ```
//!
//! [`spawn_window`] runs a window over caller-supplied endpoints;
//! [`SlidingWindow::spawn`] creates channel endpoints as well and hands back
//! their outer halves.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::error::{FlowError, FlowResult};
use crate::core::query::processor::stream::window::SlidingWindow;
use crate::core::stream::input::source::{ChannelSource, Source};
use crate::core::stream::output::sink::{ChannelSink, Sink};

/// Run `window` over `source` and `sink` on a background task
pub fn spawn_window<T, Src, Snk>(
    window: SlidingWindow<T>,
    source: Src,
    sink: Snk,
) -> JoinHandle<FlowResult<()>>
where
    T: Clone + Send + 'static,
    Src: Source<T> + 'static,
    Snk: Sink<Vec<T>> + 'static,
{
    tokio::spawn(window.run(source, sink))
}

/// Channel endpoints of a spawned window
///
/// Dropping `input` ends the stream; `output` then yields `None` once the
/// window has completed.
#[derive(Debug)]
pub struct WindowPipeline<T> {
    pub input: mpsc::Sender<T>,
    pub output: mpsc::Receiver<Vec<T>>,
    task: JoinHandle<FlowResult<()>>,
}

impl<T> WindowPipeline<T> {
    /// Close the input and wait for the window to finish
    ///
    /// Windows not yet read from `output` stay buffered in the receiver.
    pub async fn shutdown(self) -> FlowResult<mpsc::Receiver<Vec<T>>> {
        let WindowPipeline {
            input,
            output,
            task,
        } = self;
        drop(input);
        join(task).await?;
        Ok(output)
    }

    /// Wait for the window task without closing the input
    pub async fn join(self) -> FlowResult<()> {
        join(self.task).await
    }
}

async fn join(task: JoinHandle<FlowResult<()>>) -> FlowResult<()> {
    task.await
        .map_err(|e| FlowError::runtime_with_source("window task failed", Box::new(e)))?
}

impl<T> SlidingWindow<T>
where
    T: Clone + Send + 'static,
{
    /// Spawn this window between two fresh channels
    ///
    /// Both channels are bounded by the configured channel capacity. A full
    /// output channel suspends the window until the consumer catches up.
    pub fn spawn(self) -> WindowPipeline<T> {
        let capacity = self.config().channel_capacity();
        let (input, source) = ChannelSource::new(capacity);
        let (sink, output) = ChannelSink::new(capacity);
        let task = spawn_window(self, source, sink);
        WindowPipeline {
            input,
            output,
            task,
        }
    }
}
