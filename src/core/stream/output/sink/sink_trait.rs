// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;

use crate::core::error::FlowResult;

/// Downstream end of a window
///
/// `publish` receives items one at a time and the caller awaits each call before
/// producing the next one, so a slow sink applies backpressure to its producer.
/// `complete` is called once, after the last item.
#[async_trait]
pub trait Sink<T: Send + 'static>: Send {
    async fn publish(&mut self, item: T) -> FlowResult<()>;

    /// Signal end-of-stream
    ///
    /// Returns Ok by default - sinks with nothing to flush or close can use this.
    async fn complete(&mut self) -> FlowResult<()> {
        Ok(())
    }
}
