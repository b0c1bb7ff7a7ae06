// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::sink_trait::Sink;
use crate::core::error::{FlowError, FlowResult};

/// Sink forwarding items into a tokio mpsc channel
///
/// Completing the sink drops its sender, so the receiver sees `None` once the
/// buffered items are drained.
#[derive(Debug)]
pub struct ChannelSink<T> {
    sender: Option<mpsc::Sender<T>>,
}

impl<T> ChannelSink<T> {
    /// Create a bounded channel and return the sink with its receiving half
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<T>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self::from_sender(sender), receiver)
    }

    pub fn from_sender(sender: mpsc::Sender<T>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.sender.is_none()
    }
}

#[async_trait]
impl<T: Send + 'static> Sink<T> for ChannelSink<T> {
    async fn publish(&mut self, item: T) -> FlowResult<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| FlowError::sink_closed("publish after completion"))?;

        sender
            .send(item)
            .await
            .map_err(|_| FlowError::sink_closed("channel receiver dropped"))
    }

    async fn complete(&mut self) -> FlowResult<()> {
        self.sender.take();
        Ok(())
    }
}
