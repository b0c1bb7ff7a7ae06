// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Source;

/// Source reading from a tokio mpsc channel
///
/// End-of-stream is signalled by dropping every sender.
#[derive(Debug)]
pub struct ChannelSource<T> {
    receiver: mpsc::Receiver<T>,
}

impl<T> ChannelSource<T> {
    /// Create a bounded channel and return its sending half with the source
    pub fn new(capacity: usize) -> (mpsc::Sender<T>, Self) {
        let (sender, receiver) = mpsc::channel(capacity);
        (sender, Self { receiver })
    }

    pub fn from_receiver(receiver: mpsc::Receiver<T>) -> Self {
        Self { receiver }
    }
}

#[async_trait]
impl<T: Send> Source<T> for ChannelSource<T> {
    async fn next(&mut self) -> Option<T> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_source_yields_until_senders_dropped() {
        let (sender, mut source) = ChannelSource::new(4);
        sender.send("a").await.unwrap();
        sender.send("b").await.unwrap();
        drop(sender);

        assert_eq!(source.next().await, Some("a"));
        assert_eq!(source.next().await, Some("b"));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_channel_source_from_receiver() {
        let (sender, receiver) = mpsc::channel(1);
        let mut source = ChannelSource::from_receiver(receiver);
        tokio::spawn(async move {
            sender.send(7u32).await.unwrap();
        });
        assert_eq!(source.next().await, Some(7));
        assert_eq!(source.next().await, None);
    }
}
