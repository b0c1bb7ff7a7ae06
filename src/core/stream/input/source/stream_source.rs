// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use super::Source;

/// Adapts any `futures::Stream` into a [`Source`]
#[derive(Debug)]
pub struct StreamSource<S> {
    stream: S,
}

impl<S> StreamSource<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

#[async_trait]
impl<S> Source<S::Item> for StreamSource<S>
where
    S: Stream + Unpin + Send,
    S::Item: Send,
{
    async fn next(&mut self) -> Option<S::Item> {
        self.stream.next().await
    }
}
