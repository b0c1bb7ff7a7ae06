// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod channel_source;
pub mod stream_source;

use async_trait::async_trait;

pub use channel_source::ChannelSource;
pub use stream_source::StreamSource;

/// Upstream end of a window
///
/// A source yields elements until it returns `None`, which signals that no
/// more data will arrive.
///
/// # Cancel safety
///
/// Windows race [`Source::next`] against their timer and drop the pending
/// future when the timer wins. Implementations must therefore be cancel-safe:
/// dropping an unfinished `next()` must not lose an element. Receiving from a
/// tokio channel and polling a `futures::Stream` both satisfy this.
#[async_trait]
pub trait Source<T>: Send {
    async fn next(&mut self) -> Option<T>;
}
