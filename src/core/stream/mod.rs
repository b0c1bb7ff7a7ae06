// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod input;
pub mod output;
pub mod pipeline;

pub use self::input::{ChannelSource, Source, StreamSource};
pub use self::output::{ChannelSink, LogSink, Sink};
pub use self::pipeline::{spawn_window, WindowPipeline};
