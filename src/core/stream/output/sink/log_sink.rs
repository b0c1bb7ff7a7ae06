// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::sink_trait::Sink;
use crate::core::error::FlowResult;

/// LogSink - Debug sink that logs every item it receives
///
/// Received items are also retained so tests and examples can inspect them
/// after the pipeline finishes.
#[derive(Debug, Clone)]
pub struct LogSink<T> {
    pub items: Arc<Mutex<Vec<T>>>,
    completed: Arc<AtomicBool>,
    prefix: String,
}

impl<T> Default for LogSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LogSink<T> {
    pub fn new() -> Self {
        Self::with_prefix("[LOG]")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            completed: Arc::new(AtomicBool::new(false)),
            prefix: prefix.into(),
        }
    }

    /// True once the upstream has signalled end-of-stream
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

impl<T: Clone> LogSink<T> {
    pub fn received(&self) -> Vec<T> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl<T: Debug + Send + 'static> Sink<T> for LogSink<T> {
    async fn publish(&mut self, item: T) -> FlowResult<()> {
        log::info!("{} {:?}", self.prefix, item);
        match self.items.lock() {
            Ok(mut items) => items.push(item),
            Err(poisoned) => poisoned.into_inner().push(item),
        }
        Ok(())
    }

    async fn complete(&mut self) -> FlowResult<()> {
        log::debug!("{} completed", self.prefix);
        self.completed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
