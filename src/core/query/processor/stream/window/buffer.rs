// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::VecDeque;

use crate::core::util::time::Timestamp;

/// An element held by a window together with the timestamp it was given on arrival
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedRecord<T> {
    pub value: T,
    pub timestamp: Timestamp,
}

/// Arrival-ordered records of a window
///
/// Records are appended at the tail and evicted from the head. The buffer does
/// not sort: eviction stops at the first record that is recent enough, so it
/// relies on timestamps not decreasing in arrival order.
#[derive(Debug)]
pub struct WindowBuffer<T> {
    records: VecDeque<BufferedRecord<T>>,
}

impl<T> Default for WindowBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WindowBuffer<T> {
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T, timestamp: Timestamp) {
        self.records.push_back(BufferedRecord { value, timestamp });
    }

    /// Drop leading records older than `cutoff`
    ///
    /// A record whose timestamp equals `cutoff` is kept. Returns how many
    /// records were removed.
    pub fn evict_before(&mut self, cutoff: Timestamp) -> usize {
        let stale = self
            .records
            .iter()
            .take_while(|record| record.timestamp < cutoff)
            .count();
        self.records.drain(..stale);
        stale
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BufferedRecord<T>> {
        self.records.iter()
    }
}

impl<T: Clone> WindowBuffer<T> {
    /// Copy of the buffered values in arrival order
    pub fn snapshot(&self) -> Vec<T> {
        self.records.iter().map(|record| record.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(records: &[(&'static str, Timestamp)]) -> WindowBuffer<&'static str> {
        let mut buffer = WindowBuffer::new();
        for (value, ts) in records {
            buffer.push(*value, *ts);
        }
        buffer
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer: WindowBuffer<u32> = WindowBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_preserves_arrival_order() {
        let buffer = buffer_of(&[("a", 10), ("b", 20), ("c", 30)]);
        assert_eq!(buffer.snapshot(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_evict_removes_strictly_older_prefix() {
        let mut buffer = buffer_of(&[("a", 10), ("b", 20), ("c", 30), ("d", 40)]);
        assert_eq!(buffer.evict_before(25), 2);
        assert_eq!(buffer.snapshot(), vec!["c", "d"]);
    }

    #[test]
    fn test_evict_keeps_record_at_cutoff() {
        let mut buffer = buffer_of(&[("a", 10), ("b", 20), ("c", 30)]);
        assert_eq!(buffer.evict_before(20), 1);
        assert_eq!(buffer.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn test_evict_everything() {
        let mut buffer = buffer_of(&[("a", 10), ("b", 20)]);
        assert_eq!(buffer.evict_before(100), 2);
        assert!(buffer.is_empty());
        assert_eq!(buffer.evict_before(200), 0);
    }

    #[test]
    fn test_evict_stops_at_first_recent_record() {
        // Out-of-order timestamps are not reconciled: "c" survives behind "b"
        let mut buffer = buffer_of(&[("a", 10), ("b", 50), ("c", 15)]);
        assert_eq!(buffer.evict_before(20), 1);
        assert_eq!(buffer.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn test_snapshot_is_detached_from_buffer() {
        let mut buffer = WindowBuffer::new();
        buffer.push(String::from("a"), 1);
        let window = buffer.snapshot();
        buffer.push(String::from("b"), 2);
        buffer.evict_before(2);
        assert_eq!(window, vec![String::from("a")]);
        let timestamps: Vec<Timestamp> = buffer.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![2]);
    }
}
