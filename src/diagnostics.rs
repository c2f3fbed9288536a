// SPDX-License-Identifier: MPL-2.0
//! Diagnostics mirror of notification lifecycle events.
//!
//! The area logs through a cheap, cloneable [`DiagnosticsHandle`]; a
//! [`DiagnosticsCollector`] on the other end of the channel stores the
//! records in a memory-bounded ring buffer. Sending never blocks: when the
//! channel is full the record is dropped.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::collections::VecDeque;

use crate::ui::notifications::{Kind, NotificationId};

/// Default ring-buffer capacity.
pub const DEFAULT_CAPACITY: usize = 1000;

const CHANNEL_CAPACITY: usize = 256;

/// Which lifecycle transition a veto interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Show,
    Update,
    Hide,
}

/// One notification lifecycle occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaEvent {
    Shown {
        id: NotificationId,
        kind: Kind,
        message: String,
    },
    Updated {
        id: NotificationId,
    },
    Hidden {
        id: NotificationId,
        kind: Kind,
    },
    Vetoed {
        id: NotificationId,
        stage: LifecycleStage,
    },
    Warning {
        message: String,
    },
}

/// A timestamped lifecycle record.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub at: DateTime<Utc>,
    pub event: AreaEvent,
}

/// Handle for sending diagnostic records to the collector.
///
/// Cheap to clone; sending is non-blocking and drops on backpressure.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    record_tx: Sender<DiagnosticRecord>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event.
    pub fn log(&self, event: AreaEvent) {
        let record = DiagnosticRecord {
            at: Utc::now(),
            event,
        };
        let _ = self.record_tx.try_send(record);
    }

    /// Logs a warning-kind occurrence.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(AreaEvent::Warning {
            message: message.into(),
        });
    }
}

/// Receives and stores diagnostic records.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    record_rx: Receiver<DiagnosticRecord>,
    buffer: RingBuffer<DiagnosticRecord>,
}

impl DiagnosticsCollector {
    /// Creates a collector/handle pair with the default capacity.
    #[must_use]
    pub fn new() -> (Self, DiagnosticsHandle) {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a collector/handle pair with an explicit ring capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> (Self, DiagnosticsHandle) {
        let (record_tx, record_rx) = bounded(CHANNEL_CAPACITY);
        (
            Self {
                record_rx,
                buffer: RingBuffer::new(capacity),
            },
            DiagnosticsHandle { record_tx },
        )
    }

    /// Moves every pending record from the channel into the ring buffer.
    pub fn drain(&mut self) {
        while let Ok(record) = self.record_rx.try_recv() {
            self.buffer.push(record);
        }
    }

    /// Stored records in chronological order (oldest first).
    pub fn records(&self) -> impl Iterator<Item = &DiagnosticRecord> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }
}

/// Fixed-capacity buffer that evicts the oldest entry when full.
#[derive(Debug, Clone)]
struct RingBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_delivers_records_to_collector() {
        let (mut collector, handle) = DiagnosticsCollector::new();
        let id = NotificationId::new();

        handle.log(AreaEvent::Shown {
            id,
            kind: Kind::Info,
            message: "saved".to_string(),
        });
        handle.log(AreaEvent::Hidden {
            id,
            kind: Kind::Info,
        });

        collector.drain();
        assert_eq!(collector.len(), 2);
        let events: Vec<_> = collector.records().map(|r| r.event.clone()).collect();
        assert!(matches!(events[0], AreaEvent::Shown { .. }));
        assert!(matches!(events[1], AreaEvent::Hidden { .. }));
    }

    #[test]
    fn ring_buffer_evicts_oldest() {
        let (mut collector, handle) = DiagnosticsCollector::with_capacity(2);

        for message in ["one", "two", "three"] {
            handle.log_warning(message);
        }
        collector.drain();

        assert_eq!(collector.len(), 2);
        let messages: Vec<_> = collector
            .records()
            .filter_map(|record| match &record.event {
                AreaEvent::Warning { message } => Some(message.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(messages, ["two", "three"]);
    }

    #[test]
    fn timestamps_are_monotone() {
        let (mut collector, handle) = DiagnosticsCollector::new();
        handle.log_warning("first");
        handle.log_warning("second");
        collector.drain();

        let records: Vec<_> = collector.records().collect();
        assert!(records[0].at <= records[1].at);
    }
}
