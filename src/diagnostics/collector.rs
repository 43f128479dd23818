// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector aggregating events into a bounded buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Maximum number of retained events.
const BUFFER_CAPACITY: usize = 1000;

/// Capacity of the in-flight channel between producers and the collector.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Sends are non-blocking and
/// drop the event if the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event });
        let _ = self.event_tx.try_send(event);
    }

    pub fn log_error(&self, event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event });
        let _ = self.event_tx.try_send(event);
    }

    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector storing diagnostic events in a circular buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            event_tx,
            event_rx,
            buffer: CircularBuffer::new(BUFFER_CAPACITY),
        }
    }
}

impl DiagnosticsCollector {
    /// Returns a cloneable handle for producers.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events from the channel into the buffer.
    ///
    /// Called periodically from the application update loop.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Iterates over retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::events::{ErrorType, WarningType};

    #[test]
    fn handle_events_reach_the_buffer_after_drain() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_error(ErrorEvent::new(ErrorType::Api, "request failed"));
        handle.log_warning(WarningEvent::new(WarningType::Config, "bad settings"));
        assert!(collector.is_empty());

        collector.drain();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn drain_on_empty_channel_is_a_no_op() {
        let mut collector = DiagnosticsCollector::default();
        collector.drain();
        assert!(collector.is_empty());
    }

    #[test]
    fn handle_is_cloneable_and_shared() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_action(UserAction::Navigate {
            screen: "dashboard".into(),
        });
        second.log_action(UserAction::Navigate {
            screen: "users".into(),
        });

        collector.drain();
        assert_eq!(collector.len(), 2);
    }
}
