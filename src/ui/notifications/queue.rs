// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Queue` owns the ordered sequence of active notifications and their
//! timed expiry. It is created once at application start and injected by
//! `&mut` wherever feedback is produced; there is no ambient global.
//!
//! # Timer model
//!
//! A single timer is armed at any moment, keyed to the **head** (oldest
//! surviving entry) of the sequence. The timer is an `iced` task wrapping a
//! `tokio` sleep for the head's remaining lifetime; the message it resolves
//! to carries the generation counter captured at arm time. Any mutation
//! that changes the head (push on an empty queue, dismissal of the head,
//! expiry itself) rearms and bumps the generation, so a fired-but-stale
//! callback is ignored instead of evicting the wrong entry.

use super::notification::{Kind, Notification, NotificationId, DEFAULT_DURATION};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use iced::Task;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// The armed expiry timer fired. Stale generations are ignored.
    Expired { generation: u64 },
}

/// Outcome of removing an entry from the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Absent,
    Interior,
    Head,
}

/// Ordered queue of active notifications with FIFO oldest-only expiry.
#[derive(Debug)]
pub struct Queue {
    entries: VecDeque<Notification>,
    /// Generation of the currently armed timer. Bumped on every rearm so
    /// callbacks from cancelled timers become no-ops.
    generation: u64,
    /// Duration applied to notifications that do not specify one.
    default_duration: Duration,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            generation: 0,
            default_duration: DEFAULT_DURATION,
            diagnostics: None,
        }
    }

    /// Sets the duration applied to notifications that do not carry one.
    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration.max(Duration::from_millis(1));
    }

    /// Sets the diagnostics handle; error and warning toasts are mirrored
    /// into the diagnostics log.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a notification and returns its id together with the task
    /// that drives the expiry timer.
    ///
    /// Always succeeds; insertion order is display order. The timer is only
    /// (re)armed when the queue was empty; otherwise the armed timer for
    /// the current head stays valid.
    pub fn push(&mut self, mut notification: Notification) -> (NotificationId, Task<Message>) {
        notification.apply_default_duration(self.default_duration);

        if let Some(handle) = &self.diagnostics {
            let message = notification.title_key().unwrap_or_default();
            match notification.kind() {
                Kind::Warning => {
                    let category = notification.warning_type().unwrap_or(WarningType::Other);
                    handle.log_warning(WarningEvent::new(category, message));
                }
                Kind::Error => {
                    let category = notification.error_type().unwrap_or(ErrorType::Other);
                    handle.log_error(ErrorEvent::new(category, message));
                }
                Kind::Default | Kind::Success => {}
            }
        }

        let id = notification.id();
        let was_empty = self.entries.is_empty();
        self.entries.push_back(notification);

        let task = if was_empty { self.arm() } else { Task::none() };
        (id, task)
    }

    /// Removes the notification with the given id.
    ///
    /// A no-op (not an error) if the id is absent. When the head is
    /// removed the timer is rearmed against the new head, or disarmed if
    /// the queue becomes empty.
    pub fn dismiss(&mut self, id: NotificationId) -> Task<Message> {
        match self.remove(id) {
            Removal::Absent | Removal::Interior => Task::none(),
            Removal::Head => self.rearm_or_disarm(),
        }
    }

    /// Handles a notification message, returning any follow-up timer task.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Expired { generation } => self.expired(generation),
        }
    }

    /// Processes a fired timer: evicts the head and rearms.
    ///
    /// Callbacks carrying a stale generation are ignored; the state they
    /// captured no longer describes the queue.
    fn expired(&mut self, generation: u64) -> Task<Message> {
        if generation != self.generation {
            return Task::none();
        }
        self.entries.pop_front();
        self.rearm_or_disarm()
    }

    fn remove(&mut self, id: NotificationId) -> Removal {
        match self.entries.iter().position(|n| n.id() == id) {
            None => Removal::Absent,
            Some(0) => {
                self.entries.pop_front();
                Removal::Head
            }
            Some(position) => {
                self.entries.remove(position);
                Removal::Interior
            }
        }
    }

    fn rearm_or_disarm(&mut self) -> Task<Message> {
        if self.entries.is_empty() {
            // Invalidate any in-flight callback; nothing left to expire.
            self.generation = self.generation.wrapping_add(1);
            Task::none()
        } else {
            self.arm()
        }
    }

    /// Arms the expiry timer for the current head's remaining lifetime.
    fn arm(&mut self) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let delay = self.head_delay(Instant::now());

        Task::perform(tokio::time::sleep(delay), move |()| Message::Expired {
            generation,
        })
    }

    /// Delay the armed timer sleeps for, measured at `now`: the head's
    /// remaining lifetime, counted from its insertion. Zero when empty.
    #[must_use]
    pub fn head_delay(&self, now: Instant) -> Duration {
        self.entries
            .front()
            .map(|head| head.remaining(now))
            .unwrap_or(Duration::ZERO)
    }

    /// The ordered sequence of active notifications (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// The oldest surviving notification, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Notification> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generation of the currently armed timer.
    #[must_use]
    pub fn timer_generation(&self) -> u64 {
        self.generation
    }

    /// Removes every notification and disarms the timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut Queue, notification: Notification) -> NotificationId {
        let (id, _task) = queue.push(notification);
        id
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert!(queue.head().is_none());
    }

    #[tokio::test]
    async fn push_preserves_insertion_order() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("first"));
        drain(&mut queue, Notification::plain("second"));
        drain(&mut queue, Notification::plain("third"));

        let titles: Vec<_> = queue.iter().filter_map(|n| n.title_key()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn identical_content_yields_distinct_entries() {
        let mut queue = Queue::new();
        let a = drain(&mut queue, Notification::plain("same"));
        let b = drain(&mut queue, Notification::plain("same"));

        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn push_applies_configured_default_duration() {
        let mut queue = Queue::new();
        queue.set_default_duration(Duration::from_millis(1234));
        drain(&mut queue, Notification::plain("Z"));

        let head = queue.head().expect("queue has a head");
        assert_eq!(head.kind(), Kind::Default);
        assert_eq!(head.effective_duration(), Duration::from_millis(1234));
    }

    #[tokio::test]
    async fn dismiss_removes_any_position() {
        let mut queue = Queue::new();
        let first = drain(&mut queue, Notification::plain("first"));
        let second = drain(&mut queue, Notification::plain("second"));
        let third = drain(&mut queue, Notification::plain("third"));

        let _ = queue.dismiss(second);
        let remaining: Vec<_> = queue.iter().map(|n| n.id()).collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[tokio::test]
    async fn dismiss_of_unknown_id_is_a_no_op() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("only"));
        let stranger = Notification::plain("never queued").id();

        let _ = queue.dismiss(stranger);
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn dismissing_head_promotes_next_entry() {
        let mut queue = Queue::new();
        let x = drain(&mut queue, Notification::plain("X").duration_ms(5000));
        let y = drain(&mut queue, Notification::plain("Y").duration_ms(5000));

        let _ = queue.dismiss(x);
        assert_eq!(queue.head().map(Notification::id), Some(y));
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn dismissing_head_invalidates_armed_timer() {
        let mut queue = Queue::new();
        let x = drain(&mut queue, Notification::plain("X"));
        drain(&mut queue, Notification::plain("Y"));
        let generation_for_x = queue.timer_generation();

        let _ = queue.dismiss(x);
        assert_ne!(queue.timer_generation(), generation_for_x);

        // A late callback from X's timer must not evict Y.
        let _ = queue.handle_message(Message::Expired {
            generation: generation_for_x,
        });
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn expiry_removes_only_the_head() {
        let mut queue = Queue::new();
        let a = drain(&mut queue, Notification::plain("A").duration_ms(1000));
        let b = drain(&mut queue, Notification::plain("B").duration_ms(100));

        // B's configured duration is shorter, but only the head expires.
        let _ = queue.handle_message(Message::Expired {
            generation: queue.timer_generation(),
        });
        assert_eq!(queue.head().map(Notification::id), Some(b));
        assert_ne!(queue.head().map(Notification::id), Some(a));
    }

    #[tokio::test]
    async fn expiry_drains_the_queue_head_by_head() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("one"));
        drain(&mut queue, Notification::plain("two"));

        let _ = queue.handle_message(Message::Expired {
            generation: queue.timer_generation(),
        });
        assert_eq!(queue.len(), 1);

        let _ = queue.handle_message(Message::Expired {
            generation: queue.timer_generation(),
        });
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn stale_generation_is_ignored() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("stays"));
        let stale = queue.timer_generation().wrapping_sub(1);

        let _ = queue.handle_message(Message::Expired { generation: stale });
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn push_on_non_empty_queue_keeps_head_timer() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("head"));
        let generation = queue.timer_generation();

        drain(&mut queue, Notification::plain("tail"));
        assert_eq!(queue.timer_generation(), generation);
    }

    #[tokio::test]
    async fn clear_empties_and_disarms() {
        let mut queue = Queue::new();
        drain(&mut queue, Notification::plain("a"));
        drain(&mut queue, Notification::plain("b"));
        let generation = queue.timer_generation();

        queue.clear();
        assert!(queue.is_empty());
        assert_ne!(queue.timer_generation(), generation);
    }

    #[tokio::test]
    async fn error_toasts_reach_diagnostics() {
        use crate::diagnostics::DiagnosticsCollector;

        let mut collector = DiagnosticsCollector::default();
        let mut queue = Queue::new();
        queue.set_diagnostics(collector.handle());

        drain(&mut queue, Notification::error("error-api-network"));
        drain(&mut queue, Notification::success("notification-saved"));

        collector.drain();
        // Only the error is mirrored; success stays UI-only.
        assert_eq!(collector.len(), 1);
    }

    #[tokio::test]
    async fn toast_categories_reach_diagnostics() {
        use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

        let mut collector = DiagnosticsCollector::default();
        let mut queue = Queue::new();
        queue.set_diagnostics(collector.handle());

        drain(
            &mut queue,
            Notification::error("error-api-network").with_error_type(ErrorType::Api),
        );
        drain(
            &mut queue,
            Notification::warning("settings-timeout-invalid")
                .with_warning_type(WarningType::Validation),
        );
        drain(&mut queue, Notification::warning("warning-config-unreadable"));

        collector.drain();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert!(matches!(
            &kinds[0],
            DiagnosticEventKind::Error { event } if event.error_type == ErrorType::Api
        ));
        assert!(matches!(
            &kinds[1],
            DiagnosticEventKind::Warning { event }
                if event.warning_type == WarningType::Validation
        ));
        // Untagged warnings keep the catch-all category.
        assert!(matches!(
            &kinds[2],
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::Other
        ));
    }
}
