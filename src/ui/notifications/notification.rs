// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system.

use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Auto-dismiss duration applied when a notification does not specify one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
///
/// Identifiers are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation kind of a notification. Affects color only; every kind
/// follows the same FIFO lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Default,
    Success,
    Error,
    Warning,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Default => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// `title` and `description` hold i18n keys resolved at render time.
/// Notifications are immutable once queued; "changing" one means
/// dismissing it and pushing a replacement.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    description: Option<String>,
    /// Arguments for title/description interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
    /// Auto-dismiss duration; `None` until the queue applies its default.
    duration: Option<Duration>,
    /// Diagnostics category recorded when a warning toast is queued.
    warning_type: Option<WarningType>,
    /// Diagnostics category recorded when an error toast is queued.
    error_type: Option<ErrorType>,
}

impl Notification {
    /// Creates an empty notification of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: None,
            description: None,
            message_args: Vec::new(),
            created_at: Instant::now(),
            duration: None,
            warning_type: None,
            error_type: None,
        }
    }

    /// Creates a default-kind notification with the given title key.
    pub fn plain(title_key: impl Into<String>) -> Self {
        Self::new(Kind::Default).title(title_key)
    }

    /// Creates a success notification with the given title key.
    pub fn success(title_key: impl Into<String>) -> Self {
        Self::new(Kind::Success).title(title_key)
    }

    /// Creates an error notification with the given title key.
    pub fn error(title_key: impl Into<String>) -> Self {
        Self::new(Kind::Error).title(title_key)
    }

    /// Creates a warning notification with the given title key.
    pub fn warning(title_key: impl Into<String>) -> Self {
        Self::new(Kind::Warning).title(title_key)
    }

    /// Sets the title key.
    #[must_use]
    pub fn title(mut self, key: impl Into<String>) -> Self {
        self.title = Some(key.into());
        self
    }

    /// Sets the description key.
    #[must_use]
    pub fn description(mut self, key: impl Into<String>) -> Self {
        self.description = Some(key.into());
        self
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Tags the diagnostics category logged when this warning is queued.
    ///
    /// Untagged warnings are logged as [`WarningType::Other`].
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Tags the diagnostics category logged when this error is queued.
    ///
    /// Untagged errors are logged as [`ErrorType::Other`].
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    /// Sets the auto-dismiss duration.
    ///
    /// Durations are clamped to at least one millisecond: "never expire" is
    /// not part of the queue's contract.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration.max(Duration::from_millis(1)));
        self
    }

    /// Convenience for [`Notification::duration`] in milliseconds.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    /// Fills in the given default duration if none was set.
    ///
    /// Called by the queue when the notification is inserted; part of
    /// creation, not a later mutation.
    pub(super) fn apply_default_duration(&mut self, default: Duration) {
        if self.duration.is_none() {
            self.duration = Some(default.max(Duration::from_millis(1)));
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title_key(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description_key(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// The effective auto-dismiss duration ([`DEFAULT_DURATION`] until the
    /// queue applies its configured default).
    #[must_use]
    pub fn effective_duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Time left before this notification is eligible for automatic
    /// removal, measured against its insertion time.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.created_at + self.effective_duration()).saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::success("test");
        let b = Notification::success("test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Default.color(),
            Kind::Success.color(),
            Kind::Error.color(),
            Kind::Warning.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::plain("").kind(), Kind::Default);
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
    }

    #[test]
    fn unset_duration_falls_back_to_default() {
        let notification = Notification::plain("test");
        assert_eq!(notification.effective_duration(), DEFAULT_DURATION);
    }

    #[test]
    fn zero_duration_is_clamped_positive() {
        let notification = Notification::plain("test").duration(Duration::ZERO);
        assert_eq!(notification.effective_duration(), Duration::from_millis(1));
    }

    #[test]
    fn apply_default_duration_only_fills_gaps() {
        let mut explicit = Notification::plain("test").duration_ms(250);
        explicit.apply_default_duration(Duration::from_secs(9));
        assert_eq!(explicit.effective_duration(), Duration::from_millis(250));

        let mut unset = Notification::plain("test");
        unset.apply_default_duration(Duration::from_secs(9));
        assert_eq!(unset.effective_duration(), Duration::from_secs(9));
    }

    #[test]
    fn remaining_counts_down_from_insertion() {
        let notification = Notification::plain("test").duration_ms(100);
        let later = notification.created_at() + Duration::from_millis(40);
        assert_eq!(notification.remaining(later), Duration::from_millis(60));

        let past_deadline = notification.created_at() + Duration::from_millis(500);
        assert_eq!(notification.remaining(past_deadline), Duration::ZERO);
    }

    #[test]
    fn diagnostic_categories_are_carried_from_the_builder() {
        let tagged = Notification::error("error-api-network").with_error_type(ErrorType::Api);
        assert_eq!(tagged.error_type(), Some(ErrorType::Api));
        assert_eq!(tagged.warning_type(), None);

        let untagged = Notification::warning("warning-config-unreadable");
        assert_eq!(untagged.warning_type(), None);
    }

    #[test]
    fn builder_pattern_collects_args() {
        let notification = Notification::error("error-api-status")
            .description("error-api-status-detail")
            .with_arg("code", "503");

        assert_eq!(notification.title_key(), Some("error-api-status"));
        assert_eq!(notification.message_args().len(), 1);
    }
}
