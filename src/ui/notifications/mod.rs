// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, backend errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and durations
//! - [`queue`] - `Queue`: ordered lifecycle management with FIFO expiry
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Expiry policy
//!
//! The queue arms a **single timer** for the oldest surviving notification;
//! when it fires, the head is removed and the timer is rearmed for the new
//! head. A notification inserted later with a shorter duration is therefore
//! only removed once it becomes the head. This keeps the lifecycle trivially
//! auditable (one timer, one owner) and is the documented, tested contract
//! of the queue.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Queue};
//!
//! let mut queue = Queue::new();
//!
//! // Push a notification; the returned task drives the expiry timer.
//! let (_id, task) = queue.push(Notification::success("notification-saved"));
//!
//! // In your view function, render the toast overlay
//! let overlay = Toast::view_overlay(&queue, &i18n).map(Message::Notification);
//! ```

mod notification;
mod queue;
mod toast;

pub use notification::{Kind, Notification, NotificationId, DEFAULT_DURATION};
pub use queue::{Message as NotificationMessage, Queue};
pub use toast::Toast;
