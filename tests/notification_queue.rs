// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the notification queue's public contract:
//! FIFO display order, oldest-only expiry, dismissal from any position
//! and stale timer invalidation.

use iced_teller::ui::notifications::{
    Notification, NotificationMessage, Queue, DEFAULT_DURATION,
};
use std::time::Duration;

fn push(queue: &mut Queue, notification: Notification) -> iced_teller::ui::notifications::NotificationId {
    let (id, _task) = queue.push(notification);
    id
}

fn expire_head(queue: &mut Queue) {
    let generation = queue.timer_generation();
    let _ = queue.handle_message(NotificationMessage::Expired { generation });
}

#[tokio::test]
async fn notifications_display_in_insertion_order() {
    let mut queue = Queue::new();
    push(&mut queue, Notification::success("toast-record-created"));
    push(&mut queue, Notification::error("error-api-network"));
    push(&mut queue, Notification::warning("warning-config-unreadable"));

    let order: Vec<_> = queue.iter().filter_map(|n| n.title_key()).collect();
    assert_eq!(
        order,
        vec![
            "toast-record-created",
            "error-api-network",
            "warning-config-unreadable"
        ]
    );
}

#[tokio::test]
async fn default_duration_is_five_seconds() {
    let mut queue = Queue::new();
    push(&mut queue, Notification::plain("a"));
    assert_eq!(
        queue.head().expect("head exists").effective_duration(),
        DEFAULT_DURATION
    );
    assert_eq!(DEFAULT_DURATION, Duration::from_millis(5000));
}

#[tokio::test]
async fn shorter_later_notification_waits_for_its_turn() {
    let mut queue = Queue::new();
    let long = push(&mut queue, Notification::plain("long").duration_ms(10_000));
    let short = push(&mut queue, Notification::plain("short").duration_ms(10));

    // The head's timer is the only one armed; the short entry survives
    // until the head goes.
    expire_head(&mut queue);
    assert_eq!(queue.head().map(|n| n.id()), Some(short));
    assert!(queue.iter().all(|n| n.id() != long));
}

#[tokio::test]
async fn dismissal_is_idempotent() {
    let mut queue = Queue::new();
    let id = push(&mut queue, Notification::plain("once"));

    let _ = queue.dismiss(id);
    assert!(queue.is_empty());
    // Second dismissal of the same id is a silent no-op.
    let _ = queue.dismiss(id);
    assert!(queue.is_empty());
}

#[tokio::test]
async fn interior_dismissal_keeps_the_head_timer() {
    let mut queue = Queue::new();
    push(&mut queue, Notification::plain("head"));
    let middle = push(&mut queue, Notification::plain("middle"));
    push(&mut queue, Notification::plain("tail"));
    let generation = queue.timer_generation();

    let _ = queue.dismiss(middle);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.timer_generation(), generation);
}

#[tokio::test]
async fn head_dismissal_rearms_for_the_successor() {
    let mut queue = Queue::new();
    let head = push(&mut queue, Notification::plain("head"));
    let next = push(&mut queue, Notification::plain("next"));
    let generation = queue.timer_generation();

    let _ = queue.dismiss(head);
    assert_eq!(queue.head().map(|n| n.id()), Some(next));
    assert_ne!(queue.timer_generation(), generation);

    // The cancelled timer's callback must not evict the promoted entry.
    let _ = queue.handle_message(NotificationMessage::Expired { generation });
    assert_eq!(queue.len(), 1);
}

#[tokio::test]
async fn expiry_cascade_empties_the_queue() {
    let mut queue = Queue::new();
    for key in ["one", "two", "three"] {
        push(&mut queue, Notification::plain(key));
    }

    for remaining in (0..3).rev() {
        expire_head(&mut queue);
        assert_eq!(queue.len(), remaining);
    }
    // A final stray callback on the empty queue changes nothing.
    expire_head(&mut queue);
    assert!(queue.is_empty());
}

#[tokio::test]
async fn configured_default_applies_only_to_unset_durations() {
    let mut queue = Queue::new();
    queue.set_default_duration(Duration::from_millis(800));

    push(&mut queue, Notification::plain("unset"));
    push(&mut queue, Notification::plain("explicit").duration_ms(50));

    let durations: Vec<_> = queue.iter().map(|n| n.effective_duration()).collect();
    assert_eq!(
        durations,
        vec![Duration::from_millis(800), Duration::from_millis(50)]
    );
}

#[tokio::test]
async fn rearm_delay_is_the_successors_remaining_lifetime() {
    let mut queue = Queue::new();
    let first = push(&mut queue, Notification::plain("first").duration_ms(5000));
    let _second = push(&mut queue, Notification::plain("second").duration_ms(5000));

    let _ = queue.dismiss(first);
    let promoted = queue.head().expect("successor promoted");

    // Two seconds into the successor's lifetime the timer must cover the
    // three seconds left, not restart the full five.
    let now = promoted.created_at() + Duration::from_secs(2);
    assert_eq!(queue.head_delay(now), Duration::from_secs(3));

    // Past the deadline the delay saturates at zero.
    let late = promoted.created_at() + Duration::from_secs(9);
    assert_eq!(queue.head_delay(late), Duration::ZERO);
}

#[tokio::test]
async fn empty_queue_arms_no_delay() {
    let mut queue = Queue::new();
    let only = push(&mut queue, Notification::plain("only"));
    let _ = queue.dismiss(only);

    assert_eq!(queue.head_delay(std::time::Instant::now()), Duration::ZERO);
}

#[tokio::test]
async fn ids_stay_unique_across_queues() {
    let mut first = Queue::new();
    let mut second = Queue::new();

    let a = push(&mut first, Notification::plain("same"));
    let b = push(&mut second, Notification::plain("same"));
    assert_ne!(a, b);
}
