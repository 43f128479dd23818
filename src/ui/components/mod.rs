// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! These components encapsulate common UI patterns that appear in different
//! parts of the application, promoting consistency and reducing duplication.
//!
//! # Components
//!
//! - [`stat_card`] - Metric tile with icon, value and delta label
//! - [`status_badge`] - Pill badge for user and request statuses
//! - [`search_bar`] - Text input with leading magnifier icon
//! - [`confirm_dialog`] - Modal confirmation overlay for destructive actions

pub mod confirm_dialog;
pub mod search_bar;
pub mod stat_card;
pub mod status_badge;
