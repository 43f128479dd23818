// SPDX-License-Identifier: MPL-2.0
//! Dashboard screens, one module per sidebar entry.
//!
//! Every page follows the same shape: a `State` struct owned by the app,
//! a `Message` enum for its widgets, an `update` that mutates the state
//! and returns an `Event` for the parent to act on, and a `view` over a
//! `ViewContext`. Pages never talk to each other directly.

pub mod accounts;
pub mod broadcast;
pub mod cards;
pub mod credits;
pub mod dashboard;
pub mod requests;
pub mod settings;
pub mod users;
