// SPDX-License-Identifier: MPL-2.0
//! `iced_teller` is a back-office administration dashboard for a retail bank,
//! built with the Iced GUI framework.
//!
//! It manages the bank's catalog entities (card types, account types, credit
//! types) against an external REST backend, displays operational data
//! (users, service requests, dashboard metrics), and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_teller/0.2.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
