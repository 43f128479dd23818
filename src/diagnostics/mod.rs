// SPDX-License-Identifier: MPL-2.0
//! In-app diagnostics: a bounded event log for warnings, errors, and
//! notable user actions.
//!
//! Events are sent from anywhere in the application through a cheap,
//! cloneable [`DiagnosticsHandle`] and stored by the [`DiagnosticsCollector`]
//! in a memory-bounded ring buffer. Sending never blocks the UI thread;
//! events are dropped if the channel is full.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
