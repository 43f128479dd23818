// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

/// Categories of warning conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// Configuration file could not be read or parsed.
    Config,
    /// A form field failed validation.
    Validation,
    /// Anything else.
    Other,
}

/// Categories of error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// A backend request failed.
    Api,
    /// Anything else.
    Other,
}

/// A captured warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A captured error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Notable user interactions captured for context around failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Navigate to a screen (screen name as rendered in the sidebar).
    Navigate { screen: String },
    /// Submit a catalog record through a wizard.
    SubmitCatalogRecord { entity: String, edit: bool },
    /// Delete a catalog record.
    DeleteCatalogRecord { entity: String },
    /// Approve or reject a customer service request.
    ResolveRequest { approved: bool },
    /// Queue a customer broadcast (email, SMS, or in-app).
    SendBroadcast { channel: String },
}

/// The kind of diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
    UserAction { action: UserAction },
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
