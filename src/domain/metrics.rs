// SPDX-License-Identifier: MPL-2.0
//! Dashboard metric types (mock operational data).

use serde::{Deserialize, Serialize};

/// Headline figure shown in a dashboard stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSummary {
    /// i18n key of the card title.
    pub title_key: String,
    /// Pre-formatted headline value (e.g. "12,345", "1.2M DT").
    pub value: String,
    /// i18n key of the delta line ("+180 from last month").
    pub delta_key: String,
    /// Pre-formatted delta argument.
    pub delta_value: String,
    /// Icon name for the card corner.
    pub icon: String,
}

/// One point of the hourly transaction-volume series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPoint {
    /// Axis label (e.g. "09:00").
    pub time: String,
    pub amount: f32,
}

/// One point of the monthly user-activity series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// Axis label (e.g. "Jan").
    pub month: String,
    pub active: f32,
    pub new: f32,
}

/// A row of the recent-transactions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub id: String,
    pub user: String,
    /// i18n key of the transaction kind (withdrawal, deposit, ...).
    pub kind_key: String,
    /// Pre-formatted amount (e.g. "1,200 DT").
    pub amount: String,
    pub time: String,
    /// i18n key of the settlement status.
    pub status_key: String,
}
