// SPDX-License-Identifier: MPL-2.0
//! Customer service requests awaiting back-office review (mock data).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review state of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-pending",
            RequestStatus::Approved => "status-approved",
            RequestStatus::Rejected => "status-rejected",
        }
    }
}

/// The customer who filed a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub email: String,
    /// Two-letter avatar fallback.
    pub avatar: String,
}

/// An application for a catalog product (card, account, or credit).
///
/// The `product` field names the requested catalog entry; which catalog it
/// belongs to is determined by the tab the request is listed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,
    pub applicant: Applicant,
    pub product: String,
    pub request_date: NaiveDate,
    pub status: RequestStatus,
}

impl ServiceRequest {
    /// Whether the request can still be approved or rejected.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_requests_are_actionable() {
        let mut request = ServiceRequest {
            id: "1".into(),
            applicant: Applicant {
                name: "Sarra Mansour".into(),
                email: "sarra.mansour@example.com".into(),
                avatar: "SM".into(),
            },
            product: "STB Travel".into(),
            request_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            status: RequestStatus::Pending,
        };
        assert!(request.is_pending());

        request.status = RequestStatus::Approved;
        assert!(!request.is_pending());
    }
}
