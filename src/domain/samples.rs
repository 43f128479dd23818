// SPDX-License-Identifier: MPL-2.0
//! Mock operational data.
//!
//! The backend only owns the catalog entities; users, service requests, and
//! dashboard metrics are demo data seeded here, matching the figures the
//! public-facing prototype ships with.

use super::metrics::{ActivityPoint, RecentTransaction, StatSummary, TransactionPoint};
use super::request::{Applicant, RequestStatus, ServiceRequest};
use super::user::{User, UserStatus};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date literal")
}

/// Seed customer directory.
pub fn users() -> Vec<User> {
    let raw: [(&str, &str, &str, UserStatus, (i32, u32, u32), (i32, u32, u32)); 8] = [
        (
            "Ahmed Ben Ali",
            "ahmed.benali@example.com",
            "Premium",
            UserStatus::Active,
            (2023, 1, 15),
            (2023, 5, 10),
        ),
        (
            "Sarra Mansour",
            "sarra.mansour@example.com",
            "Standard",
            UserStatus::Active,
            (2023, 2, 20),
            (2023, 5, 9),
        ),
        (
            "Mohamed Karim",
            "mohamed.karim@example.com",
            "Premium",
            UserStatus::Inactive,
            (2023, 3, 5),
            (2023, 4, 28),
        ),
        (
            "Leila Trabelsi",
            "leila.trabelsi@example.com",
            "Standard",
            UserStatus::Active,
            (2023, 3, 15),
            (2023, 5, 10),
        ),
        (
            "Kamel Gharbi",
            "kamel.gharbi@example.com",
            "Premium",
            UserStatus::Suspended,
            (2023, 4, 1),
            (2023, 4, 20),
        ),
        (
            "Amina Belhaj",
            "amina.belhaj@example.com",
            "Standard",
            UserStatus::Active,
            (2023, 4, 10),
            (2023, 5, 8),
        ),
        (
            "Youssef Msakni",
            "youssef.msakni@example.com",
            "Premium",
            UserStatus::Active,
            (2023, 4, 15),
            (2023, 5, 9),
        ),
        (
            "Fatma Riahi",
            "fatma.riahi@example.com",
            "Standard",
            UserStatus::Inactive,
            (2023, 4, 20),
            (2023, 5, 1),
        ),
    ];

    raw.into_iter()
        .enumerate()
        .map(|(i, (name, email, tier, status, joined, seen))| User {
            id: (i + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            status,
            account_type: tier.to_string(),
            join_date: date(joined.0, joined.1, joined.2),
            last_login: date(seen.0, seen.1, seen.2),
        })
        .collect()
}

fn applicant(name: &str, email: &str) -> Applicant {
    let avatar = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    Applicant {
        name: name.to_string(),
        email: email.to_string(),
        avatar,
    }
}

/// Pending and resolved card applications.
pub fn card_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "1".into(),
            applicant: applicant("Ahmed Ben Ali", "ahmed.benali@example.com"),
            product: "STB Travel".into(),
            request_date: date(2023, 5, 1),
            status: RequestStatus::Pending,
        },
        ServiceRequest {
            id: "2".into(),
            applicant: applicant("Sarra Mansour", "sarra.mansour@example.com"),
            product: "Carte STB Epargne".into(),
            request_date: date(2023, 5, 2),
            status: RequestStatus::Pending,
        },
        ServiceRequest {
            id: "3".into(),
            applicant: applicant("Mohamed Karim", "mohamed.karim@example.com"),
            product: "Carte Visa Electron Nationale".into(),
            request_date: date(2023, 5, 3),
            status: RequestStatus::Approved,
        },
        ServiceRequest {
            id: "4".into(),
            applicant: applicant("Leila Trabelsi", "leila.trabelsi@example.com"),
            product: "Carte CIB3".into(),
            request_date: date(2023, 5, 4),
            status: RequestStatus::Rejected,
        },
    ]
}

/// Pending and resolved account-opening applications.
pub fn account_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "1".into(),
            applicant: applicant("Kamel Gharbi", "kamel.gharbi@example.com"),
            product: "Current Account".into(),
            request_date: date(2023, 5, 1),
            status: RequestStatus::Pending,
        },
        ServiceRequest {
            id: "2".into(),
            applicant: applicant("Amina Belhaj", "amina.belhaj@example.com"),
            product: "Savings Account".into(),
            request_date: date(2023, 5, 2),
            status: RequestStatus::Pending,
        },
        ServiceRequest {
            id: "3".into(),
            applicant: applicant("Youssef Msakni", "youssef.msakni@example.com"),
            product: "Student Account".into(),
            request_date: date(2023, 5, 3),
            status: RequestStatus::Approved,
        },
    ]
}

/// Pending and resolved credit applications.
pub fn credit_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "1".into(),
            applicant: applicant("Fatma Riahi", "fatma.riahi@example.com"),
            product: "Home Loan".into(),
            request_date: date(2023, 5, 1),
            status: RequestStatus::Pending,
        },
        ServiceRequest {
            id: "2".into(),
            applicant: applicant("Ahmed Ben Ali", "ahmed.benali@example.com"),
            product: "Car Loan".into(),
            request_date: date(2023, 5, 2),
            status: RequestStatus::Approved,
        },
        ServiceRequest {
            id: "3".into(),
            applicant: applicant("Leila Trabelsi", "leila.trabelsi@example.com"),
            product: "Personal Loan".into(),
            request_date: date(2023, 5, 4),
            status: RequestStatus::Pending,
        },
    ]
}

/// Headline stat cards.
pub fn stat_summaries() -> Vec<StatSummary> {
    vec![
        StatSummary {
            title_key: "dashboard-stat-users".into(),
            value: "12,345".into(),
            delta_key: "dashboard-delta-count".into(),
            delta_value: "+180".into(),
            icon: "users".into(),
        },
        StatSummary {
            title_key: "dashboard-stat-cards".into(),
            value: "8,764".into(),
            delta_key: "dashboard-delta-count".into(),
            delta_value: "+340".into(),
            icon: "credit-card".into(),
        },
        StatSummary {
            title_key: "dashboard-stat-accounts".into(),
            value: "15,672".into(),
            delta_key: "dashboard-delta-count".into(),
            delta_value: "+520".into(),
            icon: "wallet".into(),
        },
        StatSummary {
            title_key: "dashboard-stat-revenue".into(),
            value: "1.2M DT".into(),
            delta_key: "dashboard-delta-percent".into(),
            delta_value: "+12%".into(),
            icon: "dollar".into(),
        },
    ]
}

/// Hourly transaction-volume series.
pub fn transaction_volume() -> Vec<TransactionPoint> {
    [
        ("00:00", 1200.0),
        ("03:00", 900.0),
        ("06:00", 1500.0),
        ("09:00", 2800.0),
        ("12:00", 3200.0),
        ("15:00", 4100.0),
        ("18:00", 3600.0),
        ("21:00", 2400.0),
    ]
    .into_iter()
    .map(|(time, amount)| TransactionPoint {
        time: time.to_string(),
        amount,
    })
    .collect()
}

/// Monthly active/new user series.
pub fn user_activity() -> Vec<ActivityPoint> {
    [
        ("Jan", 400.0, 240.0),
        ("Feb", 300.0, 139.0),
        ("Mar", 200.0, 980.0),
        ("Apr", 278.0, 390.0),
        ("May", 189.0, 480.0),
        ("Jun", 239.0, 380.0),
        ("Jul", 349.0, 430.0),
    ]
    .into_iter()
    .map(|(month, active, new)| ActivityPoint {
        month: month.to_string(),
        active,
        new,
    })
    .collect()
}

/// Most recent settlement activity.
pub fn recent_transactions() -> Vec<RecentTransaction> {
    [
        ("1", "Ahmed Ben Ali", "transaction-withdrawal", "1,200 DT", "10:30 AM", "status-completed"),
        ("2", "Sarra Mansour", "transaction-deposit", "3,500 DT", "11:45 AM", "status-completed"),
        ("3", "Mohamed Karim", "transaction-transfer", "750 DT", "12:15 PM", "status-pending"),
        ("4", "Leila Trabelsi", "transaction-card-payment", "450 DT", "1:30 PM", "status-completed"),
        ("5", "Kamel Gharbi", "transaction-withdrawal", "900 DT", "2:45 PM", "status-failed"),
    ]
    .into_iter()
    .map(|(id, user, kind, amount, time, status)| RecentTransaction {
        id: id.to_string(),
        user: user.to_string(),
        kind_key: kind.to_string(),
        amount: amount.to_string(),
        time: time.to_string(),
        status_key: status.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_unique() {
        let users = users();
        let mut ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn applicant_avatars_are_initials() {
        for request in card_requests() {
            assert_eq!(request.applicant.avatar.len(), 2);
        }
    }

    #[test]
    fn chart_series_are_non_empty() {
        assert!(!transaction_volume().is_empty());
        assert!(!user_activity().is_empty());
        assert_eq!(stat_summaries().len(), 4);
    }
}
