// SPDX-License-Identifier: MPL-2.0
//! Customer directory entries (mock operational data).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account standing of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    /// i18n key for the status label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UserStatus::Active => "status-active",
            UserStatus::Inactive => "status-inactive",
            UserStatus::Suspended => "status-suspended",
        }
    }
}

/// A customer of the bank as shown in the back-office directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    /// Subscription tier label (e.g. "Premium", "Standard").
    pub account_type: String,
    pub join_date: NaiveDate,
    pub last_login: NaiveDate,
}

impl User {
    /// Initials used for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// Case-insensitive match against name or email.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "1".into(),
            name: "Ahmed Ben Ali".into(),
            email: "ahmed.benali@example.com".into(),
            status: UserStatus::Active,
            account_type: "Premium".into(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_login: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(sample().initials(), "AB");
    }

    #[test]
    fn matches_is_case_insensitive_on_name_and_email() {
        let user = sample();
        assert!(user.matches("AHMED"));
        assert!(user.matches("benali@"));
        assert!(!user.matches("zeineb"));
    }
}
