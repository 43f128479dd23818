// SPDX-License-Identifier: MPL-2.0
//! Account type catalog entity.

use super::Benefit;
use serde::{Deserialize, Serialize};

/// A bank account product (current, savings, student, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountType {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon name from the backend's vocabulary.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub requirements: AccountRequirements,
    #[serde(default)]
    pub fees: AccountFees,
    #[serde(rename = "interestRate", default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountRequirements {
    #[serde(rename = "minDeposit", default)]
    pub min_deposit: f64,
    #[serde(rename = "minBalance", default, skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountFees {
    #[serde(default)]
    pub monthly: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<f64>,
    #[serde(
        rename = "internationalTransfer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub international_transfer: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_document() {
        let json = r#"{
            "_id": "a01",
            "name": "Savings Account",
            "description": "Grow your money",
            "icon": "savings",
            "requirements": {"minDeposit": 50.0, "minBalance": 10.0},
            "fees": {"monthly": 2.0, "internationalTransfer": 12.5},
            "interestRate": 4.25
        }"#;
        let account: AccountType = serde_json::from_str(json).expect("valid document");
        assert_eq!(account.requirements.min_balance, Some(10.0));
        assert_eq!(account.fees.international_transfer, Some(12.5));
        assert_eq!(account.interest_rate, Some(4.25));
    }

    #[test]
    fn optional_rates_are_omitted_when_absent() {
        let account = AccountType {
            name: "Current".into(),
            ..AccountType::default()
        };
        let json = serde_json::to_string(&account).expect("serializable");
        assert!(!json.contains("interestRate"));
        assert!(!json.contains("minBalance"));
    }
}
