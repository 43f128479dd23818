// SPDX-License-Identifier: MPL-2.0
//! Credit/loan type catalog entity.

use super::Benefit;
use serde::{Deserialize, Serialize};

/// A credit product (mortgage, car loan, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreditType {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "interestRate", default)]
    pub interest_rate: f64,
    /// Human-readable repayment horizon (e.g. "up to 25 years").
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub icon: String,
    /// Accent color name used by the public site; display-only here.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub requirements: CreditRequirements,
    #[serde(default)]
    pub fees: CreditFees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreditRequirements {
    #[serde(rename = "minIncome", default, skip_serializing_if = "Option::is_none")]
    pub min_income: Option<f64>,
    #[serde(
        rename = "minCreditScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_credit_score: Option<u32>,
    #[serde(
        rename = "employmentDuration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employment_duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CreditFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<f64>,
    #[serde(rename = "latePayment", default, skip_serializing_if = "Option::is_none")]
    pub late_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepayment: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_document() {
        let json = r#"{
            "_id": "c42",
            "title": "Home Loan",
            "interestRate": 6.8,
            "duration": "up to 25 years",
            "requirements": {"minIncome": 1500.0, "minCreditScore": 650},
            "fees": {"processing": 200.0, "latePayment": 15.0}
        }"#;
        let credit: CreditType = serde_json::from_str(json).expect("valid document");
        assert_eq!(credit.interest_rate, 6.8);
        assert_eq!(credit.requirements.min_credit_score, Some(650));
        assert_eq!(credit.fees.prepayment, None);
    }
}
