// SPDX-License-Identifier: MPL-2.0
//! Card type catalog entity.

use super::Benefit;
use serde::{Deserialize, Serialize};

/// A banking card product offered to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardType {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Short marketing category (e.g. "travel", "premium").
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub description: String,
    /// Longer pitch shown on the detail card ("why choose this card").
    #[serde(default)]
    pub why: String,
    /// Data URL or remote URL of the card artwork.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub fees: CardFees,
    #[serde(default)]
    pub requirements: CardRequirements,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CardFees {
    #[serde(default)]
    pub annual: f64,
    #[serde(default)]
    pub withdrawal: f64,
    #[serde(default)]
    pub replacement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardRequirements {
    #[serde(rename = "minIncome", default)]
    pub min_income: f64,
    #[serde(rename = "employmentStatus", default)]
    pub employment_status: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_document() {
        let json = r#"{
            "_id": "662f1c",
            "name": "STB Travel",
            "tag": "travel",
            "description": "For frequent flyers",
            "why": "Zero foreign exchange fees",
            "features": ["Lounge access"],
            "benefits": [{"text": "Travel insurance", "icon": "travel"}],
            "fees": {"annual": 120.0, "withdrawal": 1.5, "replacement": 30.0},
            "requirements": {"minIncome": 2000.0, "employmentStatus": ["employed"]}
        }"#;
        let card: CardType = serde_json::from_str(json).expect("valid document");
        assert_eq!(card.id, "662f1c");
        assert_eq!(card.requirements.min_income, 2000.0);
        assert_eq!(card.benefits[0].icon, "travel");
    }

    #[test]
    fn missing_optional_fields_default() {
        let card: CardType = serde_json::from_str(r#"{"name": "Bare"}"#).expect("valid");
        assert!(card.id.is_empty());
        assert!(card.features.is_empty());
        assert_eq!(card.fees.annual, 0.0);
    }
}
