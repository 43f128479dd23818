// SPDX-License-Identifier: MPL-2.0
//! Domain types mirroring the backend's JSON documents and the operational
//! data displayed in the dashboard.
//!
//! Catalog entities ([`CardType`], [`AccountType`], [`CreditType`]) are
//! owned by the external REST backend; the structs here follow its document
//! shapes (MongoDB-style `_id`, camelCase fields). Users, service requests,
//! and dashboard metrics are mock operational data served from [`samples`].

pub mod account;
pub mod card;
pub mod credit;
pub mod metrics;
pub mod request;
pub mod samples;
pub mod user;

pub use account::{AccountFees, AccountRequirements, AccountType};
pub use card::{CardFees, CardRequirements, CardType};
pub use credit::{CreditFees, CreditRequirements, CreditType};
pub use metrics::{ActivityPoint, RecentTransaction, StatSummary, TransactionPoint};
pub use request::{Applicant, RequestStatus, ServiceRequest};
pub use user::{User, UserStatus};

use serde::{Deserialize, Serialize};

/// A short selling point with an associated icon name.
///
/// Icon names follow the backend's vocabulary (e.g. `credit-card`, `home`,
/// `savings`); unknown names fall back to a generic icon at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Benefit {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

impl Benefit {
    pub fn new(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
        }
    }
}
