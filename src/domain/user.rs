use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, Searchable, contains_ci};

/// Account status shown in the users table and used as its list filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Disabled,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Disabled => "disabled",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row of the users list view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Wallet address. Some endpoints name this field `userId`.
    #[serde(alias = "userId")]
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub country: String,
    pub registered_at: DateTime<Utc>,
    pub status: UserStatus,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.id, term)
            || contains_ci(&self.username, term)
            || contains_ci(&self.full_name, term)
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.status.as_str().eq_ignore_ascii_case(filter)
    }
}

/// Monetary amount with its currency, as returned by the detail endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonetaryValue {
    pub amount: f64,
    pub currency: String,
}

/// Full user record returned by the fetch-by-identifier endpoint.
///
/// Richer than the list row: verification and suspension flags, transaction
/// statistics, referral data and ratings. Nullable wire fields stay optional
/// so a sparse backend response still deserializes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(rename = "userId", alias = "id")]
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub verification_level: u32,
    #[serde(rename = "is_2Fa", default)]
    pub is_two_fa: bool,
    #[serde(rename = "is_suspend", default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_transaction_value: Option<MonetaryValue>,
    #[serde(default)]
    pub completed_orders: u64,
    #[serde(rename = "completionRates", default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub referred_by: Option<String>,
    #[serde(default)]
    pub total_referrals: u64,
    #[serde(default)]
    pub total_commission: f64,
    #[serde(default)]
    pub commission_currency: Option<String>,
    #[serde(default)]
    pub good_rating: u64,
    #[serde(default)]
    pub bad_rating: u64,
}

impl UserDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for UserDetails {
    fn id(&self) -> &str {
        &self.id
    }
}
