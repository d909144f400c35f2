//! Trade and reward transaction records for the transactions view.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, Searchable, contains_ci};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

impl Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Successful,
    Pending,
    Canceled,
}

impl TradeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeStatus::Successful => "successful",
            TradeStatus::Pending => "pending",
            TradeStatus::Canceled => "canceled",
        }
    }
}

impl Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Buy/sell trade row of the transactions view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub date: DateTime<Utc>,
    pub user_id: String,
    /// Formatted amount as rendered, e.g. "0.5 ETH".
    pub amount: String,
    pub status: TradeStatus,
    pub hash: String,
}

impl Record for Trade {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Trade {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.id, term)
            || contains_ci(&self.user_id, term)
            || contains_ci(&self.hash, term)
    }

    /// The view exposes both a type and a status select; a single filter
    /// value matches whichever of the two it names.
    fn matches_filter(&self, filter: &str) -> bool {
        self.trade_type.as_str().eq_ignore_ascii_case(filter)
            || self.status.as_str().eq_ignore_ascii_case(filter)
    }
}

/// Reward payout row of the transactions view.
///
/// Reward types are free-form on the wire ("daily task", "referral",
/// "linking social media", ...), so no enum here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    #[serde(rename = "type")]
    pub reward_type: String,
    pub date: DateTime<Utc>,
    pub user_id: String,
    /// Formatted amount as rendered, e.g. "10 points".
    pub reward_amount: String,
    pub reward_balance: String,
}

impl Record for Reward {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Reward {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.id, term)
            || contains_ci(&self.user_id, term)
            || contains_ci(&self.reward_type, term)
    }
}
