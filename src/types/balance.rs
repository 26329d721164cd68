//! Balance types

use serde::{Deserialize, Serialize};

/// Account balance for one account type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Balance amount in the account's currency
    pub balance: i64,
}

/// Which ledger the balance is read from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Main operating balance
    Cash,
    /// Funds held for pending settlement
    Holding,
    /// Funds reserved for tax
    Tax,
}

impl AccountType {
    /// Query-parameter spelling of this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Cash => "CASH",
            AccountType::Holding => "HOLDING",
            AccountType::Tax => "TAX",
        }
    }
}
