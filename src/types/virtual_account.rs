//! Virtual account types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A fixed virtual account that customers pay into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualAccount {
    /// Unique identifier for the virtual account
    pub id: String,

    /// ID of the account that owns the virtual account
    pub owner_id: String,

    /// Caller-chosen identifier
    pub external_id: String,

    /// Issuing bank code, e.g. `BNI`
    pub bank_code: String,

    /// Merchant code prefix assigned by the bank
    pub merchant_code: String,

    /// The virtual account number customers transfer to
    pub account_number: String,

    /// Display name shown to the payer
    pub name: String,

    /// Current status: `PENDING`, `ACTIVE`, or `INACTIVE`
    pub status: String,

    /// Whether payments above `expected_amount` are rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,

    /// Whether the account deactivates after one payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// Currency of the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// When the account stops accepting payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<chrono::DateTime<chrono::Utc>>,

    /// Suggested payment amount shown to the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<u64>,

    /// Exact amount a closed account accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<u64>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bank that can issue virtual accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualAccountBank {
    /// Human-readable bank name
    pub name: String,

    /// Bank code used in create requests
    pub code: String,
}

/// A payment received on a virtual account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualAccountPayment {
    /// Unique identifier for this payment record
    pub id: String,

    /// Payment ID referenced in callbacks
    pub payment_id: String,

    /// ID of the virtual account that was paid
    pub callback_virtual_account_id: String,

    /// External ID of the paid virtual account
    pub external_id: String,

    /// Account number that received the payment
    pub account_number: String,

    /// Issuing bank code
    pub bank_code: String,

    /// Amount received
    pub amount: u64,

    /// When the bank registered the transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// Merchant code of the receiving account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,

    /// Currency of the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Request parameters for creating a virtual account.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateVirtualAccountParams {
    /// Caller-chosen identifier
    pub external_id: String,

    /// Issuing bank code, e.g. `BNI`
    pub bank_code: String,

    /// Display name shown to the payer
    pub name: String,

    /// Requested account number; omitted for bank-assigned numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub virtual_account_number: Option<String>,

    /// Suggested payment amount shown to the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub suggested_amount: Option<u64>,

    /// Whether payments above `expected_amount` are rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_closed: Option<bool>,

    /// Exact amount a closed account accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub expected_amount: Option<u64>,

    /// When the account stops accepting payments
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub expiration_date: Option<chrono::DateTime<chrono::Utc>>,

    /// Whether the account deactivates after one payment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub is_single_use: Option<bool>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
}

impl CreateVirtualAccountParams {
    /// Create a builder for constructing virtual account parameters.
    pub fn builder() -> CreateVirtualAccountParamsBuilder {
        CreateVirtualAccountParamsBuilder::default()
    }
}

/// Request parameters for updating a virtual account.
///
/// Every field is optional; only set fields are sent, so an empty update is
/// a no-op on the remote side.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateVirtualAccountParams {
    /// Suggested payment amount shown to the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<u64>,

    /// Exact amount a closed account accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<u64>,

    /// When the account stops accepting payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<chrono::DateTime<chrono::Utc>>,

    /// Whether the account deactivates after one payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
