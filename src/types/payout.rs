//! Payout types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A payout link a recipient redeems through their own bank or e-wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    /// Unique identifier for the payout
    pub id: String,

    /// Caller-chosen identifier
    pub external_id: String,

    /// Amount to pay out
    pub amount: u64,

    /// Current status: `PENDING`, `CLAIMED`, `COMPLETED`, `FAILED`,
    /// `EXPIRED`, or `VOIDED`
    pub status: String,

    /// E-mail the payout link was sent to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Redemption page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_url: Option<String>,

    /// Merchant display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// When the payout link expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// When the payout was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// Failure reason when status is `FAILED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Request parameters for creating a payout.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreatePayoutParams {
    /// Caller-chosen identifier
    pub external_id: String,

    /// Amount to pay out
    pub amount: u64,

    /// E-mail to send the payout link to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub email: Option<String>,
}

impl CreatePayoutParams {
    /// Create a builder for constructing payout parameters.
    pub fn builder() -> CreatePayoutParamsBuilder {
        CreatePayoutParamsBuilder::default()
    }
}
