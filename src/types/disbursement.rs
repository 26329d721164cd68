//! Disbursement (IDR) types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A money transfer to an Indonesian bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disbursement {
    /// Unique identifier for the disbursement
    pub id: String,

    /// ID of the account that created the disbursement
    pub user_id: String,

    /// Caller-chosen identifier, unique per disbursement
    pub external_id: String,

    /// Amount in IDR
    pub amount: u64,

    /// Destination bank code, e.g. `BCA`
    pub bank_code: String,

    /// Name on the destination account
    pub account_holder_name: String,

    /// Description echoed back by the API
    pub disbursement_description: String,

    /// Current status: `PENDING`, `COMPLETED`, or `FAILED`
    pub status: String,

    /// Whether the transfer used an instant rail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_instant: Option<bool>,

    /// Failure code when status is `FAILED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,

    /// Receipt recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_to: Option<Vec<String>>,

    /// Receipt CC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cc: Option<Vec<String>>,

    /// Receipt BCC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_bcc: Option<Vec<String>>,
}

/// A bank that can receive disbursements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisbursementBank {
    /// Human-readable bank name
    pub name: String,

    /// Bank code used in create requests
    pub code: String,

    /// Whether disbursements to this bank are currently possible
    pub can_disburse: bool,

    /// Whether account-holder name validation is supported
    pub can_name_validate: bool,
}

/// Request parameters for creating a disbursement.
///
/// `description` is a request-only field; the API echoes it back as
/// `disbursement_description` on the [`Disbursement`] object.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateDisbursementParams {
    /// Caller-chosen identifier, unique per disbursement
    pub external_id: String,

    /// Destination bank code, e.g. `BCA`
    pub bank_code: String,

    /// Name on the destination account
    pub account_holder_name: String,

    /// Destination account number
    pub account_number: String,

    /// Description of the transfer
    pub description: String,

    /// Amount in IDR
    pub amount: u64,

    /// Receipt recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub email_to: Option<Vec<String>>,

    /// Receipt CC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub email_cc: Option<Vec<String>>,

    /// Receipt BCC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub email_bcc: Option<Vec<String>>,
}

impl CreateDisbursementParams {
    /// Create a builder for constructing disbursement parameters.
    pub fn builder() -> CreateDisbursementParamsBuilder {
        CreateDisbursementParamsBuilder::default()
    }
}
