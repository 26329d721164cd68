//! PH disbursement types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A money transfer to a Philippine bank account or e-wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhDisbursement {
    /// Unique identifier for the disbursement
    pub id: String,

    /// Caller-chosen identifier, unique per disbursement
    pub reference_id: String,

    /// Destination channel code, e.g. `PH_BDO`
    pub channel_code: String,

    /// Destination account number
    pub account_number: String,

    /// Name on the destination account
    pub account_name: String,

    /// Currency of the transfer, always `PHP`
    pub currency: String,

    /// Amount in PHP
    pub amount: f64,

    /// Description echoed back by the API
    pub disbursement_description: String,

    /// Current status: `PENDING`, `COMPLETED`, or `FAILED`
    pub status: String,

    /// Beneficiary details, shape varies per channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<serde_json::Value>,

    /// Receipt notification recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_notification: Option<ReceiptNotification>,

    /// When the disbursement was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// When the disbursement was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<chrono::DateTime<chrono::Utc>>,
}

/// Receipt e-mail recipients for a PH disbursement.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReceiptNotification {
    /// Direct recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_to: Option<Vec<String>>,

    /// CC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cc: Option<Vec<String>>,

    /// BCC recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_bcc: Option<Vec<String>>,
}

/// Request parameters for creating a PH disbursement.
///
/// `description` is a request-only field; the API echoes it back as
/// `disbursement_description` on the [`PhDisbursement`] object.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreatePhDisbursementParams {
    /// Caller-chosen identifier, unique per disbursement
    pub reference_id: String,

    /// Destination channel code, e.g. `PH_BDO`
    pub channel_code: String,

    /// Destination account number
    pub account_number: String,

    /// Name on the destination account
    pub account_name: String,

    /// Description of the transfer
    pub description: String,

    /// Currency of the transfer, always `PHP`
    pub currency: String,

    /// Amount in PHP
    pub amount: f64,

    /// Beneficiary details, shape varies per channel
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub beneficiary: Option<serde_json::Value>,

    /// Receipt notification recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub receipt_notification: Option<ReceiptNotification>,
}

impl CreatePhDisbursementParams {
    /// Create a builder for constructing PH disbursement parameters.
    pub fn builder() -> CreatePhDisbursementParamsBuilder {
        CreatePhDisbursementParamsBuilder::default()
    }
}
