//! Invoice types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A payment request presented to an end customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice
    pub id: String,

    /// Caller-chosen identifier
    pub external_id: String,

    /// ID of the account that created the invoice
    pub user_id: String,

    /// Current status: `PENDING`, `PAID`, `SETTLED`, or `EXPIRED`
    pub status: String,

    /// Amount due
    pub amount: u64,

    /// Merchant display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// E-mail the invoice was sent to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hosted checkout page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,

    /// When the invoice stops accepting payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<chrono::DateTime<chrono::Utc>>,

    /// Banks offered on the checkout page; shape varies per channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_banks: Option<Vec<serde_json::Value>>,

    /// E-wallets offered on the checkout page; shape varies per channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_ewallets: Option<Vec<serde_json::Value>>,

    /// Whether a notification e-mail was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_send_email: Option<bool>,

    /// Currency of the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Amount received so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<u64>,

    /// When the invoice was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// When the invoice was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<chrono::DateTime<chrono::Utc>>,
}

/// Request parameters for creating an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct CreateInvoiceParams {
    /// Caller-chosen identifier
    pub external_id: String,

    /// Amount due
    pub amount: u64,

    /// E-mail to send the invoice to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub payer_email: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,

    /// Whether to send a notification e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub should_send_email: Option<bool>,

    /// Seconds until the invoice expires
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub invoice_duration: Option<u64>,

    /// Where to send the customer after successful payment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub success_redirect_url: Option<String>,

    /// Where to send the customer after failed payment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub failure_redirect_url: Option<String>,

    /// Restrict the checkout page to these payment methods
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub payment_methods: Option<Vec<String>>,

    /// Currency of the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub currency: Option<String>,
}

impl CreateInvoiceParams {
    /// Create a builder for constructing invoice parameters.
    pub fn builder() -> CreateInvoiceParamsBuilder {
        CreateInvoiceParamsBuilder::default()
    }
}

/// Query parameters for listing invoices.
///
/// These are rendered onto the URL query string, never into a body.
#[derive(Debug, Clone, Default)]
pub struct ListInvoicesParams {
    /// Filter by statuses, e.g. `SETTLED`, `EXPIRED`
    pub statuses: Option<Vec<String>>,

    /// Maximum number of invoices returned (1 to 100)
    pub limit: Option<u32>,

    /// Filter by caller-chosen identifier
    pub external_id: Option<String>,

    /// Only invoices created after this ISO-8601 instant
    pub created_after: Option<String>,

    /// Only invoices created before this ISO-8601 instant
    pub created_before: Option<String>,
}

impl ListInvoicesParams {
    /// Render set fields as query pairs in a stable order.
    ///
    /// `statuses` is serialized as a JSON array string, the encoding the API
    /// expects for list-valued filters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(statuses) = &self.statuses {
            if let Ok(encoded) = serde_json::to_string(statuses) {
                pairs.push(("statuses".to_string(), encoded));
            }
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(external_id) = &self.external_id {
            pairs.push(("external_id".to_string(), external_id.clone()));
        }
        if let Some(created_after) = &self.created_after {
            pairs.push(("created_after".to_string(), created_after.clone()));
        }
        if let Some(created_before) = &self.created_before {
            pairs.push(("created_before".to_string(), created_before.clone()));
        }

        pairs
    }
}
