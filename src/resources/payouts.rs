//! Payouts API endpoint

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{CreatePayoutParams, Payout},
};

/// Payouts API resource.
///
/// Payout links recipients redeem through their own bank or e-wallet.
#[derive(Clone)]
pub struct Payouts {
    client: Client,
}

impl Payouts {
    /// Create a new Payouts resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new payout.
    pub async fn create(&self, params: CreatePayoutParams, opts: RequestOptions) -> Result<Payout> {
        self.client
            .request(http::Method::POST, "/payouts", &opts)
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// Get a payout by its ID.
    pub async fn get(&self, id: &str, opts: RequestOptions) -> Result<Payout> {
        self.client
            .request(http::Method::GET, &format!("/payouts/{}", id), &opts)
            .send()
            .await?
            .parse_result()
    }

    /// Void an unclaimed payout.
    ///
    /// Only payouts still in `PENDING` can be voided; anything else comes
    /// back as an API error.
    pub async fn void(&self, id: &str, opts: RequestOptions) -> Result<Payout> {
        self.client
            .request(http::Method::POST, &format!("/payouts/{}/void", id), &opts)
            .send()
            .await?
            .parse_result()
    }
}
