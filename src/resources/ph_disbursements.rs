//! PH Disbursements API endpoint

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{CreatePhDisbursementParams, PhDisbursement},
};

/// PH Disbursements API resource.
///
/// Money transfers to Philippine bank accounts and e-wallets. Shares the
/// `/disbursements` path with the IDR API; the account's region and the
/// PHP currency in the body select the PH processing pipeline.
#[derive(Clone)]
pub struct PhDisbursements {
    client: Client,
}

impl PhDisbursements {
    /// Create a new PhDisbursements resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new PH disbursement.
    ///
    /// Sub-account, idempotency key, and API version pin travel as headers
    /// via `opts` and never appear in the JSON body.
    pub async fn create(
        &self,
        params: CreatePhDisbursementParams,
        opts: RequestOptions,
    ) -> Result<PhDisbursement> {
        self.client
            .request(http::Method::POST, "/disbursements", &opts)
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// Get a PH disbursement by its ID.
    pub async fn get(&self, id: &str, opts: RequestOptions) -> Result<PhDisbursement> {
        self.client
            .request(http::Method::GET, &format!("/disbursements/{}", id), &opts)
            .send()
            .await?
            .parse_result()
    }

    /// Get PH disbursements sharing a reference ID.
    pub async fn get_by_reference_id(
        &self,
        reference_id: &str,
        opts: RequestOptions,
    ) -> Result<Vec<PhDisbursement>> {
        self.client
            .request(http::Method::GET, "/disbursements", &opts)
            .query("reference_id", reference_id)
            .send()
            .await?
            .parse_result()
    }
}
