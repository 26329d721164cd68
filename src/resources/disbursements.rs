//! Disbursements API endpoint (IDR)

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{CreateDisbursementParams, Disbursement, DisbursementBank},
};

/// Disbursements API resource.
///
/// Money transfers to Indonesian bank accounts.
#[derive(Clone)]
pub struct Disbursements {
    client: Client,
}

impl Disbursements {
    /// Create a new Disbursements resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new disbursement.
    ///
    /// Passing an idempotency key through `opts` makes the call safe to
    /// repeat; the API replays the original result for a reused key.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use xendit::{Client, RequestOptions};
    /// # use xendit::types::CreateDisbursementParams;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let params = CreateDisbursementParams::builder()
    ///     .external_id("disb-12345")
    ///     .bank_code("BCA")
    ///     .account_holder_name("Rizki Pratama")
    ///     .account_number("1234567890")
    ///     .description("Vendor payment")
    ///     .amount(500_000u64)
    ///     .build()?;
    ///
    /// let disbursement = client.disbursements()
    ///     .create(params, RequestOptions::new().random_idempotency_key())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        params: CreateDisbursementParams,
        opts: RequestOptions,
    ) -> Result<Disbursement> {
        self.client
            .request(http::Method::POST, "/disbursements", &opts)
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// Get a disbursement by its ID.
    pub async fn get(&self, id: &str, opts: RequestOptions) -> Result<Disbursement> {
        self.client
            .request(http::Method::GET, &format!("/disbursements/{}", id), &opts)
            .send()
            .await?
            .parse_result()
    }

    /// Get disbursements sharing an external ID.
    ///
    /// Returns every disbursement created with the given external ID; the
    /// list is empty when none match.
    pub async fn get_by_ext_id(
        &self,
        external_id: &str,
        opts: RequestOptions,
    ) -> Result<Vec<Disbursement>> {
        self.client
            .request(http::Method::GET, "/disbursements", &opts)
            .query("external_id", external_id)
            .send()
            .await?
            .parse_result()
    }

    /// List banks currently available for disbursements.
    pub async fn get_available_banks(&self, opts: RequestOptions) -> Result<Vec<DisbursementBank>> {
        self.client
            .request(http::Method::GET, "/available_disbursements_banks", &opts)
            .send()
            .await?
            .parse_result()
    }
}
