//! Virtual Accounts API endpoint

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{
        CreateVirtualAccountParams, UpdateVirtualAccountParams, VirtualAccount,
        VirtualAccountBank, VirtualAccountPayment,
    },
};

/// Virtual Accounts API resource.
#[derive(Clone)]
pub struct VirtualAccounts {
    client: Client,
}

impl VirtualAccounts {
    /// Create a new VirtualAccounts resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new virtual account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use xendit::{Client, RequestOptions};
    /// # use xendit::types::CreateVirtualAccountParams;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let params = CreateVirtualAccountParams::builder()
    ///     .external_id("va-12345")
    ///     .bank_code("BNI")
    ///     .name("Budi Setiawan")
    ///     .build()?;
    ///
    /// let va = client.virtual_accounts()
    ///     .create(params, RequestOptions::default())
    ///     .await?;
    /// println!("account number: {}", va.account_number);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        params: CreateVirtualAccountParams,
        opts: RequestOptions,
    ) -> Result<VirtualAccount> {
        self.client
            .request(http::Method::POST, "/callback_virtual_accounts", &opts)
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// Get a virtual account by its ID.
    pub async fn get(&self, id: &str, opts: RequestOptions) -> Result<VirtualAccount> {
        self.client
            .request(
                http::Method::GET,
                &format!("/callback_virtual_accounts/{}", id),
                &opts,
            )
            .send()
            .await?
            .parse_result()
    }

    /// Update a virtual account.
    ///
    /// Only fields set on `params` are sent; everything else keeps its
    /// current value on the remote side.
    pub async fn update(
        &self,
        id: &str,
        params: UpdateVirtualAccountParams,
        opts: RequestOptions,
    ) -> Result<VirtualAccount> {
        self.client
            .request(
                http::Method::PATCH,
                &format!("/callback_virtual_accounts/{}", id),
                &opts,
            )
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// List banks that can issue virtual accounts.
    pub async fn get_banks(&self, opts: RequestOptions) -> Result<Vec<VirtualAccountBank>> {
        self.client
            .request(http::Method::GET, "/available_virtual_account_banks", &opts)
            .send()
            .await?
            .parse_result()
    }

    /// Get a payment received on a virtual account.
    ///
    /// The `payment_id=` segment is part of the remote route itself, not a
    /// query parameter.
    pub async fn get_payment(
        &self,
        payment_id: &str,
        opts: RequestOptions,
    ) -> Result<VirtualAccountPayment> {
        self.client
            .request(
                http::Method::GET,
                &format!("/callback_virtual_account_payments/payment_id={}", payment_id),
                &opts,
            )
            .send()
            .await?
            .parse_result()
    }
}
