//! Invoices API endpoint

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{CreateInvoiceParams, Invoice, ListInvoicesParams},
};

/// Invoices API resource.
#[derive(Clone)]
pub struct Invoices {
    client: Client,
}

impl Invoices {
    /// Create a new Invoices resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new invoice.
    pub async fn create(
        &self,
        params: CreateInvoiceParams,
        opts: RequestOptions,
    ) -> Result<Invoice> {
        self.client
            .request(http::Method::POST, "/v2/invoices", &opts)
            .json(&params)?
            .send()
            .await?
            .parse_result()
    }

    /// Get an invoice by its ID.
    pub async fn get(&self, id: &str, opts: RequestOptions) -> Result<Invoice> {
        self.client
            .request(http::Method::GET, &format!("/v2/invoices/{}", id), &opts)
            .send()
            .await?
            .parse_result()
    }

    /// List invoices matching the given filters.
    pub async fn list_all(
        &self,
        params: ListInvoicesParams,
        opts: RequestOptions,
    ) -> Result<Vec<Invoice>> {
        let mut builder = self.client.request(http::Method::GET, "/v2/invoices", &opts);

        for (key, value) in params.to_query() {
            builder = builder.query(&key, &value);
        }

        builder.send().await?.parse_result()
    }

    /// Expire an invoice so it can no longer be paid.
    ///
    /// The trailing `!` is part of the remote route.
    pub async fn expire(&self, id: &str, opts: RequestOptions) -> Result<Invoice> {
        self.client
            .request(http::Method::POST, &format!("/invoices/{}/expire!", id), &opts)
            .send()
            .await?
            .parse_result()
    }
}
