//! Balance API endpoint

use crate::{
    client::Client,
    error::Result,
    options::RequestOptions,
    types::{self, AccountType},
};

/// Balance API resource.
#[derive(Clone)]
pub struct Balance {
    client: Client,
}

impl Balance {
    /// Create a new Balance resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the balance for an account type.
    ///
    /// Omitting the account type returns the `CASH` balance, the API's
    /// default.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use xendit::{Client, RequestOptions};
    /// # use xendit::types::AccountType;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let balance = client.balance()
    ///     .get(Some(AccountType::Cash), RequestOptions::default())
    ///     .await?;
    /// println!("available: {}", balance.balance);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(
        &self,
        account_type: Option<AccountType>,
        opts: RequestOptions,
    ) -> Result<types::Balance> {
        self.client
            .request(http::Method::GET, "/balance", &opts)
            .query_opt("account_type", account_type.map(|t| t.as_str()))
            .send()
            .await?
            .parse_result()
    }
}
