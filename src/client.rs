//! Main client implementation for the Xendit API

use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::RequestBuilder,
    options::RequestOptions,
    resources::{Balance, Disbursements, Invoices, Payouts, PhDisbursements, VirtualAccounts},
    DEFAULT_BASE_URL,
};

/// Process-wide default client, installed with [`Client::set_global`].
static GLOBAL_CLIENT: RwLock<Option<Client>> = RwLock::new(None);

/// Main client for interacting with the Xendit API.
///
/// The client is cheap to clone and safe to share across tasks; all state
/// lives behind an `Arc`. Authentication uses HTTP Basic with the secret key
/// as the username and an empty password, matching Xendit's API contract.
///
/// # Example
///
/// ```rust,no_run
/// use xendit::Client;
///
/// let client = Client::new("xnd_development_...");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Base URL for the API
    base_url: Url,
    /// Secret API key used for Basic auth
    secret_key: SecretString,
    /// Optional account-wide API version pin
    api_version: Option<String>,
    /// Default timeout for requests
    timeout: Duration,
    /// Custom headers to include with every request
    default_headers: http::HeaderMap,

    // Lazy-initialized resources
    balance: OnceLock<Balance>,
    disbursements: OnceLock<Disbursements>,
    ph_disbursements: OnceLock<PhDisbursements>,
    virtual_accounts: OnceLock<VirtualAccounts>,
    invoices: OnceLock<Invoices>,
    payouts: OnceLock<Payouts>,
}

impl Client {
    /// Create a new client with a secret API key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::builder()
            .secret_key(secret_key)
            .build()
            .expect("Failed to build client with provided secret key")
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> XenditClientBuilder {
        XenditClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("xendit-rust/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base_url_string = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )))
            }
        }

        let mut secret_key = config.secret_key;

        if secret_key.is_none() {
            // Try to load from environment if the `env` feature is enabled
            #[cfg(feature = "env")]
            {
                let _ = dotenvy::dotenv();
                secret_key = std::env::var("XENDIT_SECRET_KEY")
                    .ok()
                    .map(|s| SecretString::new(s.into_boxed_str()));
            }
        }

        let secret_key = secret_key.ok_or_else(|| {
            Error::MissingConfig(
                "No secret key provided. Set XENDIT_SECRET_KEY or provide one explicitly."
                    .to_string(),
            )
        })?;

        let inner = Arc::new(ClientInner {
            http_client,
            base_url,
            secret_key,
            api_version: config.api_version,
            timeout: config.timeout,
            default_headers: config.default_headers,
            balance: OnceLock::new(),
            disbursements: OnceLock::new(),
            ph_disbursements: OnceLock::new(),
            virtual_accounts: OnceLock::new(),
            invoices: OnceLock::new(),
            payouts: OnceLock::new(),
        });

        Ok(Self { inner })
    }

    /// Install a process-wide default client.
    ///
    /// Subsequent [`Client::global`] calls return a clone of this client.
    /// Installing a new client replaces the previous one.
    pub fn set_global(client: Client) {
        let mut slot = GLOBAL_CLIENT
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(client);
    }

    /// Get the process-wide default client.
    ///
    /// The slot is read at invocation time, so replacing the global client
    /// affects later calls but never requests already in flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] when no global client is installed.
    pub fn global() -> Result<Client> {
        GLOBAL_CLIENT
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or_else(|| {
                Error::MissingConfig(
                    "No global client configured. Call Client::set_global first.".to_string(),
                )
            })
    }

    /// Access the Balance API.
    pub fn balance(&self) -> &Balance {
        self.inner
            .balance
            .get_or_init(|| Balance::new(self.clone()))
    }

    /// Access the Disbursements API (IDR).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use xendit::{Client, RequestOptions};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let disbursement = client.disbursements()
    ///     .get("57c5aa7a36e3b6a709b6e148", RequestOptions::default())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn disbursements(&self) -> &Disbursements {
        self.inner
            .disbursements
            .get_or_init(|| Disbursements::new(self.clone()))
    }

    /// Access the PH Disbursements API.
    pub fn ph_disbursements(&self) -> &PhDisbursements {
        self.inner
            .ph_disbursements
            .get_or_init(|| PhDisbursements::new(self.clone()))
    }

    /// Access the Virtual Accounts API.
    pub fn virtual_accounts(&self) -> &VirtualAccounts {
        self.inner
            .virtual_accounts
            .get_or_init(|| VirtualAccounts::new(self.clone()))
    }

    /// Access the Invoices API.
    pub fn invoices(&self) -> &Invoices {
        self.inner
            .invoices
            .get_or_init(|| Invoices::new(self.clone()))
    }

    /// Access the Payouts API.
    pub fn payouts(&self) -> &Payouts {
        self.inner
            .payouts
            .get_or_init(|| Payouts::new(self.clone()))
    }

    /// Create a request builder with authentication and default headers.
    ///
    /// Header precedence, lowest to highest: client defaults, client API
    /// version pin, per-call [`RequestOptions`]. The Basic auth credential
    /// comes from the per-call secret key override when present, otherwise
    /// from the client's configured key.
    pub(crate) fn request(
        &self,
        method: http::Method,
        path: &str,
        opts: &RequestOptions,
    ) -> RequestBuilder {
        let url = self
            .inner
            .base_url
            .join(path)
            .expect("Failed to construct URL");

        let secret_key = opts
            .secret_key
            .as_ref()
            .unwrap_or(&self.inner.secret_key);

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .header("authorization", basic_auth(secret_key))
            .header("content-type", "application/json");

        if let Some(api_version) = &self.inner.api_version {
            builder = builder.header("x-api-version", api_version);
        }

        // Add custom default headers
        for (key, value) in &self.inner.default_headers {
            builder = builder.header(key.as_str(), value.to_str().unwrap_or(""));
        }

        // Per-call header parameters win over everything above
        builder.headers(opts.to_headers())
    }

    /// Get the base URL for the API
    #[allow(dead_code)]
    pub(crate) fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Encode a secret key as Xendit's Basic auth credential (empty password).
fn basic_auth(secret_key: &SecretString) -> String {
    let credential =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:", secret_key.expose_secret()));
    format!("Basic {}", credential)
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct XenditClientBuilder {
    config: ClientConfig,
}

impl XenditClientBuilder {
    /// Set the secret API key.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.config.secret_key = Some(SecretString::new(secret_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the account-wide API version header value.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = Some(api_version.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a custom default header.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key: http::HeaderName = key.into().parse().expect("Invalid header name");
        let value: http::HeaderValue = value.into().parse().expect("Invalid header value");
        self.config.default_headers.insert(key, value);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
