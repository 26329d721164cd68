//! Per-request options
//!
//! Xendit operations accept a handful of parameters that travel as HTTP
//! headers rather than in the JSON body: the sub-account to act on behalf
//! of, an idempotency key, and an API version pin. [`RequestOptions`] is the
//! split point that keeps those out of the serialized params structs, and it
//! also carries an optional per-call secret key that overrides the client's
//! configured key for a single request.

use http::{HeaderMap, HeaderName, HeaderValue};
use secrecy::SecretString;

/// Header for acting on behalf of an owned sub-account (XenPlatform).
pub const FOR_USER_ID_HEADER: &str = "for-user-id";

/// Header carrying the caller-chosen idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// Header pinning the API version for a single call.
pub const API_VERSION_HEADER: &str = "x-api-version";

/// Options applied to a single API call.
///
/// All fields default to unset; `RequestOptions::default()` is the common
/// case for calls with no header parameters.
///
/// # Example
///
/// ```rust
/// use xendit::RequestOptions;
///
/// let opts = RequestOptions::new()
///     .for_user_id("5f9a3fbd571a1c4068aa40ce")
///     .idempotency_key("disb-1234");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Sub-account user ID, sent as the `for-user-id` header
    pub for_user_id: Option<String>,

    /// Idempotency key, sent as the `X-IDEMPOTENCY-KEY` header
    pub idempotency_key: Option<String>,

    /// API version override, sent as the `X-API-VERSION` header
    pub api_version: Option<String>,

    /// Secret key override for this call only; takes precedence over the
    /// key the client was built with
    pub secret_key: Option<SecretString>,
}

impl RequestOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Act on behalf of a sub-account.
    pub fn for_user_id(mut self, for_user_id: impl Into<String>) -> Self {
        self.for_user_id = Some(for_user_id.into());
        self
    }

    /// Set an explicit idempotency key.
    pub fn idempotency_key(mut self, idempotency_key: impl Into<String>) -> Self {
        self.idempotency_key = Some(idempotency_key.into());
        self
    }

    /// Set a random UUIDv4 idempotency key.
    pub fn random_idempotency_key(mut self) -> Self {
        self.idempotency_key = Some(uuid::Uuid::new_v4().to_string());
        self
    }

    /// Pin the API version for this call.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Override the secret key for this call only.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(SecretString::new(secret_key.into().into_boxed_str()));
        self
    }

    /// Render the header-destined fields as an HTTP header map.
    ///
    /// The secret key is not included here; authentication headers are
    /// assembled by the client so the override logic lives in one place.
    pub fn to_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(for_user_id) = &self.for_user_id {
            insert(&mut headers, FOR_USER_ID_HEADER, for_user_id);
        }
        if let Some(idempotency_key) = &self.idempotency_key {
            insert(&mut headers, IDEMPOTENCY_KEY_HEADER, idempotency_key);
        }
        if let Some(api_version) = &self.api_version {
            insert(&mut headers, API_VERSION_HEADER, api_version);
        }

        headers
    }
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}
