//! # Xendit Rust Client
//!
//! An idiomatic, async Rust client for the [Xendit](https://www.xendit.co)
//! payments API.
//!
//! Supported resources:
//! - Balance
//! - Disbursements (IDR) and PH disbursements
//! - Virtual accounts (and virtual account payments)
//! - Invoices
//! - Payouts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xendit::{Client, RequestOptions};
//! use xendit::types::CreateDisbursementParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("xnd_development_...");
//!
//!     let params = CreateDisbursementParams::builder()
//!         .external_id("disb-12345")
//!         .bank_code("BCA")
//!         .account_holder_name("Michael Chen")
//!         .account_number("1234567890")
//!         .description("Vendor payment")
//!         .amount(500_000u64)
//!         .build()?;
//!
//!     let disbursement = client.disbursements()
//!         .create(params, RequestOptions::default())
//!         .await?;
//!
//!     println!("created disbursement {}", disbursement.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Global configuration
//!
//! A process-wide default client can be installed once and read by any
//! call site, mirroring the "configure once, use anywhere" style of the
//! official SDKs:
//!
//! ```rust,no_run
//! use xendit::Client;
//!
//! # async fn example() -> Result<(), xendit::Error> {
//! Client::set_global(Client::new("xnd_development_..."));
//!
//! let balance = Client::global()?
//!     .balance()
//!     .get(None, Default::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use options::RequestOptions;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use xendit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, RequestOptions, Result,
        types::{
            AccountType, Balance, CreateDisbursementParams, CreateInvoiceParams,
            CreatePayoutParams, CreatePhDisbursementParams, CreateVirtualAccountParams,
            Disbursement, DisbursementBank, Invoice, ListInvoicesParams, Payout,
            PhDisbursement, VirtualAccount, VirtualAccountBank, VirtualAccountPayment,
        },
    };
}

/// Client version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";
