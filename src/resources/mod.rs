//! API resources
//!
//! One module per Xendit resource. Each resource is a thin struct holding a
//! [`crate::Client`] clone; operations build a request, send it, and hand
//! the response to [`crate::http::Response::parse_result`].

pub use balance::Balance;
pub use disbursements::Disbursements;
pub use invoices::Invoices;
pub use payouts::Payouts;
pub use ph_disbursements::PhDisbursements;
pub use virtual_accounts::VirtualAccounts;

mod balance;
mod disbursements;
mod invoices;
mod payouts;
mod ph_disbursements;
mod virtual_accounts;
