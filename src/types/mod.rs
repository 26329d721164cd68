//! Typed request parameters and response DTOs
//!
//! Response types are flat mirrors of the JSON the API returns: every field
//! present in a response maps to a struct field, with `Option` for fields the
//! API omits depending on resource state. Request params structs serialize to
//! the exact body the API expects; header-destined parameters never appear
//! here (see [`crate::RequestOptions`]).

pub use balance::{AccountType, Balance};
pub use disbursement::{
    CreateDisbursementParams, CreateDisbursementParamsBuilder, Disbursement, DisbursementBank,
};
pub use invoice::{
    CreateInvoiceParams, CreateInvoiceParamsBuilder, Invoice, ListInvoicesParams,
};
pub use payout::{CreatePayoutParams, CreatePayoutParamsBuilder, Payout};
pub use ph_disbursement::{
    CreatePhDisbursementParams, CreatePhDisbursementParamsBuilder, PhDisbursement,
    ReceiptNotification,
};
pub use virtual_account::{
    CreateVirtualAccountParams, CreateVirtualAccountParamsBuilder, UpdateVirtualAccountParams,
    VirtualAccount, VirtualAccountBank, VirtualAccountPayment,
};

mod balance;
mod disbursement;
mod invoice;
mod payout;
mod ph_disbursement;
mod virtual_account;
