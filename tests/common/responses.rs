//! Common test response data
//!
//! Realistic API response fixtures matching the live API's JSON bodies.

use serde_json::json;

/// Balance response
#[allow(dead_code)]
pub fn balance_response() -> serde_json::Value {
    json!({
        "balance": 1241231
    })
}

/// Completed IDR disbursement
#[allow(dead_code)]
pub fn disbursement_response() -> serde_json::Value {
    json!({
        "id": "57e214ba82b034c325e84d6e",
        "user_id": "57c5aa7a36e3b6a709b6e148",
        "external_id": "disb-12345",
        "amount": 500000,
        "bank_code": "BCA",
        "account_holder_name": "Rizki Pratama",
        "disbursement_description": "Vendor payment",
        "status": "PENDING",
        "email_to": ["finance@example.com"],
        "email_cc": [],
        "email_bcc": []
    })
}

/// Two disbursements sharing one external ID
#[allow(dead_code)]
pub fn disbursement_list_response() -> serde_json::Value {
    json!([
        {
            "id": "57e214ba82b034c325e84d6e",
            "user_id": "57c5aa7a36e3b6a709b6e148",
            "external_id": "disb-12345",
            "amount": 500000,
            "bank_code": "BCA",
            "account_holder_name": "Rizki Pratama",
            "disbursement_description": "Vendor payment",
            "status": "COMPLETED"
        },
        {
            "id": "5a963089fd5fe5b6508f0b7b",
            "user_id": "57c5aa7a36e3b6a709b6e148",
            "external_id": "disb-12345",
            "amount": 450000,
            "bank_code": "BCA",
            "account_holder_name": "Rizki Pratama",
            "disbursement_description": "Vendor payment",
            "status": "FAILED",
            "failure_code": "INVALID_DESTINATION"
        }
    ])
}

/// Available disbursement banks
#[allow(dead_code)]
pub fn available_disbursement_banks_response() -> serde_json::Value {
    json!([
        {
            "name": "Bank Central Asia (BCA)",
            "code": "BCA",
            "can_disburse": true,
            "can_name_validate": true
        },
        {
            "name": "Bank Mandiri",
            "code": "MANDIRI",
            "can_disburse": true,
            "can_name_validate": true
        }
    ])
}

/// PH disbursement
#[allow(dead_code)]
pub fn ph_disbursement_response() -> serde_json::Value {
    json!({
        "id": "disb-43c1c218-946f-480f-b449-b8a2c2c20e4e",
        "reference_id": "ph-disb-12345",
        "channel_code": "PH_BDO",
        "account_number": "000000000100",
        "account_name": "Maria Santos",
        "currency": "PHP",
        "amount": 1500.5,
        "disbursement_description": "Payroll",
        "status": "PENDING",
        "receipt_notification": {
            "email_to": ["maria@example.com"],
            "email_cc": ["payroll@example.com"]
        },
        "created": "2021-07-01T02:32:50.893Z",
        "updated": "2021-07-01T02:32:50.893Z"
    })
}

/// Active virtual account
#[allow(dead_code)]
pub fn virtual_account_response() -> serde_json::Value {
    json!({
        "id": "5eec3a3e8dd9ea2fc97d6728",
        "owner_id": "57c5aa7a36e3b6a709b6e148",
        "external_id": "va-12345",
        "bank_code": "BNI",
        "merchant_code": "8808",
        "account_number": "8808999956275653",
        "name": "Budi Setiawan",
        "status": "PENDING",
        "is_closed": false,
        "is_single_use": false,
        "currency": "IDR",
        "expiration_date": "2051-06-18T17:00:00.000Z"
    })
}

/// Available virtual account banks
#[allow(dead_code)]
pub fn virtual_account_banks_response() -> serde_json::Value {
    json!([
        { "name": "Bank Mandiri", "code": "MANDIRI" },
        { "name": "Bank Negara Indonesia", "code": "BNI" },
        { "name": "Bank Rakyat Indonesia", "code": "BRI" }
    ])
}

/// Payment received on a virtual account
#[allow(dead_code)]
pub fn virtual_account_payment_response() -> serde_json::Value {
    json!({
        "id": "5ef18efca7d10d1b4d61fb52",
        "payment_id": "1592889080193",
        "callback_virtual_account_id": "5eec3a3e8dd9ea2fc97d6728",
        "external_id": "va-12345",
        "account_number": "8808999956275653",
        "bank_code": "BNI",
        "amount": 50000,
        "transaction_timestamp": "2020-06-23T05:11:20.193Z",
        "merchant_code": "8808",
        "currency": "IDR"
    })
}

/// Pending invoice
#[allow(dead_code)]
pub fn invoice_response() -> serde_json::Value {
    json!({
        "id": "5efda8a20425db620ec35f43",
        "external_id": "invoice-12345",
        "user_id": "57c5aa7a36e3b6a709b6e148",
        "status": "PENDING",
        "amount": 150000,
        "merchant_name": "Toko Sejahtera",
        "payer_email": "customer@example.com",
        "description": "Order #12345",
        "invoice_url": "https://invoice.xendit.co/web/invoices/5efda8a20425db620ec35f43",
        "expiry_date": "2020-07-03T09:55:14.640Z",
        "should_send_email": true,
        "currency": "IDR",
        "created": "2020-07-02T09:55:14.670Z",
        "updated": "2020-07-02T09:55:14.670Z"
    })
}

/// Two settled invoices
#[allow(dead_code)]
pub fn invoice_list_response() -> serde_json::Value {
    json!([
        {
            "id": "5efda8a20425db620ec35f43",
            "external_id": "invoice-12345",
            "user_id": "57c5aa7a36e3b6a709b6e148",
            "status": "SETTLED",
            "amount": 150000,
            "paid_amount": 150000,
            "currency": "IDR"
        },
        {
            "id": "5efda8a20425db620ec35f44",
            "external_id": "invoice-12346",
            "user_id": "57c5aa7a36e3b6a709b6e148",
            "status": "SETTLED",
            "amount": 275000,
            "paid_amount": 275000,
            "currency": "IDR"
        }
    ])
}

/// Pending payout
#[allow(dead_code)]
pub fn payout_response() -> serde_json::Value {
    json!({
        "id": "7ad3a9b9-4217-4d01-95d3-df95fa52f4cb",
        "external_id": "payout-12345",
        "amount": 250000,
        "status": "PENDING",
        "email": "recipient@example.com",
        "payout_url": "https://payout-url.com/7ad3a9b9-4217-4d01-95d3-df95fa52f4cb",
        "merchant_name": "Toko Sejahtera",
        "expiration_timestamp": "2020-06-25T10:08:25.854Z",
        "created": "2020-06-24T10:08:25.854Z"
    })
}

/// API validation error (400)
#[allow(dead_code)]
pub fn error_api_validation() -> serde_json::Value {
    json!({
        "error_code": "API_VALIDATION_ERROR",
        "message": "There was an error with the format submitted to the server."
    })
}

/// Invalid API key error (401)
#[allow(dead_code)]
pub fn error_invalid_api_key() -> serde_json::Value {
    json!({
        "error_code": "INVALID_API_KEY",
        "message": "API key is not valid"
    })
}

/// Not found error (404)
#[allow(dead_code)]
pub fn error_not_found() -> serde_json::Value {
    json!({
        "error_code": "DIRECT_DISBURSEMENT_NOT_FOUND_ERROR",
        "message": "Disbursement not found"
    })
}

/// Insufficient balance error (400)
#[allow(dead_code)]
pub fn error_insufficient_balance() -> serde_json::Value {
    json!({
        "error_code": "DIRECT_DISBURSEMENT_BALANCE_INSUFFICIENT_ERROR",
        "message": "Balance not enough to process disbursement"
    })
}
