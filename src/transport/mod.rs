//! Transport layer: query-string encoding and plain-text response decoding.

mod check_status;
mod credit_balance;
mod send_sms;

pub use check_status::{decode_check_status_response, encode_check_status_query};
pub use credit_balance::decode_credit_balance_response;
pub use send_sms::{decode_send_sms_response, encode_send_sms_query};

pub const SEND_SMS_PATH: &str = "api.aspx";
pub const CHECK_STATUS_PATH: &str = "bulktrx.aspx";
pub const CREDIT_BALANCE_PATH: &str = "bulkcredit.aspx";
