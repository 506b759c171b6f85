//! Typed Rust client for the OneWaySMS HTTP API.
//!
//! The crate has a domain layer of strong types, a transport layer for the
//! query-string and plain-text wire format, and a small blocking client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use onewaysms::{ClientConfig, MessageText, MobileNumber, OneWayClient, SendSms};
//!
//! fn main() -> Result<(), onewaysms::OneWayError> {
//!     let config = ClientConfig::new("https://gateway.onewaysms.sg:10002", "user", "pass", "ACME")?;
//!     let client = OneWayClient::new(config);
//!     let phone = MobileNumber::new("6581234567")?;
//!     let msg = MessageText::new("hello")?;
//!     let response = client.send_sms(SendSms::new(vec![phone], msg)?)?;
//!     println!("{:?}", response.mt_ids);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ClientConfig, DEFAULT_USER_AGENT, GatewayError, HttpResponse, HttpTransport, OneWayClient,
    OneWayClientBuilder, OneWayError, ReqwestTransport,
};
pub use domain::{
    ApiPassword, ApiUsername, CheckTransactionStatus, CheckTransactionStatusResponse,
    CreditBalanceResponse, ErrorCode, LanguageType, MessageText, MobileNumber, MtId, PhoneNumber,
    SendSms, SendSmsResponse, SenderId, TransactionStatus, ValidationError,
};
