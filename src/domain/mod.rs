//! Domain layer: strong types with validation and invariants (no I/O).

mod code;
mod request;
mod response;
mod validation;
mod value;

pub use code::ErrorCode;
pub use request::{CheckTransactionStatus, SendSms};
pub use response::{
    CheckTransactionStatusResponse, CreditBalanceResponse, SendSmsResponse, TransactionStatus,
};
pub use validation::ValidationError;
pub use value::{
    ApiPassword, ApiUsername, LanguageType, MessageText, MobileNumber, MtId, PhoneNumber,
    SenderId,
};
