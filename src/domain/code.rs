use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Classification of a non-successful gateway response.
///
/// Branch on this instead of matching error message text.
pub enum ErrorCode {
    /// HTTP status was not `200 OK`.
    RequestFailure,
    /// `-100`: API username or password is invalid.
    InvalidCredentials,
    /// `-200`: sender id is invalid.
    #[serde(rename = "InvalidSenderID")]
    InvalidSenderId,
    /// `-300`: mobile number is invalid.
    InvalidMobileNo,
    /// `-400`: language type is invalid.
    InvalidLanguageType,
    /// `-500`: message contains invalid characters.
    InvalidMessageCharacters,
    /// `-600`: not enough credit to send.
    InsufficientCreditBalance,
    /// `-100` from `bulktrx.aspx`: MT id is invalid or unknown.
    #[serde(rename = "MTInvalidNotFound")]
    MtInvalidNotFound,
    /// `-200` from `bulktrx.aspx`: delivery failed.
    MessageDeliveryFailure,
    /// Anything the gateway returned that is not documented.
    UnknownError,
}

impl ErrorCode {
    /// Short name of the classification, e.g. `InvalidCredentials`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequestFailure => "RequestFailure",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::InvalidSenderId => "InvalidSenderID",
            Self::InvalidMobileNo => "InvalidMobileNo",
            Self::InvalidLanguageType => "InvalidLanguageType",
            Self::InvalidMessageCharacters => "InvalidMessageCharacters",
            Self::InsufficientCreditBalance => "InsufficientCreditBalance",
            Self::MtInvalidNotFound => "MTInvalidNotFound",
            Self::MessageDeliveryFailure => "MessageDeliveryFailure",
            Self::UnknownError => "UnknownError",
        }
    }

    /// Fixed human-readable message attached to errors of this classification.
    pub fn message(self) -> &'static str {
        match self {
            Self::RequestFailure => "request failure",
            Self::InvalidCredentials => "apiusername or apipassword is invalid",
            Self::InvalidSenderId => "senderid parameter is invalid",
            Self::InvalidMobileNo => "mobileno parameter is invalid",
            Self::InvalidLanguageType => "languagetype is invalid",
            Self::InvalidMessageCharacters => "characters in message are invalid",
            Self::InsufficientCreditBalance => "insufficient credit balance",
            Self::MtInvalidNotFound => "mtid is invalid or not found",
            Self::MessageDeliveryFailure => "message delivery failed",
            Self::UnknownError => "unknown error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
