use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidLanguageType { input: String },
    InvalidPhoneNumber { input: String },
    ZeroMtId,
    InvalidBaseUrl { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidLanguageType { input } => {
                write!(f, "languagetype is invalid: {input:?} (expected \"1\" or \"2\")")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::ZeroMtId => write!(f, "mtid must not be zero"),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base url {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
