use std::fmt;
use std::str::FromStr;

use phonenumber::country;
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OneWaySMS API username (`apiusername`).
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct ApiUsername(String);

impl ApiUsername {
    /// Query field name used by OneWaySMS (`apiusername`).
    pub const FIELD: &'static str = "apiusername";

    /// Create a validated [`ApiUsername`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// OneWaySMS API password (`apipassword`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The value is redacted from `Debug` output.
pub struct ApiPassword(String);

impl ApiPassword {
    /// Query field name used by OneWaySMS (`apipassword`).
    pub const FIELD: &'static str = "apipassword";

    /// Create a validated [`ApiPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id displayed as the message originator (`senderid`).
///
/// Invariant: not blank. The value is sent exactly as provided and must be
/// registered with OneWaySMS.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by OneWaySMS (`senderid`).
    pub const FIELD: &'static str = "senderid";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the sender id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty. Whitespace-only text is a valid message.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by OneWaySMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Message encoding mode (`languagetype`).
pub enum LanguageType {
    /// Plain text, 160 characters per MT.
    #[serde(rename = "1")]
    Normal,
    /// Unicode text sent as hex codepoints, 70 characters per MT.
    #[serde(rename = "2")]
    Unicode,
}

impl LanguageType {
    /// Query field name used by OneWaySMS (`languagetype`).
    pub const FIELD: &'static str = "languagetype";

    /// Wire value of this language type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "1",
            Self::Unicode => "2",
        }
    }

    /// Pick the language type for `text`.
    ///
    /// Any codepoint that needs more than one byte in UTF-8 (i.e. anything outside
    /// ASCII) makes the message [`LanguageType::Unicode`].
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|ch| ch.len_utf8() > 1) {
            Self::Unicode
        } else {
            Self::Normal
        }
    }
}

impl FromStr for LanguageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Normal),
            "2" => Ok(Self::Unicode),
            _ => Err(ValidationError::InvalidLanguageType {
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
/// Mobile terminating id (`mtid`) assigned by OneWaySMS to one delivery.
///
/// Invariant: non-zero.
pub struct MtId(i64);

impl MtId {
    /// Query field name used by OneWaySMS (`mtid`).
    pub const FIELD: &'static str = "mtid";

    /// Create a validated [`MtId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::ZeroMtId);
        }
        Ok(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for MtId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MtId> for i64 {
    fn from(value: MtId) -> Self {
        value.0
    }
}

impl fmt::Display for MtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient mobile number as sent to OneWaySMS (`mobileno`).
///
/// Invariant: not blank. The number must include the country code (for example
/// `6581234567`) and is sent exactly as provided. Parse into [`PhoneNumber`] and
/// convert it if you want normalization.
pub struct MobileNumber(String);

impl MobileNumber {
    /// Query field name used by OneWaySMS (`mobileno`).
    pub const FIELD: &'static str = "mobileno";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Raw value as sent to OneWaySMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for MobileNumber {
    /// OneWaySMS expects the E.164 digits without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query field name used by OneWaySMS (`mobileno`).
    pub const FIELD: &'static str = "mobileno";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}
