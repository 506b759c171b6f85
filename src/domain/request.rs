use crate::domain::validation::ValidationError;
use crate::domain::value::{LanguageType, MessageText, MobileNumber, MtId};

#[derive(Debug, Clone)]
/// Send one message to one or more recipients (`api.aspx`).
///
/// Leave the language type unset to detect it from the message text.
pub struct SendSms {
    language: Option<LanguageType>,
    message: MessageText,
    recipients: Vec<MobileNumber>,
}

impl SendSms {
    pub fn new(recipients: Vec<MobileNumber>, message: MessageText) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: MobileNumber::FIELD,
            });
        }
        Ok(Self {
            language: None,
            message,
            recipients,
        })
    }

    /// Force a language type instead of detecting it.
    pub fn with_language(mut self, language: LanguageType) -> Self {
        self.language = Some(language);
        self
    }

    /// Force a language type from its wire code (`"1"` or `"2"`).
    pub fn with_language_code(self, code: &str) -> Result<Self, ValidationError> {
        Ok(self.with_language(code.parse()?))
    }

    pub fn language(&self) -> Option<LanguageType> {
        self.language
    }

    /// The explicit language type, or the one detected from the message text.
    pub fn resolved_language(&self) -> LanguageType {
        self.language
            .unwrap_or_else(|| LanguageType::detect(self.message.as_str()))
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn recipients(&self) -> &[MobileNumber] {
        &self.recipients
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Look up the delivery status of one MT (`bulktrx.aspx`).
pub struct CheckTransactionStatus {
    mt_id: MtId,
}

impl CheckTransactionStatus {
    pub fn new(mt_id: MtId) -> Self {
        Self { mt_id }
    }

    pub fn mt_id(&self) -> MtId {
        self.mt_id
    }
}

impl From<MtId> for CheckTransactionStatus {
    fn from(mt_id: MtId) -> Self {
        Self::new(mt_id)
    }
}
