use crate::domain::{
    ErrorCode, LanguageType, MessageText, MobileNumber, SendSms, SendSmsResponse, SenderId,
};

pub fn encode_send_sms_query(sender_id: &SenderId, request: &SendSms) -> Vec<(String, String)> {
    let language = request.resolved_language();
    let message = match language {
        LanguageType::Normal => request.message().as_str().to_owned(),
        LanguageType::Unicode => encode_unicode_message(request.message().as_str()),
    };
    let mobile_numbers = request
        .recipients()
        .iter()
        .map(MobileNumber::raw)
        .collect::<Vec<_>>()
        .join(",");

    vec![
        (SenderId::FIELD.to_owned(), sender_id.as_str().to_owned()),
        (MobileNumber::FIELD.to_owned(), mobile_numbers),
        (LanguageType::FIELD.to_owned(), language.as_str().to_owned()),
        (MessageText::FIELD.to_owned(), message),
    ]
}

/// Replace every codepoint with its `U+XXXX` hex digits, concatenated.
///
/// One-way: the gateway decodes it, nothing here reads it back.
pub fn encode_unicode_message(text: &str) -> String {
    text.chars()
        .map(|ch| format!("{:04X}", u32::from(ch)))
        .collect()
}

/// Decode the comma-separated `api.aspx` body.
///
/// A positive first value means every value is an MT id and the list is returned
/// as is; otherwise the first value is an error code.
pub fn decode_send_sms_response(body: &str) -> Result<SendSmsResponse, ErrorCode> {
    let values = body
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ErrorCode::UnknownError)?;

    let Some(&first) = values.first() else {
        return Err(ErrorCode::UnknownError);
    };

    if first > 0 {
        return Ok(SendSmsResponse { mt_ids: values });
    }

    Err(match first {
        -100 => ErrorCode::InvalidCredentials,
        -200 => ErrorCode::InvalidSenderId,
        -300 => ErrorCode::InvalidMobileNo,
        -400 => ErrorCode::InvalidLanguageType,
        -500 => ErrorCode::InvalidMessageCharacters,
        -600 => ErrorCode::InsufficientCreditBalance,
        _ => ErrorCode::UnknownError,
    })
}
