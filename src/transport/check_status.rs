use crate::domain::{
    CheckTransactionStatus, CheckTransactionStatusResponse, ErrorCode, MtId, TransactionStatus,
};

pub fn encode_check_status_query(request: &CheckTransactionStatus) -> Vec<(String, String)> {
    vec![(MtId::FIELD.to_owned(), request.mt_id().to_string())]
}

pub fn decode_check_status_response(
    body: &str,
) -> Result<CheckTransactionStatusResponse, ErrorCode> {
    let code = body
        .trim()
        .parse::<i64>()
        .map_err(|_| ErrorCode::UnknownError)?;

    let status = match code {
        0 => TransactionStatus::Success,
        100 => TransactionStatus::TelcoDelivered,
        -100 => return Err(ErrorCode::MtInvalidNotFound),
        -200 => return Err(ErrorCode::MessageDeliveryFailure),
        _ => return Err(ErrorCode::UnknownError),
    };
    Ok(CheckTransactionStatusResponse { status })
}
