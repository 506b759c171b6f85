use crate::domain::{CreditBalanceResponse, ErrorCode};

/// Decode the single decimal returned by `bulkcredit.aspx`.
pub fn decode_credit_balance_response(body: &str) -> Result<CreditBalanceResponse, ErrorCode> {
    let value = body
        .trim()
        .parse::<f64>()
        .map_err(|_| ErrorCode::UnknownError)?;

    // `parse` accepts "NaN" and "inf".
    if !value.is_finite() {
        return Err(ErrorCode::UnknownError);
    }
    if value >= 0.0 {
        return Ok(CreditBalanceResponse { balance: value });
    }
    if value == -100.0 {
        return Err(ErrorCode::InvalidCredentials);
    }
    Err(ErrorCode::UnknownError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_balance() {
        assert_eq!(
            decode_credit_balance_response("6500.5").unwrap().balance,
            6500.5
        );
        assert_eq!(decode_credit_balance_response(" 0\r\n").unwrap().balance, 0.0);
        assert_eq!(decode_credit_balance_response("12").unwrap().balance, 12.0);
    }

    #[test]
    fn decode_negative_values_as_errors() {
        assert_eq!(
            decode_credit_balance_response("-100").unwrap_err(),
            ErrorCode::InvalidCredentials
        );
        assert_eq!(
            decode_credit_balance_response("-100.00").unwrap_err(),
            ErrorCode::InvalidCredentials
        );
        assert_eq!(
            decode_credit_balance_response("-5").unwrap_err(),
            ErrorCode::UnknownError
        );
    }

    #[test]
    fn decode_rejects_non_numbers() {
        for body in ["", "abc", "NaN", "inf", "1,000.00"] {
            assert_eq!(
                decode_credit_balance_response(body).unwrap_err(),
                ErrorCode::UnknownError,
                "{body}"
            );
        }
    }
}
