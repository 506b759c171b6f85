use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// One id per accepted recipient, in response order, exactly as the gateway
    /// returned them. Wrap one in [`crate::MtId`] to check its status.
    pub mt_ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Message sent successfully.
    Success,
    /// Message handed over to the telco.
    TelcoDelivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTransactionStatusResponse {
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditBalanceResponse {
    /// Remaining credit; never negative.
    pub balance: f64,
}
