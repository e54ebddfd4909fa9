use thiserror::Error;

use crate::types::AccountNumber;

/// Business-rule rejections
///
/// Ordinary outcomes, not program failures: a rejection leaves the account
/// untouched and the operation can be retried with different input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("maximum number of withdrawals reached")]
    WithdrawalCountExceeded,
    #[error("withdrawal amount exceeds the per-transaction limit")]
    AmountOverWithdrawLimit,
}

/// Failure of a transaction routed through a customer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("customer holds no account number {0}")]
    UnknownAccount(AccountNumber),
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Errors surfaced by the teller's lookup and dispatch layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TellerError {
    #[error("no customer with national id {0}")]
    UnknownCustomer(String),
    #[error("a customer with national id {0} already exists")]
    DuplicateCustomer(String),
    #[error("customer {0} holds no accounts")]
    NoAccounts(String),
    #[error("customer {0} holds several accounts, an account number is required")]
    AmbiguousAccount(String),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
