use crate::domain::{DebtId, PlanId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Payment plan {0} not found")]
    PlanNotFound(PlanId),
    #[error("Amount to pay on payment plan {plan} overflowed")]
    AmountOverflow { plan: PlanId },
    #[error("Debt {0} not found")]
    DebtNotFound(DebtId),
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u64 },
}

pub type Result<T> = std::result::Result<T, SettlementError>;
