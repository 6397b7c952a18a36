use super::debt::Debt;
use super::payment::Payment;
use super::payment_plan::PaymentPlan;
use crate::error::Result;
use async_trait::async_trait;

/// The three record collections the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Debts,
    PaymentPlans,
    Payments,
}

impl Collection {
    /// Path segment of the endpoint, also used as the fixture file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Debts => "debts",
            Collection::PaymentPlans => "payment_plans",
            Collection::Payments => "payments",
        }
    }
}

/// Somewhere debts, payment plans and payments can be read from.
///
/// Each call returns the full collection in source order.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn debts(&self) -> Result<Vec<Debt>>;
    async fn payment_plans(&self) -> Result<Vec<PaymentPlan>>;
    async fn payments(&self) -> Result<Vec<Payment>>;
}

pub type RecordSourceBox = Box<dyn RecordSource>;
