use crate::domain::debt::Debt;
use crate::domain::payment::Payment;
use crate::domain::payment_plan::PaymentPlan;
use crate::domain::ports::RecordSource;
use crate::error::Result;

/// The three collections as read from the source, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub debts: Vec<Debt>,
    pub payment_plans: Vec<PaymentPlan>,
    pub payments: Vec<Payment>,
}

/// Reads debts, then payment plans, then payments.
///
/// The reads are awaited one after another; the first failure aborts the
/// whole fetch and nothing read so far is returned.
pub async fn fetch(source: &dyn RecordSource) -> Result<Snapshot> {
    let debts = source.debts().await?;
    tracing::info!(count = debts.len(), "Fetched debts");

    let payment_plans = source.payment_plans().await?;
    tracing::info!(count = payment_plans.len(), "Fetched payment plans");

    let payments = source.payments().await?;
    tracing::info!(count = payments.len(), "Fetched payments");

    Ok(Snapshot {
        debts,
        payment_plans,
        payments,
    })
}
