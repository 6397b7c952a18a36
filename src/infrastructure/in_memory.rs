use crate::domain::debt::Debt;
use crate::domain::payment::Payment;
use crate::domain::payment_plan::PaymentPlan;
use crate::domain::ports::RecordSource;
use crate::error::Result;
use async_trait::async_trait;

/// A record source backed by collections already in memory.
///
/// Every call hands out a fresh copy, so the pipeline can never alter what the
/// source holds.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordSource {
    debts: Vec<Debt>,
    payment_plans: Vec<PaymentPlan>,
    payments: Vec<Payment>,
}

impl InMemoryRecordSource {
    pub fn new(debts: Vec<Debt>, payment_plans: Vec<PaymentPlan>, payments: Vec<Payment>) -> Self {
        Self {
            debts,
            payment_plans,
            payments,
        }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn debts(&self) -> Result<Vec<Debt>> {
        Ok(self.debts.clone())
    }

    async fn payment_plans(&self) -> Result<Vec<PaymentPlan>> {
        Ok(self.payment_plans.clone())
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        Ok(self.payments.clone())
    }
}
