use super::money::Money;
use super::{DebtId, PlanId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentFrequency {
    Weekly,
    BiWeekly,
}

/// An agreement to pay down a debt in installments.
///
/// `amount_to_pay` shrinks as payments are applied and may end up at zero or
/// below when the plan is completed or overpaid.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentPlan {
    pub amount_to_pay: Money,
    pub debt_id: DebtId,
    pub id: PlanId,
    pub installment_amount: Money,
    pub installment_frequency: InstallmentFrequency,
    pub start_date: String,
}

impl PaymentPlan {
    /// A plan counts as active while something is still owed on it.
    pub fn is_active(&self) -> bool {
        self.amount_to_pay.is_outstanding()
    }
}
