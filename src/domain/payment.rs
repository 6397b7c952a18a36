use super::PlanId;
use super::money::Money;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub amount: Money,
    pub date: String,
    pub payment_plan_id: PlanId,
}
