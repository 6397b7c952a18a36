//! Domain records and the ports through which they are obtained.

pub mod debt;
pub mod index;
pub mod money;
pub mod payment;
pub mod payment_plan;
pub mod ports;

pub type DebtId = u64;
pub type PlanId = u64;
