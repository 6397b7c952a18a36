use super::DebtId;
use super::money::Money;
use serde::{Deserialize, Serialize};

/// A debt as returned by the API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Debt {
    pub amount: Money,
    pub id: DebtId,
}

impl Debt {
    pub fn new(id: DebtId, amount: Money) -> Self {
        Self { amount, id }
    }

    pub fn annotate(&self, is_in_payment_plan: bool) -> AnnotatedDebt {
        AnnotatedDebt {
            amount: self.amount,
            id: self.id,
            is_in_payment_plan,
        }
    }
}

/// A debt once the active payment plans have been looked at.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AnnotatedDebt {
    pub amount: Money,
    pub id: DebtId,
    pub is_in_payment_plan: bool,
}

/// A debt after payments have been applied.
///
/// `remaining_amount` is only known for debts whose plan received at least one
/// payment, and is left out of the report otherwise.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SettledDebt {
    pub amount: Money,
    pub id: DebtId,
    pub is_in_payment_plan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_amount: Option<Money>,
}

impl From<AnnotatedDebt> for SettledDebt {
    fn from(debt: AnnotatedDebt) -> Self {
        Self {
            amount: debt.amount,
            id: debt.id,
            is_in_payment_plan: debt.is_in_payment_plan,
            remaining_amount: None,
        }
    }
}
