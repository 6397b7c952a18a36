use crate::domain::debt::{AnnotatedDebt, Debt};
use crate::domain::index::IdIndex;
use crate::domain::payment_plan::PaymentPlan;
use crate::error::{Result, SettlementError};

/// Flags every debt covered by an active payment plan.
///
/// A plan whose `amount_to_pay` is already zero or below does not flag its
/// debt. Debts no active plan points at are flagged `false`. An active plan
/// pointing at an unknown debt is an error.
pub fn annotate(debts: &[Debt], payment_plans: &[PaymentPlan]) -> Result<Vec<AnnotatedDebt>> {
    let index = IdIndex::build(debts, "debt", |debt| debt.id)?;
    let mut in_plan = vec![false; debts.len()];

    for plan in payment_plans.iter().filter(|plan| plan.is_active()) {
        let position = index
            .position(plan.debt_id)
            .ok_or(SettlementError::DebtNotFound(plan.debt_id))?;
        in_plan[position] = true;
    }

    let annotated: Vec<AnnotatedDebt> = debts
        .iter()
        .zip(in_plan)
        .map(|(debt, flag)| debt.annotate(flag))
        .collect();

    tracing::debug!(
        in_plan = annotated.iter().filter(|d| d.is_in_payment_plan).count(),
        total = annotated.len(),
        "Annotated debts"
    );
    Ok(annotated)
}
