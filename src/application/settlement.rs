use crate::domain::debt::{AnnotatedDebt, SettledDebt};
use crate::domain::index::IdIndex;
use crate::domain::payment::Payment;
use crate::domain::payment_plan::PaymentPlan;
use crate::error::{Result, SettlementError};

/// Debts and plans after every payment has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub debts: Vec<SettledDebt>,
    pub payment_plans: Vec<PaymentPlan>,
}

/// Applies payments, in order, to their payment plans and mirrors the result
/// onto the plans' debts.
///
/// For each payment the plan's `amount_to_pay` is reduced by the payment
/// amount and copied to the debt's `remaining_amount`. Once that amount drops
/// to zero or below the debt leaves its payment plan; otherwise the flag set
/// during annotation is kept. A payment for an unknown plan, or a plan for an
/// unknown debt, aborts settlement.
pub fn settle(
    debts: &[AnnotatedDebt],
    payment_plans: &[PaymentPlan],
    payments: &[Payment],
) -> Result<Settlement> {
    let debt_index = IdIndex::build(debts, "debt", |debt| debt.id)?;
    let plan_index = IdIndex::build(payment_plans, "payment plan", |plan| plan.id)?;

    let mut debts: Vec<SettledDebt> = debts.iter().cloned().map(SettledDebt::from).collect();
    let mut payment_plans = payment_plans.to_vec();

    for payment in payments {
        let plan_position = plan_index
            .position(payment.payment_plan_id)
            .ok_or(SettlementError::PlanNotFound(payment.payment_plan_id))?;
        let plan = &mut payment_plans[plan_position];

        let new_amount = plan
            .amount_to_pay
            .checked_sub(payment.amount)
            .ok_or(SettlementError::AmountOverflow { plan: plan.id })?;
        plan.amount_to_pay = new_amount;

        let debt_position = debt_index
            .position(plan.debt_id)
            .ok_or(SettlementError::DebtNotFound(plan.debt_id))?;
        let debt = &mut debts[debt_position];

        debt.remaining_amount = Some(new_amount);
        if new_amount.is_settled() {
            debt.is_in_payment_plan = false;
        }

        tracing::debug!(
            plan = plan.id,
            debt = debt.id,
            paid = %payment.amount,
            remaining = %new_amount,
            "Applied payment"
        );
    }

    tracing::info!(
        payments = payments.len(),
        still_in_plan = debts.iter().filter(|d| d.is_in_payment_plan).count(),
        "Settlement complete"
    );

    Ok(Settlement {
        debts,
        payment_plans,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::payment_plan::InstallmentFrequency;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn debt(id: u64, amount: Decimal, in_plan: bool) -> AnnotatedDebt {
        AnnotatedDebt {
            amount: Money::new(amount),
            id,
            is_in_payment_plan: in_plan,
        }
    }

    fn plan(id: u64, debt_id: u64, amount_to_pay: Decimal) -> PaymentPlan {
        PaymentPlan {
            amount_to_pay: Money::new(amount_to_pay),
            debt_id,
            id,
            installment_amount: Money::new(dec!(25)),
            installment_frequency: InstallmentFrequency::Weekly,
            start_date: "2020-08-01".to_string(),
        }
    }

    fn payment(plan_id: u64, amount: Decimal) -> Payment {
        Payment {
            amount: Money::new(amount),
            date: "2020-08-08".to_string(),
            payment_plan_id: plan_id,
        }
    }

    #[test]
    fn test_partial_payments_accumulate() {
        let debts = vec![debt(1, dec!(100), true)];
        let plans = vec![plan(1, 1, dec!(100))];
        let payments = vec![payment(1, dec!(25)), payment(1, dec!(25))];

        let settlement = settle(&debts, &plans, &payments).unwrap();

        assert_eq!(settlement.payment_plans[0].amount_to_pay, Money::new(dec!(50)));
        assert_eq!(settlement.debts[0].remaining_amount, Some(Money::new(dec!(50))));
        assert!(settlement.debts[0].is_in_payment_plan);
    }

    #[test]
    fn test_exact_payoff_clears_flag() {
        let debts = vec![debt(0, dec!(123.46), true)];
        let plans = vec![plan(0, 0, dec!(102.50))];
        let payments = vec![payment(0, dec!(51.25)), payment(0, dec!(51.25))];

        let settlement = settle(&debts, &plans, &payments).unwrap();

        assert_eq!(settlement.payment_plans[0].amount_to_pay, Money::new(dec!(0.00)));
        assert_eq!(settlement.debts[0].remaining_amount, Some(Money::ZERO));
        assert!(!settlement.debts[0].is_in_payment_plan);
    }

    #[test]
    fn test_overpayment_goes_negative_and_clears_flag() {
        let debts = vec![debt(0, dec!(10), true)];
        let plans = vec![plan(0, 0, dec!(10))];
        let payments = vec![payment(0, dec!(12.5))];

        let settlement = settle(&debts, &plans, &payments).unwrap();

        assert_eq!(settlement.debts[0].remaining_amount, Some(Money::new(dec!(-2.5))));
        assert!(!settlement.debts[0].is_in_payment_plan);
    }

    #[test]
    fn test_debt_without_payments_has_no_remaining_amount() {
        let debts = vec![debt(0, dec!(10), true), debt(1, dec!(20), false)];
        let plans = vec![plan(0, 0, dec!(10))];

        let settlement = settle(&debts, &plans, &[]).unwrap();

        assert_eq!(settlement.debts[0].remaining_amount, None);
        assert!(settlement.debts[0].is_in_payment_plan);
        assert_eq!(settlement.debts[1].remaining_amount, None);
        assert_eq!(settlement.payment_plans, plans);
    }

    #[test]
    fn test_inputs_are_left_untouched() {
        let debts = vec![debt(0, dec!(10), true)];
        let plans = vec![plan(0, 0, dec!(10))];
        let payments = vec![payment(0, dec!(10))];

        let _ = settle(&debts, &plans, &payments).unwrap();

        assert_eq!(plans[0].amount_to_pay, Money::new(dec!(10)));
        assert!(debts[0].is_in_payment_plan);
    }

    #[test]
    fn test_lookup_by_id_with_shuffled_ids() {
        let debts = vec![debt(7, dec!(70), true), debt(3, dec!(30), true)];
        let plans = vec![plan(11, 3, dec!(30)), plan(2, 7, dec!(70))];
        let payments = vec![payment(2, dec!(20)), payment(11, dec!(30))];

        let settlement = settle(&debts, &plans, &payments).unwrap();

        assert_eq!(settlement.debts[0].remaining_amount, Some(Money::new(dec!(50))));
        assert!(settlement.debts[0].is_in_payment_plan);
        assert_eq!(settlement.debts[1].remaining_amount, Some(Money::ZERO));
        assert!(!settlement.debts[1].is_in_payment_plan);
    }

    #[test]
    fn test_unknown_plan_fails() {
        let debts = vec![debt(0, dec!(10), true)];
        let plans = vec![plan(0, 0, dec!(10))];
        let payments = vec![payment(5, dec!(1))];

        let result = settle(&debts, &plans, &payments);
        assert!(matches!(result, Err(SettlementError::PlanNotFound(5))));
    }

    #[test]
    fn test_plan_for_unknown_debt_fails() {
        let debts = vec![debt(0, dec!(10), true)];
        let plans = vec![plan(0, 8, dec!(10))];
        let payments = vec![payment(0, dec!(1))];

        let result = settle(&debts, &plans, &payments);
        assert!(matches!(result, Err(SettlementError::DebtNotFound(8))));
    }

    #[test]
    fn test_overflowing_payment_fails() {
        let plans: Vec<PaymentPlan> = serde_json::from_str(
            r#"[{"amount_to_pay": 70000000000000000000000000000, "debt_id": 0, "id": 4,
                "installment_amount": 1, "installment_frequency": "WEEKLY",
                "start_date": "2020-08-01"}]"#,
        )
        .unwrap();
        let payments: Vec<Payment> = serde_json::from_str(
            r#"[{"amount": -70000000000000000000000000000, "date": "2020-08-08",
                "payment_plan_id": 4}]"#,
        )
        .unwrap();
        let debts = vec![debt(0, dec!(10), true)];

        let result = settle(&debts, &plans, &payments);
        assert!(matches!(
            result,
            Err(SettlementError::AmountOverflow { plan: 4 })
        ));
    }

    #[test]
    fn test_duplicate_plan_ids_fail() {
        let debts = vec![debt(0, dec!(10), true)];
        let plans = vec![plan(0, 0, dec!(10)), plan(0, 0, dec!(5))];

        let result = settle(&debts, &plans, &[]);
        assert!(matches!(result, Err(SettlementError::DuplicateId { .. })));
    }
}
