use std::fs;
use std::path::Path;

pub const DEBTS_JSON: &str = r#"[
    {"amount": 123.46, "id": 0},
    {"amount": 100, "id": 1},
    {"amount": 4920.34, "id": 2},
    {"amount": 12938, "id": 3},
    {"amount": 9238.02, "id": 4}
]"#;

pub const PAYMENT_PLANS_JSON: &str = r#"[
    {"amount_to_pay": 102.5, "debt_id": 0, "id": 0, "installment_amount": 51.25, "installment_frequency": "WEEKLY", "start_date": "2020-09-28"},
    {"amount_to_pay": 100, "debt_id": 1, "id": 1, "installment_amount": 25, "installment_frequency": "WEEKLY", "start_date": "2020-08-01"},
    {"amount_to_pay": 4920.34, "debt_id": 2, "id": 2, "installment_amount": 1230.085, "installment_frequency": "BI_WEEKLY", "start_date": "2020-01-01"},
    {"amount_to_pay": 4312.67, "debt_id": 3, "id": 3, "installment_amount": 1230.085, "installment_frequency": "WEEKLY", "start_date": "2020-08-01"}
]"#;

pub const PAYMENTS_JSON: &str = r#"[
    {"amount": 51.25, "date": "2020-09-29", "payment_plan_id": 0},
    {"amount": 51.25, "date": "2020-10-29", "payment_plan_id": 0},
    {"amount": 25, "date": "2020-08-08", "payment_plan_id": 1},
    {"amount": 25, "date": "2020-08-08", "payment_plan_id": 1},
    {"amount": 4312.67, "date": "2020-08-08", "payment_plan_id": 2},
    {"amount": 1230.085, "date": "2020-08-01", "payment_plan_id": 3},
    {"amount": 1230.085, "date": "2020-08-08", "payment_plan_id": 3},
    {"amount": 1230.085, "date": "2020-08-15", "payment_plan_id": 3}
]"#;

/// Writes the sample API data set as fixture files into `dir`.
#[allow(dead_code)]
pub fn write_fixtures(dir: &Path) -> std::io::Result<()> {
    write_collections(dir, DEBTS_JSON, PAYMENT_PLANS_JSON, PAYMENTS_JSON)
}

#[allow(dead_code)]
pub fn write_collections(
    dir: &Path,
    debts: &str,
    payment_plans: &str,
    payments: &str,
) -> std::io::Result<()> {
    fs::write(dir.join("debts.json"), debts)?;
    fs::write(dir.join("payment_plans.json"), payment_plans)?;
    fs::write(dir.join("payments.json"), payments)?;
    Ok(())
}
