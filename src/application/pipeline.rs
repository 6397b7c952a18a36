use super::annotator::annotate;
use super::fetcher::fetch;
use super::settlement::{Settlement, settle};
use crate::domain::ports::RecordSourceBox;
use crate::error::Result;
use crate::interfaces::jsonl::record_writer::RecordWriter;
use std::io::Write;

pub const INITIAL_DEBTS_LABEL: &str = "Initial debts:";
pub const ANNOTATED_DEBTS_LABEL: &str = "Debts after finding payment plans:";
pub const SETTLED_DEBTS_LABEL: &str = "Debts after processing payments:";
pub const SETTLED_PLANS_LABEL: &str = "Payment plans after processing payments:";

/// Runs fetch, annotation and settlement in sequence, reporting the debts
/// after every stage.
///
/// Nothing is written for a stage that fails, and later stages never run.
pub struct Pipeline {
    source: RecordSourceBox,
    show_plans: bool,
}

impl Pipeline {
    pub fn new(source: RecordSourceBox) -> Self {
        Self {
            source,
            show_plans: false,
        }
    }

    /// Also report the payment plans once settlement is done.
    pub fn with_plans(mut self, show_plans: bool) -> Self {
        self.show_plans = show_plans;
        self
    }

    pub async fn run<W: Write>(&self, report: &mut RecordWriter<W>) -> Result<Settlement> {
        let snapshot = fetch(&*self.source).await?;
        report.write_section(INITIAL_DEBTS_LABEL, &snapshot.debts)?;

        let annotated = annotate(&snapshot.debts, &snapshot.payment_plans)?;
        report.write_section(ANNOTATED_DEBTS_LABEL, &annotated)?;

        let settlement = settle(&annotated, &snapshot.payment_plans, &snapshot.payments)?;
        report.write_section(SETTLED_DEBTS_LABEL, &settlement.debts)?;

        if self.show_plans {
            report.write_section(SETTLED_PLANS_LABEL, &settlement.payment_plans)?;
        }

        Ok(settlement)
    }
}
