use crate::domain::debt::Debt;
use crate::domain::payment::Payment;
use crate::domain::payment_plan::PaymentPlan;
use crate::domain::ports::{Collection, RecordSource};
use crate::error::{Result, SettlementError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Reads the collections from `debts.json`, `payment_plans.json` and
/// `payments.json` inside a directory, using the same JSON layout the API
/// serves.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.dir.join(format!("{}.json", collection.name()));
        let bytes = tokio::fs::read(&path).await?;
        serde_json::from_slice(&bytes).map_err(|source| SettlementError::Decode {
            endpoint: path.display().to_string(),
            source,
        })
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn debts(&self) -> Result<Vec<Debt>> {
        self.read(Collection::Debts).await
    }

    async fn payment_plans(&self) -> Result<Vec<PaymentPlan>> {
        self.read(Collection::PaymentPlans).await
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        self.read(Collection::Payments).await
    }
}
