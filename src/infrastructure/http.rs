use crate::domain::debt::Debt;
use crate::domain::payment::Payment;
use crate::domain::payment_plan::PaymentPlan;
use crate::domain::ports::{Collection, RecordSource};
use crate::error::{Result, SettlementError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://my-json-server.typicode.com/druska/trueaccord-mock-payments-api";

/// Reads the collections from `GET {base_url}/{collection}`.
///
/// No retries: a transport error, a non-success status or a body that does
/// not decode into the expected records is returned as is.
pub struct HttpRecordSource {
    base_url: String,
    client: Client,
}

impl HttpRecordSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| SettlementError::Transport {
                endpoint: "client builder".to_string(),
                source,
            })?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn endpoint(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.name())
    }

    async fn get<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let endpoint = self.endpoint(collection);
        tracing::debug!(%endpoint, "Requesting collection");

        let transport = |source: reqwest::Error| SettlementError::Transport {
            endpoint: endpoint.clone(),
            source,
        };

        let response = self.client.get(&endpoint).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SettlementError::Status {
                endpoint: endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|source| SettlementError::Decode {
            endpoint: endpoint.clone(),
            source,
        })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn debts(&self) -> Result<Vec<Debt>> {
        self.get(Collection::Debts).await
    }

    async fn payment_plans(&self) -> Result<Vec<PaymentPlan>> {
        self.get(Collection::PaymentPlans).await
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        self.get(Collection::Payments).await
    }
}
