pub mod dto;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::AppError;

pub use dto::SyncPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    Sent,
    TransportError,
}

/// Best-effort push of the to-do list to a user-supplied spreadsheet script.
///
/// The endpoint's response is opaque: anything that reaches the server counts
/// as sent.
#[async_trait]
pub trait SheetsClient: Send + Sync {
    async fn push_todos(&self, endpoint: &str, payload: &SyncPayload) -> SyncOutcome;
}

pub struct SheetsHttpClient {
    client: Client,
}

impl SheetsHttpClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SheetsClient for SheetsHttpClient {
    async fn push_todos(&self, endpoint: &str, payload: &SyncPayload) -> SyncOutcome {
        let result = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await;

        match result {
            Ok(response) => {
                debug!(
                    "pushed {} todos to sheet endpoint (status {})",
                    payload.todos.len(),
                    response.status()
                );
                SyncOutcome::Sent
            }
            Err(e) => {
                warn!("sheet sync failed: {}", e);
                SyncOutcome::TransportError
            }
        }
    }
}

pub struct NoopSheetsClient;

#[async_trait]
impl SheetsClient for NoopSheetsClient {
    async fn push_todos(&self, _endpoint: &str, _payload: &SyncPayload) -> SyncOutcome {
        SyncOutcome::Sent
    }
}
