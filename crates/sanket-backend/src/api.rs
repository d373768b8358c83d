//! Trait seams over the backend so pollers and UI glue can be driven by
//! in-memory fakes in tests.

use async_trait::async_trait;
use sanket_common::{AlertSummary, DataStatus, Result};

#[async_trait]
pub trait StatusApi: Send + Sync {
    async fn data_status(&self) -> Result<DataStatus>;
}

#[async_trait]
pub trait AlertsApi: Send + Sync {
    async fn current_alerts(&self) -> Result<AlertSummary>;
}

#[async_trait]
pub trait InsightApi: Send + Sync {
    /// Free-form assistant question with optional page context.
    async fn chat(&self, query: &str, context: serde_json::Value) -> Result<String>;

    /// Markdown analysis for a specific flagged issue.
    async fn explain_issue(
        &self,
        title: &str,
        description: &str,
        data_context: serde_json::Value,
    ) -> Result<String>;
}
