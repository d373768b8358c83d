//! Concrete reqwest client for the analytics backend.

use std::time::Duration;

use async_trait::async_trait;
use sanket_common::{AlertSummary, DataStatus, Result, SanketError};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::{AlertsApi, InsightApi, StatusApi};

/// Inline reply shown by the chat/modal surfaces when the backend is
/// unreachable. Presentation maps any `InsightApi` error to this string.
pub const OFFLINE_REPLY: &str =
    "Having trouble connecting to the analysis service. Please try again in a moment.";

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let resp = self.client.get(self.url(path)).send().await?;
        check_response_status(resp).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        check_response_status(resp).await
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status().as_u16();
    let body: Value = resp.json().await?;
    if status >= 400 {
        let msg = body["detail"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown backend error")
            .to_string();
        return Err(SanketError::Backend { status, message: msg });
    }
    Ok(body)
}

/// Read the `data_status` object out of an upload-status payload.
/// Absent or mistyped fields are falsy, never an error.
pub fn parse_data_status(body: &Value) -> DataStatus {
    let ds = &body["data_status"];
    DataStatus {
        pipeline_complete: ds["pipeline_complete"].as_bool().unwrap_or(false),
        ready_for_pipeline: ds["ready_for_pipeline"].as_bool().unwrap_or(false),
        new_data_detected: ds["new_data_detected"].as_bool().unwrap_or(false),
    }
}

/// Extract the template counters from a current-alerts payload.
pub fn parse_alert_summary(body: &Value) -> AlertSummary {
    AlertSummary {
        critical_mvi: body["critical_districts"][0]["mvi"].as_f64(),
        high_stress_count: body["high_stress_count"].as_u64().unwrap_or(0),
        total_alerts: body["total_alerts"].as_u64(),
        scanner_status: body["scanner_status"].as_str().map(String::from),
    }
}

/// Chat responses have carried the text under `answer` or `response`
/// depending on backend version; accept either.
pub fn parse_chat_reply(body: &Value) -> String {
    body["answer"]
        .as_str()
        .or_else(|| body["response"].as_str())
        .unwrap_or("")
        .to_string()
}

#[async_trait]
impl StatusApi for BackendClient {
    #[instrument(skip(self))]
    async fn data_status(&self) -> Result<DataStatus> {
        let body = self.get_json("/api/upload/status").await?;
        let status = parse_data_status(&body);
        debug!(
            pipeline_complete = status.pipeline_complete,
            ready_for_pipeline = status.ready_for_pipeline,
            new_data_detected = status.new_data_detected,
            "upload status"
        );
        Ok(status)
    }
}

#[async_trait]
impl AlertsApi for BackendClient {
    #[instrument(skip(self))]
    async fn current_alerts(&self) -> Result<AlertSummary> {
        let body = self.get_json("/api/alerts/current").await?;
        let summary = parse_alert_summary(&body);
        debug!(
            high_stress = summary.high_stress_count,
            critical_mvi = ?summary.critical_mvi,
            "current alerts"
        );
        Ok(summary)
    }
}

#[async_trait]
impl InsightApi for BackendClient {
    #[instrument(skip(self, context))]
    async fn chat(&self, query: &str, context: Value) -> Result<String> {
        let body = serde_json::json!({ "query": query, "context": context });
        let resp = self.post_json("/api/ai/chat", &body).await?;
        Ok(parse_chat_reply(&resp))
    }

    #[instrument(skip(self, data_context))]
    async fn explain_issue(
        &self,
        title: &str,
        description: &str,
        data_context: Value,
    ) -> Result<String> {
        let body = serde_json::json!({
            "title": title,
            "description": description,
            "data_context": data_context,
        });
        let resp = self.post_json("/api/ai/explain/issue", &body).await?;
        Ok(resp["analysis"].as_str().unwrap_or("").to_string())
    }
}
