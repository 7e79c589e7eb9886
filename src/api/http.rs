//! HTTP backend implementation using reqwest
//!
//! Every action is a single JSON round-trip. Replies carry a `success`
//! flag; anything else is treated as a failure.

use crate::api::backend::WorkbenchBackend;
use crate::api::{
    ChartSpec, DataSource, ExportFile, ExportRequest, NewDataSource, QueryRequest, QueryResponse,
    VisualizationRequest,
};
use crate::error::{Result, WorkbenchError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Backend reached over HTTP at `<base_url>/api/...`
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpBackend {
    /// Build a client. `timeout` is left to the transport; `None` waits forever.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Send a request and return the decoded JSON body, whatever the status
    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> Result<Value> {
        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!("[HTTP] {} failed after {}ms: {}", path, start.elapsed().as_millis(), e);
            WorkbenchError::from(e)
        })?;

        let status = response.status();
        debug!("[HTTP] {} -> {} in {}ms", path, status, start.elapsed().as_millis());

        // Error statuses still carry a structured body when the backend handled them
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("[HTTP] {} returned undecodable body (status {}): {}", path, status, e);
            WorkbenchError::Transport(format!("status {}: {}", status, e))
        })
    }

    async fn post_action<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let mut request = self.http_client.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let reply = self.send(request, path).await?;
        decode_payload(unwrap_envelope(reply)?)
    }
}

/// Check the `success` flag and surface the backend's error text
pub(crate) fn unwrap_envelope(reply: Value) -> Result<Value> {
    if reply.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(reply);
    }
    let message = reply
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Err(WorkbenchError::Backend(message))
}

fn decode_payload<T: DeserializeOwned>(reply: Value) -> Result<T> {
    Ok(serde_json::from_value(reply)?)
}

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: ChartSpec,
}

/// Envelope-only replies (create, seed)
#[derive(Deserialize)]
struct Ack {}

#[async_trait]
impl WorkbenchBackend for HttpBackend {
    async fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        let path = "data-sources";
        let reply = self.send(self.http_client.get(self.url(path)), path).await?;
        match reply {
            Value::Array(_) => decode_payload(reply),
            // An object here is an error envelope
            other => {
                unwrap_envelope(other)?;
                Err(WorkbenchError::Transport(
                    "data source list was not an array".to_string(),
                ))
            }
        }
    }

    async fn create_data_source(&self, source: &NewDataSource) -> Result<()> {
        let _: Ack = self.post_action("data-sources", Some(source)).await?;
        Ok(())
    }

    async fn seed_sample_data(&self) -> Result<()> {
        let _: Ack = self.post_action::<Value, _>("sample-data", None).await?;
        Ok(())
    }

    async fn execute_query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.post_action("query", Some(request)).await
    }

    async fn create_visualization(&self, request: &VisualizationRequest) -> Result<ChartSpec> {
        let envelope: ChartEnvelope = self.post_action("visualize", Some(request)).await?;
        Ok(envelope.chart)
    }

    async fn export_results(&self, request: &ExportRequest) -> Result<ExportFile> {
        self.post_action("export", Some(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_building_strips_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:5000/", None).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(backend.url("query"), "http://localhost:5000/api/query");
    }

    #[test]
    fn test_envelope_success_passes_through() {
        let reply = json!({"success": true, "content": "a,b\n", "filename": "results_1.csv"});
        let file: ExportFile = decode_payload(unwrap_envelope(reply).unwrap()).unwrap();
        assert_eq!(file.filename, "results_1.csv");
    }

    #[test]
    fn test_envelope_failure_carries_backend_text() {
        let err = unwrap_envelope(json!({"success": false, "error": "Query not found"})).unwrap_err();
        assert!(matches!(err, WorkbenchError::Backend(ref m) if m == "Query not found"));

        // 404 replies omit the success flag entirely
        let err = unwrap_envelope(json!({"error": "Data source not found"})).unwrap_err();
        assert!(matches!(err, WorkbenchError::Backend(ref m) if m == "Data source not found"));
    }

    #[test]
    fn test_malformed_payload_is_transport_error() {
        let reply = unwrap_envelope(json!({"success": true})).unwrap();
        let err = decode_payload::<ExportFile>(reply).unwrap_err();
        assert!(matches!(err, WorkbenchError::Transport(_)));
    }
}
