//! Scripted in-memory backend for controller tests

use crate::api::{
    ChartSpec, DataSource, DataSourceId, ExportFile, ExportRequest, NewDataSource, QualityReport,
    QueryId, QueryRequest, QueryResponse, ResultRow, VisualizationRequest, WorkbenchBackend,
};
use crate::error::{Result, WorkbenchError};
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request the backend observed
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListDataSources,
    CreateDataSource(NewDataSource),
    SeedSampleData,
    ExecuteQuery(QueryRequest),
    CreateVisualization(VisualizationRequest),
    ExportResults(ExportRequest),
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    data_sources: Vec<DataSource>,
    list_results: VecDeque<Result<Vec<DataSource>>>,
    create_results: VecDeque<Result<()>>,
    seed_results: VecDeque<Result<()>>,
    query_results: VecDeque<Result<QueryResponse>>,
    chart_results: VecDeque<Result<ChartSpec>>,
    export_results: VecDeque<Result<ExportFile>>,
}

/// Backend that answers from per-operation queues and records every call.
///
/// Empty queues fall back to a benign success, except queries which
/// fail with a transport error so tests must script them.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_sources(sources: Vec<DataSource>) -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().data_sources = sources;
        mock
    }

    pub fn push_list(&self, result: Result<Vec<DataSource>>) {
        self.state.lock().unwrap().list_results.push_back(result);
    }

    pub fn push_create(&self, result: Result<()>) {
        self.state.lock().unwrap().create_results.push_back(result);
    }

    pub fn push_seed(&self, result: Result<()>) {
        self.state.lock().unwrap().seed_results.push_back(result);
    }

    pub fn push_query(&self, result: Result<QueryResponse>) {
        self.state.lock().unwrap().query_results.push_back(result);
    }

    pub fn push_chart(&self, result: Result<ChartSpec>) {
        self.state.lock().unwrap().chart_results.push_back(result);
    }

    pub fn push_export(&self, result: Result<ExportFile>) {
        self.state.lock().unwrap().export_results.push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl WorkbenchBackend for MockBackend {
    async fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        self.record(Call::ListDataSources);
        let mut state = self.state.lock().unwrap();
        let fallback = state.data_sources.clone();
        state.list_results.pop_front().unwrap_or(Ok(fallback))
    }

    async fn create_data_source(&self, source: &NewDataSource) -> Result<()> {
        self.record(Call::CreateDataSource(source.clone()));
        self.state.lock().unwrap().create_results.pop_front().unwrap_or(Ok(()))
    }

    async fn seed_sample_data(&self) -> Result<()> {
        self.record(Call::SeedSampleData);
        self.state.lock().unwrap().seed_results.pop_front().unwrap_or(Ok(()))
    }

    async fn execute_query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.record(Call::ExecuteQuery(request.clone()));
        self.state
            .lock()
            .unwrap()
            .query_results
            .pop_front()
            .unwrap_or_else(|| Err(WorkbenchError::Transport("no scripted response".to_string())))
    }

    async fn create_visualization(&self, request: &VisualizationRequest) -> Result<ChartSpec> {
        self.record(Call::CreateVisualization(request.clone()));
        self.state
            .lock()
            .unwrap()
            .chart_results
            .pop_front()
            .unwrap_or_else(|| Ok(ChartSpec::default()))
    }

    async fn export_results(&self, request: &ExportRequest) -> Result<ExportFile> {
        self.record(Call::ExportResults(request.clone()));
        let filename = format!("results_{}.{}", request.query_id, request.format);
        self.state
            .lock()
            .unwrap()
            .export_results
            .pop_front()
            .unwrap_or_else(|| Ok(ExportFile { content: String::new(), filename }))
    }
}

/// Data source fixture
pub fn data_source(id: i64, name: &str) -> DataSource {
    DataSource {
        id: DataSourceId(id),
        name: name.to_string(),
        database_type: "sqlite".to_string(),
        created_at: None,
    }
}

/// `rows` customer/revenue rows with a matching quality report
pub fn query_response(query_id: i64, rows: usize) -> QueryResponse {
    let results: Vec<ResultRow> = (0..rows)
        .map(|i| {
            let row = json!({"customer": format!("Customer {}", i + 1), "revenue": 1000 - i as i64});
            serde_json::from_value(row).unwrap()
        })
        .collect();
    QueryResponse {
        query_id: QueryId(query_id),
        generated_sql: "SELECT customer, revenue FROM sales".to_string(),
        generated_python: "result = df[['customer', 'revenue']]".to_string(),
        row_count: results.len(),
        results,
        columns: vec!["customer".to_string(), "revenue".to_string()],
        quality_report: QualityReport {
            total_rows: rows as u64,
            total_columns: 2,
            ..QualityReport::default()
        },
    }
}
