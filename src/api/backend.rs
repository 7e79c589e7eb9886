//! Backend service abstraction
//!
//! Defines the interface to the query, charting, export and registry
//! services. The controller only ever talks to this trait.

use crate::api::{
    ChartSpec, DataSource, ExportFile, ExportRequest, NewDataSource, QueryRequest, QueryResponse,
    VisualizationRequest,
};
use crate::error::Result;
use async_trait::async_trait;

/// Trait that every backend transport must implement.
///
/// Implementations map a structured `{success: false, error}` reply to
/// `WorkbenchError::Backend` and everything else that goes wrong on the
/// wire to `WorkbenchError::Transport`. No method retries.
#[async_trait]
pub trait WorkbenchBackend: Send + Sync {
    /// List registered data sources
    async fn list_data_sources(&self) -> Result<Vec<DataSource>>;

    /// Register a new data source
    async fn create_data_source(&self, source: &NewDataSource) -> Result<()>;

    /// Ask the backend to create and register its sample database
    async fn seed_sample_data(&self) -> Result<()>;

    /// Run a natural-language query against a data source
    async fn execute_query(&self, request: &QueryRequest) -> Result<QueryResponse>;

    /// Build a chart specification over a previous query's results
    async fn create_visualization(&self, request: &VisualizationRequest) -> Result<ChartSpec>;

    /// Produce exportable content for a previous query
    async fn export_results(&self, request: &ExportRequest) -> Result<ExportFile>;
}
