//! Requests in flight between `begin_*` and `Workbench::complete`
//!
//! A `Dispatch` owns everything needed to talk to the backend, so it can
//! be sent from a background task while the workbench keeps serving the
//! user. The `Completion` it yields is applied back on the owning side.

use crate::api::{
    ChartSpec, DataSource, ExportFile, ExportFormat, ExportRequest, NewDataSource, QueryId,
    QueryRequest, QueryResponse, VisualizationRequest, WorkbenchBackend,
};
use crate::error::Result;
use crate::session::{LoadingGuard, QueryTicket};

/// Which operation a request or reply belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    ListDataSources,
    CreateDataSource,
    SeedSampleData,
    Query,
    Visualize,
    Export,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::ListDataSources => write!(f, "list-data-sources"),
            RequestKind::CreateDataSource => write!(f, "create-data-source"),
            RequestKind::SeedSampleData => write!(f, "seed-sample-data"),
            RequestKind::Query => write!(f, "query"),
            RequestKind::Visualize => write!(f, "visualize"),
            RequestKind::Export => write!(f, "export"),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Request {
    ListDataSources,
    CreateDataSource(NewDataSource),
    SeedSampleData,
    Query {
        ticket: QueryTicket,
        body: QueryRequest,
    },
    Visualize(VisualizationRequest),
    Export(ExportRequest),
}

/// A validated request, ready to send exactly once
#[derive(Debug)]
pub struct Dispatch {
    request: Request,
    loading: Option<LoadingGuard>,
}

impl Dispatch {
    pub(crate) fn new(request: Request) -> Self {
        Self {
            request,
            loading: None,
        }
    }

    /// Keep the loading indicator up until the completion is applied
    pub(crate) fn tracked(request: Request, guard: LoadingGuard) -> Self {
        Self {
            request,
            loading: Some(guard),
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self.request {
            Request::ListDataSources => RequestKind::ListDataSources,
            Request::CreateDataSource(_) => RequestKind::CreateDataSource,
            Request::SeedSampleData => RequestKind::SeedSampleData,
            Request::Query { .. } => RequestKind::Query,
            Request::Visualize(_) => RequestKind::Visualize,
            Request::Export(_) => RequestKind::Export,
        }
    }

    /// Perform the backend call. Never retries.
    pub async fn send(self, backend: &dyn WorkbenchBackend) -> Completion {
        let outcome = match self.request {
            Request::ListDataSources => Outcome::DataSources(backend.list_data_sources().await),
            Request::CreateDataSource(source) => {
                Outcome::DataSourceCreated(backend.create_data_source(&source).await)
            }
            Request::SeedSampleData => Outcome::SampleDataSeeded(backend.seed_sample_data().await),
            Request::Query { ticket, body } => Outcome::Query {
                ticket,
                result: backend.execute_query(&body).await,
            },
            Request::Visualize(body) => Outcome::Chart {
                query_id: body.query_id,
                result: backend.create_visualization(&body).await,
            },
            Request::Export(body) => Outcome::Export {
                format: body.format,
                result: backend.export_results(&body).await,
            },
        };

        Completion {
            outcome,
            loading: self.loading,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Outcome {
    DataSources(Result<Vec<DataSource>>),
    DataSourceCreated(Result<()>),
    SampleDataSeeded(Result<()>),
    Query {
        ticket: QueryTicket,
        result: Result<QueryResponse>,
    },
    Chart {
        query_id: QueryId,
        result: Result<ChartSpec>,
    },
    Export {
        format: ExportFormat,
        result: Result<ExportFile>,
    },
}

/// Backend reply waiting to be applied by `Workbench::complete`
#[derive(Debug)]
pub struct Completion {
    pub(crate) outcome: Outcome,
    pub(crate) loading: Option<LoadingGuard>,
}

impl Completion {
    pub fn kind(&self) -> RequestKind {
        match self.outcome {
            Outcome::DataSources(_) => RequestKind::ListDataSources,
            Outcome::DataSourceCreated(_) => RequestKind::CreateDataSource,
            Outcome::SampleDataSeeded(_) => RequestKind::SeedSampleData,
            Outcome::Query { .. } => RequestKind::Query,
            Outcome::Chart { .. } => RequestKind::Visualize,
            Outcome::Export { .. } => RequestKind::Export,
        }
    }

    /// Submission ticket, for query replies
    pub fn query_ticket(&self) -> Option<QueryTicket> {
        match self.outcome {
            Outcome::Query { ticket, .. } => Some(ticket),
            _ => None,
        }
    }
}
