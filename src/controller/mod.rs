//! Workbench controller, the orchestration core
//!
//! `Workbench` owns the session, history, loading indicator, toasts and
//! the view-models the front-end draws. Every user operation is split
//! into `begin_*` (validate, produce a `Dispatch`), `Dispatch::send`
//! (backend call, may run on another task) and `complete` (apply the
//! reply). The `async fn` wrappers run all three in sequence.
//!
//! State is only touched in `begin_*` and `complete`, both of which take
//! `&mut self`, so replies are applied one at a time in arrival order.

mod dispatch;
mod export;
mod query;
mod registry;
mod visualize;

pub use dispatch::{Completion, Dispatch, RequestKind};
pub use registry::DataSourceRegistry;

use crate::api::{ChartSpec, WorkbenchBackend};
use crate::download::Downloads;
use crate::error::{Result, WorkbenchError};
use crate::render::{AxisSelector, ResultsView};
use crate::session::{LoadingIndicator, Notifications, QueryHistory, SessionState};
use dispatch::Outcome;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// What the front-end currently shows
#[derive(Clone, Debug, Default)]
pub struct WorkbenchView {
    /// Last accepted query, rendered
    pub results: Option<ResultsView>,
    /// Axis choices for the current result shape
    pub axis: AxisSelector,
    /// Chart in the output region; a new one replaces it
    pub chart: Option<ChartSpec>,
    /// Where the most recent export was saved
    pub last_download: Option<PathBuf>,
}

pub struct Workbench {
    backend: Arc<dyn WorkbenchBackend>,
    session: SessionState,
    history: QueryHistory,
    loading: LoadingIndicator,
    notifications: Notifications,
    registry: DataSourceRegistry,
    view: WorkbenchView,
    downloads: Downloads,
}

impl Workbench {
    pub fn new(backend: Arc<dyn WorkbenchBackend>, downloads: Downloads) -> Self {
        Self {
            backend,
            session: SessionState::new(),
            history: QueryHistory::default(),
            loading: LoadingIndicator::new(),
            notifications: Notifications::default(),
            registry: DataSourceRegistry::default(),
            view: WorkbenchView::default(),
            downloads,
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notifications = Notifications::new(ttl);
        self
    }

    // === Accessors ===

    pub fn backend(&self) -> Arc<dyn WorkbenchBackend> {
        Arc::clone(&self.backend)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    pub fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DataSourceRegistry {
        &mut self.registry
    }

    pub fn view(&self) -> &WorkbenchView {
        &self.view
    }

    pub fn axis_mut(&mut self) -> &mut AxisSelector {
        &mut self.view.axis
    }

    pub fn downloads(&self) -> &Downloads {
        &self.downloads
    }

    // === Request lifecycle ===

    /// Send a dispatch and apply its reply, following any chained request
    pub async fn run(&mut self, dispatch: Dispatch) -> Result<()> {
        let backend = self.backend();
        let mut next = Some(dispatch);
        while let Some(dispatch) = next.take() {
            debug!("Sending {}", dispatch.kind());
            let completion = dispatch.send(backend.as_ref()).await;
            next = self.complete(completion)?;
        }
        Ok(())
    }

    /// Apply a backend reply.
    ///
    /// May return a follow-up request (a list reload after a create).
    /// The loading guard carried by the completion is released on return.
    pub fn complete(&mut self, completion: Completion) -> Result<Option<Dispatch>> {
        let Completion { outcome, loading: _loading } = completion;
        match outcome {
            Outcome::DataSources(result) => self.finish_list(result),
            Outcome::DataSourceCreated(result) => self.finish_create(result),
            Outcome::SampleDataSeeded(result) => self.finish_seed(result),
            Outcome::Query { ticket, result } => self.finish_query(ticket, result),
            Outcome::Chart { query_id, result } => self.finish_visualization(query_id, result),
            Outcome::Export { format, result } => self.finish_export(format, result),
        }
    }

    /// Show a pre-network rejection
    fn reject(&mut self, err: WorkbenchError) -> WorkbenchError {
        self.notifications.error(err.user_message(""));
        err
    }

    /// Show a failed round-trip with the most specific message available
    fn fail(&mut self, err: WorkbenchError, fallback: &str) -> WorkbenchError {
        if let WorkbenchError::Transport(cause) = &err {
            warn!("Transport failure: {}", cause);
        }
        self.notifications.error(err.user_message(fallback));
        err
    }
}
