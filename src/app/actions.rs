//! Application actions - background requests and their replies
//!
//! Every action asks the workbench for a `Dispatch`, sends it from a
//! spawned task and hands the `Completion` back over a channel. The event
//! loop drains the channel each tick, so state is only mutated here.

use crate::app::state::Reply;
use crate::app::App;
use crate::controller::{Dispatch, RequestKind};
use crate::error::Result;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::debug;

impl App {
    /// Send a dispatch in the background
    pub(crate) fn spawn_dispatch(&self, dispatch: Dispatch) {
        self.spawn_from(dispatch, None);
    }

    fn spawn_from(&self, dispatch: Dispatch, modal: Option<u64>) {
        let backend = self.workbench.backend();
        let tx = self.completions_tx.clone();
        debug!("Spawning {}", dispatch.kind());

        tokio::spawn(async move {
            let completion = dispatch.send(backend.as_ref()).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(Reply { completion, modal });
        });
    }

    /// Spawn a dispatch if the workbench accepted the request
    fn submit(&mut self, dispatch: Result<Dispatch>, modal: Option<u64>) -> bool {
        match dispatch {
            Ok(dispatch) => {
                self.spawn_from(dispatch, modal);
                true
            }
            // Already shown as a toast
            Err(e) => {
                debug!("Request rejected: {}", e);
                false
            }
        }
    }

    /// Apply every reply that has arrived so far
    pub fn check_completions(&mut self) {
        loop {
            match self.completions_rx.try_recv() {
                Ok(reply) => self.apply_completion(reply),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub(crate) fn apply_completion(&mut self, reply: Reply) {
        let Reply { completion, modal } = reply;
        let kind = completion.kind();
        let ticket = completion.query_ticket();
        match self.workbench.complete(completion) {
            Ok(next) => {
                match kind {
                    // A later open of the modal is a new entry; leave it up
                    RequestKind::CreateDataSource
                        if modal == Some(self.data_source_modal_id) =>
                    {
                        self.close_data_source_modal()
                    }
                    RequestKind::Query
                        if ticket.is_some() && ticket == self.workbench.session().accepted_ticket() =>
                    {
                        self.results_scroll = 0
                    }
                    _ => {}
                }
                if let Some(next) = next {
                    self.spawn_dispatch(next);
                }
            }
            Err(e) => debug!("{} failed: {}", kind, e),
        }
    }

    /// Submit the question in the query input
    pub fn start_query(&mut self) {
        let data_source = self.workbench.registry().selected();
        let dispatch = self.workbench.begin_query(&self.query, data_source);
        if self.submit(dispatch, None) {
            self.history_selected = 0;
        }
    }

    /// Request a chart from the current axis picks
    pub fn start_visualization(&mut self) {
        let dispatch = self.workbench.begin_visualization_from_axis(self.chart_type);
        self.submit(dispatch, None);
    }

    /// Submit the create-data-source form; the modal closes once it is saved
    pub fn start_create_data_source(&mut self) {
        let dispatch = self.workbench.begin_create_data_source(&self.data_source_form);
        self.submit(dispatch, Some(self.data_source_modal_id));
    }

    pub fn start_seed_sample_data(&mut self) {
        let dispatch = self.workbench.begin_seed_sample_data();
        self.spawn_dispatch(dispatch);
    }

    pub fn reload_data_sources(&mut self) {
        let dispatch = self.workbench.begin_list_data_sources();
        self.spawn_dispatch(dispatch);
    }

    /// Load the selected history entry into the query input
    pub fn load_history_entry(&mut self) {
        if let Some(entry) = self.workbench.history().get(self.history_selected) {
            self.query = entry.text.clone();
            self.cursor_pos = self.query.chars().count();
            self.active_panel = crate::app::ActivePanel::QueryInput;
        }
    }
}
