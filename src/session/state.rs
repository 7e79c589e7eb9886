//! Active query session
//!
//! The query id and its result set live in one `Option<Session>`, so
//! they are present together or not at all and are replaced in one step.

use crate::api::{QueryId, QueryResponse, ResultRow};
use tracing::{debug, warn};

/// Rows and columns of the last accepted query
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

/// The (query id, result set) pair of the most recent successful query
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub query_id: QueryId,
    pub result: ResultSet,
}

/// Ticket handed to each query submission, ordered by submission time
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

/// Whether a completed query was applied to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    /// A newer submission had already been accepted
    Stale,
}

/// Session context owned by the controller and lent to readers
#[derive(Debug, Default)]
pub struct SessionState {
    session: Option<Session>,
    next_ticket: u64,
    accepted: Option<QueryTicket>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a new submission
    pub fn issue_ticket(&mut self) -> QueryTicket {
        self.next_ticket += 1;
        QueryTicket(self.next_ticket)
    }

    /// Replace the session with a successful response, unless a newer
    /// submission has already been accepted.
    pub fn accept(&mut self, ticket: QueryTicket, response: &QueryResponse) -> Acceptance {
        if let Some(latest) = self.accepted {
            if ticket < latest {
                warn!(
                    "Discarding response for query {} (ticket {:?} older than accepted {:?})",
                    response.query_id, ticket, latest
                );
                return Acceptance::Stale;
            }
        }

        self.session = Some(Session {
            query_id: response.query_id,
            result: ResultSet {
                columns: response.columns.clone(),
                rows: response.results.clone(),
            },
        });
        self.accepted = Some(ticket);
        debug!("Session now on query {}", response.query_id);
        Acceptance::Accepted
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn active_query_id(&self) -> Option<QueryId> {
        self.session.as_ref().map(|s| s.query_id)
    }

    pub fn active_result_set(&self) -> Option<&ResultSet> {
        self.session.as_ref().map(|s| &s.result)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Ticket of the submission the session currently reflects
    pub fn accepted_ticket(&self) -> Option<QueryTicket> {
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::query_response;

    #[test]
    fn test_empty_at_start() {
        let state = SessionState::new();
        assert!(state.active_query_id().is_none());
        assert!(state.active_result_set().is_none());
    }

    #[test]
    fn test_accept_sets_id_and_rows_together() {
        let mut state = SessionState::new();
        let ticket = state.issue_ticket();
        assert_eq!(state.accept(ticket, &query_response(4, 3)), Acceptance::Accepted);

        assert_eq!(state.active_query_id(), Some(QueryId(4)));
        assert_eq!(state.active_result_set().unwrap().rows.len(), 3);
    }

    #[test]
    fn test_older_ticket_is_discarded_after_newer_accept() {
        let mut state = SessionState::new();
        let first = state.issue_ticket();
        let second = state.issue_ticket();

        assert_eq!(state.accept(second, &query_response(2, 1)), Acceptance::Accepted);
        assert_eq!(state.accept(first, &query_response(1, 5)), Acceptance::Stale);

        assert_eq!(state.active_query_id(), Some(QueryId(2)));
        assert_eq!(state.active_result_set().unwrap().rows.len(), 1);
        assert_eq!(state.accepted_ticket(), Some(second));
    }

    #[test]
    fn test_in_order_completion_accepts_both() {
        let mut state = SessionState::new();
        let first = state.issue_ticket();
        let second = state.issue_ticket();

        assert_eq!(state.accept(first, &query_response(1, 5)), Acceptance::Accepted);
        assert_eq!(state.accept(second, &query_response(2, 1)), Acceptance::Accepted);
        assert_eq!(state.active_query_id(), Some(QueryId(2)));
    }
}
