//! Query execution
//!
//! Every submission that passes validation is recorded in history and
//! tagged with a ticket. A successful reply replaces the session unless
//! a newer submission's reply was already accepted; failures never touch
//! the session.

use crate::api::{DataSourceId, QueryRequest, QueryResponse};
use crate::controller::dispatch::{Dispatch, Request};
use crate::controller::Workbench;
use crate::error::{Result, WorkbenchError};
use crate::render::render_results;
use crate::session::{Acceptance, QueryTicket};
use rust_i18n::t;
use tracing::info;

impl Workbench {
    /// Validate and start a query submission
    pub fn begin_query(&mut self, query_text: &str, data_source: Option<DataSourceId>) -> Result<Dispatch> {
        let query = query_text.trim();
        if query.is_empty() {
            return Err(self.reject(WorkbenchError::validation(t!("enter_query"))));
        }
        let Some(data_source_id) = data_source else {
            return Err(self.reject(WorkbenchError::validation(t!("select_data_source"))));
        };

        self.history.record(query_text);
        let ticket = self.session.issue_ticket();
        info!("Submitting query {:?} against data source {}", ticket, data_source_id);

        Ok(Dispatch::tracked(
            Request::Query {
                ticket,
                body: QueryRequest {
                    query: query.to_string(),
                    data_source_id,
                },
            },
            self.loading.acquire(),
        ))
    }

    /// Submit a query and apply its reply
    pub async fn execute_query(&mut self, query_text: &str, data_source: Option<DataSourceId>) -> Result<()> {
        let dispatch = self.begin_query(query_text, data_source)?;
        self.run(dispatch).await
    }

    pub(super) fn finish_query(
        &mut self,
        ticket: QueryTicket,
        result: Result<QueryResponse>,
    ) -> Result<Option<Dispatch>> {
        let response = match result {
            Ok(response) => response,
            Err(e) => return Err(self.fail(e, &t!("query_failed"))),
        };

        if self.session.accept(ticket, &response) == Acceptance::Stale {
            return Ok(None);
        }

        info!(
            "Query {} returned {} row(s), {} column(s)",
            response.query_id,
            response.row_count,
            response.columns.len()
        );
        let (results, axis) = render_results(&response);
        self.view.results = Some(results);
        self.view.axis = axis;
        // The chart belonged to the previous result
        self.view.chart = None;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::mock::{query_response, Call, MockBackend};
    use crate::api::{DataSourceId, QueryId};
    use crate::controller::tests::workbench_with;
    use crate::error::WorkbenchError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_top_customers_scenario() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(11, 5)));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.execute_query("top 5 customers by revenue", Some(DataSourceId(3)))
            .await
            .unwrap();

        match &mock.calls()[0] {
            Call::ExecuteQuery(req) => {
                assert_eq!(req.query, "top 5 customers by revenue");
                assert_eq!(req.data_source_id, DataSourceId(3));
            }
            other => panic!("unexpected call {:?}", other),
        }

        let results = wb.view().results.as_ref().unwrap();
        assert_eq!(results.table.rows().len(), 5);
        assert!(results.table.truncation_note().is_none());
        assert_eq!(results.quality.total_rows, 5);
        assert_eq!(wb.session().active_query_id(), Some(QueryId(11)));
        assert_eq!(wb.view().axis.choices().len(), 2);
        assert_eq!(wb.history().len(), 1);
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_validation_stops_before_network() {
        let mock = Arc::new(MockBackend::new());
        let (mut wb, _dir) = workbench_with(&mock);

        let err = wb.execute_query("   ", Some(DataSourceId(1))).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(wb.notifications().last_error(), Some("Please enter a query"));

        let err = wb.execute_query("revenue by region", None).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(wb.notifications().last_error(), Some("Please select a data source"));

        assert_eq!(mock.call_count(), 0);
        assert!(wb.history().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_session() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(1, 3)));
        mock.push_query(Err(WorkbenchError::Backend("Query execution failed: no such table".to_string())));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.execute_query("query A", Some(DataSourceId(1))).await.unwrap();
        let err = wb.execute_query("query B", Some(DataSourceId(1))).await.unwrap_err();

        assert!(matches!(err, WorkbenchError::Backend(_)));
        assert_eq!(wb.session().active_query_id(), Some(QueryId(1)));
        assert_eq!(wb.session().active_result_set().unwrap().rows.len(), 3);
        assert_eq!(wb.view().results.as_ref().unwrap().table.rows().len(), 3);
        assert_eq!(
            wb.notifications().last_error(),
            Some("Query execution failed: no such table")
        );
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Err(WorkbenchError::Transport("connection refused".to_string())));
        let (mut wb, _dir) = workbench_with(&mock);

        assert!(wb.execute_query("anything", Some(DataSourceId(1))).await.is_err());
        assert_eq!(wb.notifications().last_error(), Some("Failed to execute query"));
        assert!(!wb.session().has_session());
        assert!(wb.session().active_result_set().is_none());
        assert!(!wb.loading().is_visible());
        assert_eq!(wb.history().len(), 1);
    }

    #[tokio::test]
    async fn test_every_submission_is_recorded_and_capped() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(1, 1)));
        let (mut wb, _dir) = workbench_with(&mock);

        // First succeeds, the rest hit the empty queue and fail
        for i in 1..=6 {
            let _ = wb.execute_query(&format!("q{}", i), Some(DataSourceId(1))).await;
        }

        let texts: Vec<&str> = wb.history().entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["q6", "q5", "q4", "q3", "q2"]);
    }

    #[tokio::test]
    async fn test_history_keeps_raw_text() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(1, 1)));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.execute_query("  sales by month ", Some(DataSourceId(1))).await.unwrap();
        assert_eq!(wb.history().get(0).unwrap().text, "  sales by month ");
        assert!(matches!(&mock.calls()[0], Call::ExecuteQuery(r) if r.query == "sales by month"));
    }

    #[tokio::test]
    async fn test_history_recorded_before_reply() {
        let mock = Arc::new(MockBackend::new());
        let (mut wb, _dir) = workbench_with(&mock);

        let dispatch = wb.begin_query("pending", Some(DataSourceId(1))).unwrap();
        assert_eq!(wb.history().len(), 1);
        assert!(wb.loading().is_visible());
        drop(dispatch);
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_late_reply_of_older_query_is_discarded() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(1, 7)));
        mock.push_query(Ok(query_response(2, 2)));
        let (mut wb, _dir) = workbench_with(&mock);
        let backend = wb.backend();

        let first = wb.begin_query("older", Some(DataSourceId(1))).unwrap();
        let second = wb.begin_query("newer", Some(DataSourceId(1))).unwrap();
        let (first_done, second_done) =
            futures::join!(first.send(backend.as_ref()), second.send(backend.as_ref()));
        assert!(wb.loading().is_visible());

        // Newer reply arrives first, then the older one
        wb.complete(second_done).unwrap();
        wb.complete(first_done).unwrap();

        assert_eq!(wb.session().active_query_id(), Some(QueryId(2)));
        assert_eq!(wb.view().results.as_ref().unwrap().table.rows().len(), 2);
        assert!(!wb.loading().is_visible());
    }

    #[tokio::test]
    async fn test_new_result_resets_axis_and_chart() {
        let mock = Arc::new(MockBackend::new());
        mock.push_query(Ok(query_response(1, 3)));
        mock.push_query(Ok(query_response(2, 3)));
        let (mut wb, _dir) = workbench_with(&mock);

        wb.execute_query("first", Some(DataSourceId(1))).await.unwrap();
        wb.axis_mut().select_x("customer");
        wb.axis_mut().select_y("revenue");
        wb.create_visualization(crate::api::ChartType::Bar, Some("customer"), Some("revenue"))
            .await
            .unwrap();
        assert!(wb.view().chart.is_some());

        wb.execute_query("second", Some(DataSourceId(1))).await.unwrap();
        assert_eq!(wb.view().axis.x_column(), None);
        assert_eq!(wb.view().axis.y_column(), None);
        assert!(wb.view().chart.is_none());
    }
}
