//! Chart requests scoped to the active session

use crate::api::{ChartSpec, ChartType, QueryId, VisualizationRequest};
use crate::controller::dispatch::{Dispatch, Request};
use crate::controller::Workbench;
use crate::error::{Result, WorkbenchError};
use rust_i18n::t;
use tracing::{info, warn};

fn picked(column: Option<&str>) -> Option<&str> {
    column.map(str::trim).filter(|c| !c.is_empty())
}

impl Workbench {
    /// Validate and start a chart request for the current session
    pub fn begin_visualization(
        &mut self,
        chart_type: ChartType,
        x_column: Option<&str>,
        y_column: Option<&str>,
    ) -> Result<Dispatch> {
        let Some(query_id) = self.session.active_query_id() else {
            return Err(self.reject(WorkbenchError::no_session(t!("no_results_to_visualize"))));
        };
        let Some(x) = picked(x_column) else {
            return Err(self.reject(WorkbenchError::validation(t!("select_x_axis"))));
        };
        let y = picked(y_column);
        if chart_type.requires_y() && y.is_none() {
            return Err(self.reject(WorkbenchError::validation(t!("select_y_axis"))));
        }

        info!("Requesting {} chart for query {} (x={}, y={:?})", chart_type, query_id, x, y);
        Ok(Dispatch::new(Request::Visualize(VisualizationRequest {
            query_id,
            chart_type,
            x_column: x.to_string(),
            y_column: y.map(str::to_string),
        })))
    }

    pub async fn create_visualization(
        &mut self,
        chart_type: ChartType,
        x_column: Option<&str>,
        y_column: Option<&str>,
    ) -> Result<()> {
        let dispatch = self.begin_visualization(chart_type, x_column, y_column)?;
        self.run(dispatch).await
    }

    /// Chart request from the axis selector's current picks
    pub fn begin_visualization_from_axis(&mut self, chart_type: ChartType) -> Result<Dispatch> {
        let x = self.view.axis.x_column().map(str::to_string);
        let y = self.view.axis.y_column().map(str::to_string);
        self.begin_visualization(chart_type, x.as_deref(), y.as_deref())
    }

    pub(super) fn finish_visualization(
        &mut self,
        query_id: QueryId,
        result: Result<ChartSpec>,
    ) -> Result<Option<Dispatch>> {
        match result {
            Ok(spec) if self.session.active_query_id() == Some(query_id) => {
                self.view.chart = Some(spec);
                Ok(None)
            }
            Ok(_) => {
                warn!("Discarding chart for query {}: session moved on", query_id);
                Ok(None)
            }
            Err(e) => Err(self.fail(e, &t!("visualization_failed"))),
        }
    }
}
