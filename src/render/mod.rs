//! View-models derived from a successful query response
//!
//! Everything here is a pure function of the payload. Drawing the
//! view-models is the front-end's job.

mod axis;
mod quality;
mod table;

pub use axis::*;
pub use quality::*;
pub use table::*;

use crate::api::QueryResponse;
use rust_i18n::t;

/// Everything shown after a query succeeds
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub generated_sql: String,
    pub generated_python: String,
    /// e.g. `5 rows, 2 columns`
    pub summary: String,
    pub table: TableView,
    pub quality: QualityView,
}

/// Render a response into its results view and fresh axis choices
pub fn render_results(response: &QueryResponse) -> (ResultsView, AxisSelector) {
    let view = ResultsView {
        generated_sql: response.generated_sql.clone(),
        generated_python: response.generated_python.clone(),
        summary: t!(
            "results_summary",
            rows = response.row_count,
            columns = response.columns.len()
        )
        .to_string(),
        table: TableView::from_rows(&response.results),
        quality: QualityView::from_report(&response.quality_report),
    };
    (view, AxisSelector::from_columns(&response.columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::query_response;

    #[test]
    fn test_render_five_customers() {
        let (view, axis) = render_results(&query_response(1, 5));

        assert_eq!(view.summary, "5 rows, 2 columns");
        assert_eq!(view.table.rows().len(), 5);
        assert!(view.table.truncation_note().is_none());
        assert_eq!(view.quality.total_rows, 5);
        assert_eq!(axis.choices(), ["customer".to_string(), "revenue".to_string()]);
        assert!(axis.x_column().is_none());
    }
}
