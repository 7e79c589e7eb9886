//! Bounded preview of a result table

use crate::api::{CellValue, ResultRow};
use rust_i18n::t;

/// Rows shown before truncating
pub const PREVIEW_ROWS: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub enum TableView {
    /// No rows came back
    Empty,
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
        total_rows: usize,
        /// Rows beyond the preview
        hidden_rows: usize,
    },
}

impl TableView {
    /// Build the preview.
    ///
    /// Columns are the first row's keys; every row is assumed to share
    /// them. A row missing a key shows that cell as NULL.
    pub fn from_rows(data: &[ResultRow]) -> Self {
        let Some(first) = data.first() else {
            return TableView::Empty;
        };

        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = data
            .iter()
            .take(PREVIEW_ROWS)
            .map(|row| {
                columns
                    .iter()
                    .map(|col| CellValue::from_json(row.get(col)))
                    .collect()
            })
            .collect();

        TableView::Rows {
            columns,
            rows,
            total_rows: data.len(),
            hidden_rows: data.len().saturating_sub(PREVIEW_ROWS),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty)
    }

    pub fn columns(&self) -> &[String] {
        match self {
            TableView::Empty => &[],
            TableView::Rows { columns, .. } => columns,
        }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        match self {
            TableView::Empty => &[],
            TableView::Rows { rows, .. } => rows,
        }
    }

    /// Placeholder text when there is nothing to show
    pub fn placeholder(&self) -> Option<String> {
        self.is_empty().then(|| t!("no_results").to_string())
    }

    /// Trailing note when rows were cut from the preview
    pub fn truncation_note(&self) -> Option<String> {
        match self {
            TableView::Rows {
                total_rows,
                hidden_rows,
                ..
            } if *hidden_rows > 0 => Some(
                t!(
                    "rows_truncated",
                    shown = PREVIEW_ROWS,
                    total = total_rows,
                    hidden = hidden_rows
                )
                .to_string(),
            ),
            _ => None,
        }
    }
}
