//! Quality report sections

use crate::api::{QualityReport, Suggestion};
use rust_i18n::t;

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionView {
    /// Column name, else the issue text, else a generic label
    pub label: String,
    /// Issue text when the label is a column
    pub detail: Option<String>,
    pub advice: String,
}

impl SuggestionView {
    fn from_suggestion(s: &Suggestion) -> Self {
        let column = s.column.as_deref().filter(|c| !c.is_empty());
        let issue = s.issue.as_deref().filter(|i| !i.is_empty());
        let (label, detail) = match (column, issue) {
            (Some(col), issue) => (col.to_string(), issue.map(str::to_string)),
            (None, Some(issue)) => (issue.to_string(), None),
            (None, None) => (t!("suggestion_general").to_string(), None),
        };
        Self {
            label,
            detail,
            advice: s.suggestion.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QualityView {
    pub total_rows: u64,
    pub total_columns: u64,
    /// Only present when duplicates were found
    pub duplicate_warning: Option<String>,
    /// Columns with missing values, by name
    pub missing: Vec<(String, u64)>,
    pub suggestions: Vec<SuggestionView>,
}

impl QualityView {
    pub fn from_report(report: &QualityReport) -> Self {
        let duplicate_warning = (report.duplicate_rows > 0)
            .then(|| t!("duplicate_rows", count = report.duplicate_rows).to_string());

        let missing = report
            .missing_values
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(col, count)| (col.clone(), *count))
            .collect();

        Self {
            total_rows: report.total_rows,
            total_columns: report.total_columns,
            duplicate_warning,
            missing,
            suggestions: report
                .suggestions
                .iter()
                .map(SuggestionView::from_suggestion)
                .collect(),
        }
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_clean_report_has_only_totals() {
        let report = QualityReport {
            total_rows: 5,
            total_columns: 2,
            ..QualityReport::default()
        };
        let view = QualityView::from_report(&report);
        assert_eq!(view.total_rows, 5);
        assert_eq!(view.total_columns, 2);
        assert!(view.duplicate_warning.is_none());
        assert!(!view.has_suggestions());
        assert!(view.missing.is_empty());
    }

    #[test]
    fn test_duplicates_and_suggestions_sections() {
        let report = QualityReport {
            total_rows: 10,
            total_columns: 3,
            duplicate_rows: 2,
            missing_values: BTreeMap::from([("email".to_string(), 4), ("id".to_string(), 0)]),
            data_types: BTreeMap::new(),
            suggestions: vec![
                Suggestion {
                    column: Some("email".to_string()),
                    issue: Some("High missing values (40.0%)".to_string()),
                    suggestion: "Consider imputation or removal of this column".to_string(),
                },
                Suggestion {
                    column: None,
                    issue: Some("2 duplicate rows found".to_string()),
                    suggestion: "Remove duplicate rows to improve data quality".to_string(),
                },
            ],
        };
        let view = QualityView::from_report(&report);

        assert_eq!(view.duplicate_warning.as_deref(), Some("2 duplicate rows found"));
        assert_eq!(view.missing, vec![("email".to_string(), 4)]);
        assert_eq!(
            view.suggestions,
            vec![
                SuggestionView {
                    label: "email".to_string(),
                    detail: Some("High missing values (40.0%)".to_string()),
                    advice: "Consider imputation or removal of this column".to_string(),
                },
                SuggestionView {
                    label: "2 duplicate rows found".to_string(),
                    detail: None,
                    advice: "Remove duplicate rows to improve data quality".to_string(),
                },
            ]
        );
    }
}
