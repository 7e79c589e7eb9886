//! Wire types shared by every backend implementation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Identifier of a registered data source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSourceId(pub i64);

impl std::fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier the backend assigns to an executed query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub i64);

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database engines the registry accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    #[default]
    Sqlite,
    Postgresql,
    Mysql,
    Sqlserver,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 4] = [
        DatabaseType::Sqlite,
        DatabaseType::Postgresql,
        DatabaseType::Mysql,
        DatabaseType::Sqlserver,
    ];

    /// Next type in the selector, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseType::Sqlite => write!(f, "sqlite"),
            DatabaseType::Postgresql => write!(f, "postgresql"),
            DatabaseType::Mysql => write!(f, "mysql"),
            DatabaseType::Sqlserver => write!(f, "sqlserver"),
        }
    }
}

/// Data source as listed by the registry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: DataSourceId,
    pub name: String,
    pub database_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl DataSource {
    /// Selector label, e.g. `Sales (sqlite)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.database_type)
    }
}

/// Body of a create-data-source request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDataSource {
    pub name: String,
    pub database_type: DatabaseType,
    pub connection_string: String,
}

/// Body of an execute-query request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub data_source_id: DataSourceId,
}

/// A result row: column name to JSON scalar (or null).
/// Key order is the backend's column order.
pub type ResultRow = serde_json::Map<String, Value>;

/// Successful execute-query payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query_id: QueryId,
    #[serde(default)]
    pub generated_sql: String,
    #[serde(default)]
    pub generated_python: String,
    #[serde(default)]
    pub results: Vec<ResultRow>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub row_count: usize,
    #[serde(default)]
    pub quality_report: QualityReport,
}

/// Backend-computed description of a result set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub total_columns: u64,
    #[serde(default)]
    pub duplicate_rows: u64,
    #[serde(default)]
    pub missing_values: BTreeMap<String, u64>,
    #[serde(default)]
    pub data_types: BTreeMap<String, String>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub suggestion: String,
}

/// Chart kinds the visualize action understands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Scatter,
    Histogram,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Scatter,
        ChartType::Histogram,
    ];

    /// Histograms plot a single variable; every other type needs a Y column
    pub fn requires_y(self) -> bool {
        self != ChartType::Histogram
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Bar => write!(f, "bar"),
            ChartType::Line => write!(f, "line"),
            ChartType::Scatter => write!(f, "scatter"),
            ChartType::Histogram => write!(f, "histogram"),
        }
    }
}

/// Body of a visualize request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualizationRequest {
    pub query_id: QueryId,
    pub chart_type: ChartType,
    pub x_column: String,
    pub y_column: Option<String>,
}

/// Renderable chart specification (`{data, layout}` traces + layout)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub layout: Value,
}

impl ChartSpec {
    /// Title from `layout.title.text` (or a bare string title)
    pub fn title(&self) -> Option<&str> {
        let title = self.layout.get("title")?;
        title
            .get("text")
            .and_then(Value::as_str)
            .or_else(|| title.as_str())
    }
}

/// Export formats the backend can produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Sql,
    Json,
    Python,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Sql => write!(f, "sql"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Python => write!(f, "python"),
        }
    }
}

/// Body of an export request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportRequest {
    pub query_id: QueryId,
    #[serde(rename = "type")]
    pub format: ExportFormat,
}

/// Exported content plus the server-suggested file name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportFile {
    pub content: String,
    pub filename: String,
}

/// Represents a cell value in a rendered result table
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Nested arrays/objects, kept as compact JSON
    Json(String),
}

impl CellValue {
    /// Convert a JSON cell; a missing key behaves like an explicit null
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => CellValue::Null,
            Some(Value::Bool(b)) => CellValue::Bool(*b),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Some(Value::String(s)) => CellValue::String(s.clone()),
            Some(other) => CellValue::Json(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(v) => write!(f, "{}", v),
            CellValue::Json(v) => write!(f, "{}", v),
        }
    }
}
