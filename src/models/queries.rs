use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::is_false;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// `COUNT`, `AVG`, `P99`, `HEATMAP`, ...
    pub op: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// `=`, `!=`, `starts-with`, `exists`, `in`, ...
    pub op: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column: String,
    /// Scalar or list, depending on `op`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub op: String,
    /// `ascending` or `descending`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Having {
    pub calculate_op: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column: String,
    pub op: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdowns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calculations: Vec<Calculation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,

    /// `AND` (default) or `OR`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter_combination: String,

    /// Seconds per graph bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub havings: Vec<Having>,

    /// Keys this client does not model, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultRequest {
    pub query_id: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disable_series: bool,

    /// Only honored by the API when `disable_series` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultLinks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub graph_image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResultRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QuerySpec>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// False while the query is still running.
    #[serde(default)]
    pub complete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<QueryResultData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<QueryResultLinks>,
}
