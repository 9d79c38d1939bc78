use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_zero_i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Unix seconds. The API uses the arrival time when absent.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub start_time: i64,

    /// Unix seconds; makes the marker a time range.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub end_time: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Filled in by the API from the marker settings of the same type.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
