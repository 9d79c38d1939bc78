use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_zero_u32;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Maximum unpacking depth of nested JSON fields. Zero means the API default.
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub expand_json_depth: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,

    /// Null until the dataset has columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_columns_count: Option<u64>,

    /// Null until the dataset receives data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_written_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
