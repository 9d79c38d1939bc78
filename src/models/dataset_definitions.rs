use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionColumn {
    /// Column or derived column mapped to this definition. An empty name
    /// clears the mapping.
    #[serde(default)]
    pub name: String,

    /// `column` or `derived_column`. Ignored by the API on update.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column_type: String,
}

impl DefinitionColumn {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: String::new(),
        }
    }
}

/// Fields with special meaning in a dataset. Unset fields are left out of a
/// PATCH so only the given mappings change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_id: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_kind: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_span_id: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_trace_id: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<DefinitionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<DefinitionColumn>,
}

impl DatasetDefinition {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_body_only_lists_given_columns() {
        let d = DatasetDefinition {
            trace_id: Some(DefinitionColumn::named("trace.trace_id")),
            route: Some(DefinitionColumn::named("")),
            ..DatasetDefinition::default()
        };
        assert_eq!(
            serde_json::to_value(&d).expect("json"),
            json!({"trace_id": {"name": "trace.trace_id"}, "route": {"name": ""}})
        );
        assert!(!d.is_empty());
        assert!(DatasetDefinition::default().is_empty());
    }

    #[test]
    fn null_definitions_decode_as_absent() {
        let d: DatasetDefinition = serde_json::from_value(json!({
            "span_id": {"name": "trace.span_id", "column_type": "column"},
            "user": null
        }))
        .expect("definition");
        assert_eq!(
            d.span_id.map(|c| c.column_type),
            Some("column".to_string())
        );
        assert_eq!(d.user, None);
    }
}
