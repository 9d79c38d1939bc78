use serde::{Deserialize, Serialize};

use super::is_false;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyAccess {
    #[serde(default, skip_serializing_if = "is_false")]
    pub events: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub markers: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub triggers: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub boards: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub queries: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub columns: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub create_datasets: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub slos: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub recipients: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub private_boards: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
}

/// What an API key may do and where it belongs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default)]
    pub api_key_access: ApiKeyAccess,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Named>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Named>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_camel_case_access_flags() {
        let a: Authorization = serde_json::from_value(json!({
            "id": "abc",
            "type": "configuration",
            "api_key_access": {"events": true, "createDatasets": true, "privateBoards": false},
            "environment": {"name": "Production", "slug": "production"},
            "team": {"name": "Acme", "slug": "acme"}
        }))
        .expect("auth");

        assert!(a.api_key_access.events);
        assert!(a.api_key_access.create_datasets);
        assert!(!a.api_key_access.markers);
        assert_eq!(a.team.as_ref().map(|t| t.slug.as_str()), Some("acme"));

        let v = serde_json::to_value(&a).expect("json");
        assert_eq!(v.pointer("/api_key_access/createDatasets"), Some(&json!(true)));
        assert_eq!(v.pointer("/api_key_access/markers"), None);
        assert_eq!(v.pointer("/api_key_access/privateBoards"), None);
    }

    #[test]
    fn absent_sections_stay_absent() {
        let a: Authorization = serde_json::from_value(json!({"id": "abc"})).expect("auth");
        assert_eq!(
            serde_json::to_value(&a).expect("json"),
            json!({"id": "abc", "api_key_access": {}})
        );
    }
}
