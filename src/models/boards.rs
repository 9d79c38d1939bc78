use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSettings {
    #[serde(default)]
    pub hide_markers: bool,
    #[serde(default)]
    pub log_scale: bool,
    #[serde(default)]
    pub omit_missing_values: bool,
    #[serde(default)]
    pub stacked_graphs: bool,
    #[serde(default)]
    pub utc_xaxis: bool,
    #[serde(default)]
    pub overlaid_charts: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,

    /// Always sent in full, false values included.
    #[serde(default)]
    pub graph_settings: GraphSettings,

    /// One of `graph`, `table` or `combo`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_style: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dataset: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_annotation_id: String,

    /// Fields this client does not model, kept so a fetched query is written
    /// back intact.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardLinks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub board_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub column_layout: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<BoardQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<BoardLinks>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Board {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        column_layout: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            column_layout: column_layout.into(),
            ..Self::default()
        }
    }
}

/// Body for `update`: the flag-built board carrying the fetched board's
/// queries. Nothing else from `fetched` survives, and there is no version
/// check, so a change made by someone else between the GET and the PUT is
/// overwritten.
pub fn merge_board_update(fetched: Board, mut update: Board) -> Board {
    update.queries = fetched.queries;
    update
}

/// Body for `add_query`: the fetched board as-is, plus one query at the end.
pub fn append_board_query(mut fetched: Board, query: BoardQuery) -> Board {
    fetched.queries.push(query);
    fetched
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fetched() -> Board {
        serde_json::from_value(json!({
            "id": "b1",
            "name": "Old",
            "description": "old description",
            "style": "visual",
            "column_layout": "multi",
            "links": {"board_url": "https://ui.honeycomb.io/t/board/b1"},
            "queries": [
                {"caption": "p99", "query_id": "q1", "graph_settings": {"log_scale": true}},
                {"query_id": "q2", "query_style": "table", "query": {"calculations": []}}
            ]
        }))
        .expect("board")
    }

    #[test]
    fn flag_built_board_only_carries_given_fields() {
        let b = Board::new("Deploys", "", "");
        assert_eq!(serde_json::to_value(&b).expect("json"), json!({"name": "Deploys"}));
    }

    #[test]
    fn graph_settings_serialize_every_flag() {
        let q = BoardQuery {
            query_id: "q9".to_string(),
            ..BoardQuery::default()
        };
        let v = serde_json::to_value(&q).expect("json");
        assert_eq!(
            v,
            json!({
                "query_id": "q9",
                "graph_settings": {
                    "hide_markers": false,
                    "log_scale": false,
                    "omit_missing_values": false,
                    "stacked_graphs": false,
                    "utc_xaxis": false,
                    "overlaid_charts": false
                }
            })
        );
    }

    #[test]
    fn update_keeps_fetched_queries_and_replaces_the_rest() {
        let merged = merge_board_update(fetched(), Board::new("New", "", "single"));

        assert_eq!(merged.name, "New");
        assert_eq!(merged.description, "");
        assert_eq!(merged.column_layout, "single");
        assert_eq!(merged.style, "");
        assert!(merged.links.is_none());
        assert_eq!(merged.queries, fetched().queries);
    }

    #[test]
    fn update_of_a_board_without_queries_sends_none() {
        let merged = merge_board_update(Board::default(), Board::new("New", "", ""));
        assert_eq!(serde_json::to_value(&merged).expect("json"), json!({"name": "New"}));
    }

    #[test]
    fn append_keeps_the_whole_board_and_adds_one_query_last() {
        let q = BoardQuery {
            caption: "errors".to_string(),
            query_id: "q3".to_string(),
            graph_settings: GraphSettings {
                stacked_graphs: true,
                ..GraphSettings::default()
            },
            ..BoardQuery::default()
        };
        let out = append_board_query(fetched(), q.clone());

        assert_eq!(out.queries.len(), 3);
        assert_eq!(out.queries[2], q);
        assert_eq!(out.id, "b1");
        assert_eq!(out.style, "visual");
        assert_eq!(out.description, "old description");
    }

    #[test]
    fn unmodelled_query_fields_survive_a_round_trip() {
        let v = serde_json::to_value(fetched()).expect("json");
        assert_eq!(v.pointer("/queries/1/query"), Some(&json!({"calculations": []})));
        assert_eq!(v.pointer("/queries/0/graph_settings/log_scale"), Some(&json!(true)));
    }
}
