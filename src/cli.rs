use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

pub const ALL_DATASETS: &str = "__all__";

#[derive(Parser, Debug)]
#[command(
    name = "honeybadger",
    version,
    about = "Honeybadger command line",
    long_about = "Honeybadger - Tearing Into Honeycomb\n\nManage boards, markers, datasets and queries through the Honeycomb API."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Honeycomb configuration key from https://ui.honeycomb.io/<team>/environments/<environment>/api_keys
    #[arg(
        short = 'k',
        long = "configkey",
        global = true,
        env = "HONEYBADGER_CONFIGKEY",
        hide_env_values = true
    )]
    pub configkey: Option<String>,

    /// The host to query, don't change it unless it's a hosted Honeycomb environment.
    #[arg(long = "api_host", global = true, hide = true, env = "HONEYBADGER_API_HOST")]
    pub api_host: Option<String>,

    /// Print the request that would be sent without actually sending it.
    #[arg(
        long = "dry-run",
        global = true,
        env = "HONEYBADGER_DRY_RUN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: Option<bool>,

    /// HTTP timeout in seconds (default: 10).
    #[arg(
        long,
        global = true,
        env = "HONEYBADGER_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage API keys
    #[command(
        visible_alias = "a",
        long_about = "API keys can have various permissions and belong to a specific Environment.\n\nValidate a key, see what it is authorized to do, and which Team and Environment it belongs to."
    )]
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Manage Boards
    #[command(
        visible_alias = "b",
        long_about = "Boards are a place to pin and save useful queries and graphs you want to\nretain for later reuse and reference."
    )]
    Boards {
        #[command(subcommand)]
        command: BoardsCommand,
    },

    /// Manage Datasets
    #[command(
        visible_alias = "d",
        long_about = "A Dataset represents a collection of related events that come from the\nsame source, or are related to the same source."
    )]
    Datasets {
        #[command(subcommand)]
        command: DatasetsCommand,
    },

    /// Manage Dataset Definitions
    #[command(
        name = "dataset_definitions",
        visible_alias = "dd",
        long_about = "Dataset definitions describe the fields with special meaning in the Dataset.\n\nHoneycomb creates them when the Dataset is created; use update to remap them."
    )]
    DatasetDefinitions {
        #[command(subcommand)]
        command: DatasetDefinitionsCommand,
    },

    /// Manage Markers
    #[command(
        visible_alias = "m",
        long_about = "Markers indicate points in time on graphs where interesting things happen,\nsuch as deploys or outages."
    )]
    Markers {
        #[command(flatten)]
        target: DatasetTarget,

        #[command(subcommand)]
        command: MarkersCommand,
    },

    /// Manage Marker Settings
    #[command(
        name = "marker_settings",
        visible_alias = "ms",
        long_about = "Marker Settings apply to groups of similar Markers. For example, `deploys`\nmarkers appear with the same color on a graph."
    )]
    MarkerSettings {
        #[command(flatten)]
        target: DatasetTarget,

        #[command(subcommand)]
        command: MarkerSettingsCommand,
    },

    /// Manage Queries and Query Results
    #[command(visible_alias = "q")]
    Queries {
        #[command(flatten)]
        target: DatasetTarget,

        #[command(subcommand)]
        command: QueriesCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DatasetTarget {
    /// The dataset slug or use __all__ (or omit) for endpoints that support environment-wide operations.
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "HONEYBADGER_DATASET",
        default_value = ALL_DATASETS
    )]
    pub dataset: String,
}

// --- Auth

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// List authorizations
    #[command(visible_aliases = ["ls", "get"])]
    List,
}

// --- Boards

#[derive(Subcommand, Debug)]
pub enum BoardsCommand {
    /// Create a Board without any Queries; add them afterwards.
    #[command(visible_aliases = ["add", "new"])]
    Create(BoardsCreateArgs),

    /// Retrieve all non-secret Boards within an environment.
    #[command(visible_alias = "ls")]
    List,

    /// Get a single Board by ID.
    Get(BoardIdArgs),

    /// Update a Board by ID, leaving existing queries as-is.
    #[command(visible_aliases = ["up", "edit", "modify", "change", "set"])]
    Update(BoardsUpdateArgs),

    /// Delete a single Board by ID.
    #[command(visible_aliases = ["rm", "remove", "del"])]
    Delete(BoardIdArgs),

    /// Add a Query to a Board.
    #[command(name = "add_query", visible_alias = "aq")]
    AddQuery(BoardsAddQueryArgs),
}

#[derive(Args, Debug)]
pub struct BoardIdArgs {
    /// The unique identifier (ID) of a Board.
    #[arg(short, long)]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct BoardsCreateArgs {
    /// The name of the Board.
    #[arg(short, long)]
    pub name: String,

    /// A description of the Board.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// The number of columns to layout on the board.
    #[arg(short = 'c', long = "column_layout", default_value = "")]
    pub column_layout: String,
}

#[derive(Args, Debug)]
pub struct BoardsUpdateArgs {
    /// The unique identifier (ID) of a Board.
    #[arg(short, long)]
    pub id: String,

    /// The name of the Board.
    #[arg(short, long)]
    pub name: String,

    /// A description of the Board.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// The number of columns to layout on the board.
    #[arg(short = 'c', long = "column_layout", default_value = "")]
    pub column_layout: String,
}

#[derive(Args, Debug)]
pub struct BoardsAddQueryArgs {
    /// The unique identifier (ID) of a Board.
    #[arg(short, long)]
    pub id: String,

    /// Descriptive text to contextualize the value of the Query within the Board.
    #[arg(short, long, default_value = "")]
    pub caption: String,

    /// Hide markers on the graph.
    #[arg(short = 'H', long = "hide_markers")]
    pub hide_markers: bool,

    /// Use a log scale, rather than a linear scale.
    #[arg(short = 'L', long = "log_scale")]
    pub log_scale: bool,

    /// Omit missing values from the graph.
    #[arg(short = 'O', long = "omit_missing")]
    pub omit_missing: bool,

    /// Display groups as stacked colored areas under their line graphs.
    #[arg(short = 'S', long = "stacked_graphs")]
    pub stacked_graphs: bool,

    /// Display the X axis in UTC.
    #[arg(short = 'U', long = "utc_xaxis")]
    pub utc_xaxis: bool,

    /// Combine any visualized AVG, MIN, MAX, and PERCENTILE clauses into a single chart.
    #[arg(short = 'V', long = "overlaid_charts")]
    pub overlaid_charts: bool,

    /// How the query should be displayed on the board: graph, table or combo.
    #[arg(short, long, default_value = "")]
    pub style: String,

    /// The Dataset to Query, by name or slug.
    #[arg(short, long, default_value = "")]
    pub dataset: String,

    /// The ID of a Query object.
    #[arg(short = 'q', long = "query_id", default_value = "")]
    pub query_id: String,

    /// The ID of a Query Annotation that names and describes the Query.
    #[arg(short = 'a', long = "annotation_id", default_value = "")]
    pub annotation_id: String,
}

// --- Datasets

#[derive(Subcommand, Debug)]
pub enum DatasetsCommand {
    /// Create a Dataset. An existing Dataset with that name (or slug) is returned as-is.
    #[command(visible_aliases = ["add", "new"])]
    Create(DatasetsCreateArgs),

    /// List all Datasets for an environment.
    #[command(visible_alias = "ls")]
    List,

    /// Get a single Dataset by slug.
    Get(DatasetSlugArgs),

    /// Update a Dataset's description and expand_json_depth.
    ///
    /// Omitting expand_json_depth reverts it to the default.
    #[command(visible_aliases = ["up", "edit", "modify", "change", "set"])]
    Update(DatasetsUpdateArgs),

    /// Asynchronously delete a Dataset. Disabled by default on the Honeycomb side (403).
    #[command(visible_aliases = ["rm", "remove", "del"])]
    Delete(DatasetSlugArgs),
}

#[derive(Args, Debug)]
pub struct DatasetSlugArgs {
    /// The dataset slug.
    #[arg(short, long)]
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct DatasetsCreateArgs {
    /// The name of the dataset.
    #[arg(short, long)]
    pub name: String,

    /// A description for the dataset.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// The maximum unpacking depth of nested JSON fields.
    #[arg(short, long = "expand_json_depth", default_value_t = 0)]
    pub expand_json_depth: u32,
}

#[derive(Args, Debug)]
pub struct DatasetsUpdateArgs {
    /// The dataset slug.
    #[arg(short, long)]
    pub slug: String,

    /// A description for the dataset.
    #[arg(short, long)]
    pub description: String,

    /// The maximum unpacking depth of nested JSON fields.
    #[arg(short, long = "expand_json_depth", default_value_t = 0)]
    pub expand_json_depth: u32,
}

// --- Dataset definitions

#[derive(Subcommand, Debug)]
pub enum DatasetDefinitionsCommand {
    /// Set or update one or more definitions for a Dataset.
    #[command(visible_aliases = ["up", "edit", "modify", "change", "set"])]
    Update(DatasetDefinitionsUpdateArgs),

    /// Get all definitions for a Dataset.
    #[command(visible_aliases = ["ls", "list"])]
    Get(DatasetDefinitionsGetArgs),
}

#[derive(Args, Debug)]
pub struct DatasetDefinitionsGetArgs {
    /// The dataset slug.
    #[arg(long)]
    pub slug: String,
}

#[derive(Args, Debug, Default)]
pub struct DatasetDefinitionsUpdateArgs {
    /// The dataset slug.
    #[arg(long)]
    pub slug: String,

    /// The unique identifier (ID) for each span.
    #[arg(long = "span-id")]
    pub span_id: Option<String>,

    /// The ID of the trace this span belongs to.
    #[arg(long = "trace-id")]
    pub trace_id: Option<String>,

    /// The ID of this span's parent span.
    #[arg(long = "parent-id")]
    pub parent_id: Option<String>,

    /// The name of the function or method where the span was created.
    #[arg(long)]
    pub name: Option<String>,

    /// The name of the instrumented service.
    #[arg(long = "service-name")]
    pub service_name: Option<String>,

    /// How much time the span took, in milliseconds.
    #[arg(long = "duration-ms")]
    pub duration_ms: Option<String>,

    /// The kind of Span, e.g. client or server.
    #[arg(long = "span-kind")]
    pub span_kind: Option<String>,

    /// The type of span annotation, e.g. span_event or link.
    #[arg(long = "annotation-type")]
    pub annotation_type: Option<String>,

    /// Link Span ID: links to a different span (with Link Trace ID).
    #[arg(long = "link-span-id")]
    pub link_span_id: Option<String>,

    /// Link Trace ID: links to a different trace.
    #[arg(long = "link-trace-id")]
    pub link_trace_id: Option<String>,

    /// Use a Boolean or String to indicate error.
    #[arg(long)]
    pub error: Option<String>,

    /// Indicates the success, failure, or other status of a request.
    #[arg(long)]
    pub status: Option<String>,

    /// The HTTP URL or equivalent route processed by the request.
    #[arg(long)]
    pub route: Option<String>,

    /// The user making the request in the system.
    #[arg(long)]
    pub user: Option<String>,
}

// --- Markers

#[derive(Subcommand, Debug)]
pub enum MarkersCommand {
    /// Create a Marker in the specified dataset (__all__ for an environment marker).
    #[command(visible_aliases = ["add", "new"])]
    Create(MarkerFields),

    /// List all Markers for a dataset.
    #[command(visible_aliases = ["ls", "get"])]
    List,

    /// Update a Marker in the specified dataset.
    #[command(visible_aliases = ["up", "edit", "modify", "change", "set"])]
    Update(MarkersUpdateArgs),

    /// Delete a Marker in the specified dataset.
    #[command(visible_aliases = ["rm", "remove", "del"])]
    Delete(MarkerIdArgs),
}

#[derive(Args, Debug, Default)]
pub struct MarkerFields {
    /// When the Marker should be placed, in Unix Time. Defaults to the time the request arrives.
    #[arg(short, long = "start_time", default_value_t = 0)]
    pub start_time: i64,

    /// End time in Unix Time; records the Marker as a time range.
    #[arg(short, long = "end_time", default_value_t = 0)]
    pub end_time: i64,

    /// A message to describe this specific Marker.
    #[arg(short, long, default_value = "")]
    pub msg: String,

    /// Groups similar Markers, e.g. 'deploys'.
    #[arg(short = 't', long = "type", default_value = "")]
    pub kind: String,

    /// A target for the marker. Clicking the marker text will take you to this URL.
    #[arg(short, long, default_value = "")]
    pub url: String,
}

#[derive(Args, Debug)]
pub struct MarkersUpdateArgs {
    /// The unique identifier (ID) of a Marker.
    #[arg(short, long)]
    pub id: String,

    #[command(flatten)]
    pub fields: MarkerFields,
}

#[derive(Args, Debug)]
pub struct MarkerIdArgs {
    /// The unique identifier (ID) of a Marker.
    #[arg(short, long)]
    pub id: String,
}

// --- Marker settings

#[derive(Subcommand, Debug)]
pub enum MarkerSettingsCommand {
    /// Create a Marker Setting in the specified dataset.
    #[command(visible_aliases = ["add", "new", "insert", "put"])]
    Create(MarkerSettingFields),

    /// List all Marker Settings in the specified dataset.
    #[command(visible_aliases = ["ls", "list"])]
    Get,

    /// Update a Marker Setting in the specified dataset.
    #[command(visible_aliases = ["up", "edit", "modify", "change", "set"])]
    Update(MarkerSettingsUpdateArgs),

    /// Delete a Marker Setting in the specified dataset.
    #[command(visible_aliases = ["rm", "remove", "del"])]
    Delete(MarkerSettingIdArgs),
}

#[derive(Args, Debug)]
pub struct MarkerSettingFields {
    /// Groups similar Markers, e.g. 'deploys'.
    #[arg(short = 't', long = "type")]
    pub kind: String,

    /// Display color as hexadecimal RGB, e.g. "#F96E11".
    #[arg(short, long)]
    pub color: String,
}

#[derive(Args, Debug)]
pub struct MarkerSettingsUpdateArgs {
    /// The ID of the marker setting to update.
    #[arg(short, long)]
    pub id: String,

    #[command(flatten)]
    pub fields: MarkerSettingFields,
}

#[derive(Args, Debug)]
pub struct MarkerSettingIdArgs {
    /// The ID of the marker setting to delete.
    #[arg(short, long)]
    pub id: String,
}

// --- Queries

#[derive(Subcommand, Debug)]
pub enum QueriesCommand {
    /// Create a Query from a JSON query specification.
    #[command(visible_aliases = ["add", "new"])]
    Create(QueriesCreateArgs),

    /// Get a Query by ID.
    Get(QueryIdArgs),

    /// Kick off processing of a Query to then get back the Query Results.
    ///
    /// Only the last 7 days of data can be queried.
    #[command(name = "create-query-result", visible_alias = "cqr")]
    CreateQueryResult(QueryResultCreateArgs),

    /// Get the Query Result details for a specific Query Result ID.
    #[command(name = "get-query-result", visible_alias = "gqr")]
    GetQueryResult(QueryResultGetArgs),
}

#[derive(Args, Debug)]
pub struct QueriesCreateArgs {
    /// Query specification as JSON. Supports @/path/to/query.json
    #[arg(long)]
    pub spec: String,
}

#[derive(Args, Debug)]
pub struct QueryIdArgs {
    /// The ID of a Query.
    #[arg(short, long)]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct QueryResultCreateArgs {
    /// The ID of a query returned from the Queries endpoint.
    #[arg(short = 'q', long = "query-id")]
    pub query_id: String,

    /// Only return the summarized results, without the time series.
    #[arg(long = "disable-series")]
    pub disable_series: bool,

    /// Result limit; only honored together with --disable-series.
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct QueryResultGetArgs {
    /// The unique identifier (ID) of the query result.
    #[arg(short = 'q', long = "query-result-id")]
    pub query_result_id: String,
}
