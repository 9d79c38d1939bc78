use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::*;
use crate::config;
use crate::dispatch::{DispatchRequest, Dispatcher, Reply};
use crate::error::HoneyError;

mod auth;
mod boards;
mod dataset_definitions;
mod datasets;
mod marker_settings;
mod markers;
mod queries;

/// A failed command: what ran, why it failed, and the request it was making.
#[derive(Debug)]
pub struct Failure {
    pub command: String,
    pub error: HoneyError,
    pub payload: Value,
}

impl Failure {
    pub fn new(command: &str, error: HoneyError, req: &DispatchRequest) -> Self {
        Self {
            command: command.to_string(),
            error,
            payload: req.to_log_value(),
        }
    }

    /// Failure before any request existed (config, argument parsing, encoding).
    pub fn bare(command: &str, error: HoneyError) -> Self {
        Self {
            command: command.to_string(),
            error,
            payload: Value::Null,
        }
    }
}

pub type Outcome = Result<Reply<Value>, Failure>;

pub async fn dispatch(cli: &Cli) -> Outcome {
    let command = command_name(&cli.command);
    let cfg = config::resolve_runtime_config(&cli.global).map_err(|e| Failure::bare(command, e))?;
    tracing::debug!(config = ?cfg, command, "resolved configuration");

    let d = Dispatcher::new(&cfg).map_err(|e| Failure::bare(command, e))?;
    run_command(&cli.command, &d).await
}

pub async fn run_command(cmd: &Command, d: &Dispatcher) -> Outcome {
    let name = command_name(cmd);

    match cmd {
        Command::Auth {
            command: AuthCommand::List,
        } => auth::list(name, d).await,

        Command::Boards { command: sub } => match sub {
            BoardsCommand::Create(args) => boards::create(name, d, args).await,
            BoardsCommand::List => boards::list(name, d).await,
            BoardsCommand::Get(args) => boards::get(name, d, args).await,
            BoardsCommand::Update(args) => boards::update(name, d, args).await,
            BoardsCommand::Delete(args) => boards::delete(name, d, args).await,
            BoardsCommand::AddQuery(args) => boards::add_query(name, d, args).await,
        },

        Command::Datasets { command: sub } => match sub {
            DatasetsCommand::Create(args) => datasets::create(name, d, args).await,
            DatasetsCommand::List => datasets::list(name, d).await,
            DatasetsCommand::Get(args) => datasets::get(name, d, args).await,
            DatasetsCommand::Update(args) => datasets::update(name, d, args).await,
            DatasetsCommand::Delete(args) => datasets::delete(name, d, args).await,
        },

        Command::DatasetDefinitions { command: sub } => match sub {
            DatasetDefinitionsCommand::Update(args) => dataset_definitions::update(name, d, args).await,
            DatasetDefinitionsCommand::Get(args) => dataset_definitions::get(name, d, args).await,
        },

        Command::Markers {
            target,
            command: sub,
        } => {
            let ds = target.dataset.as_str();
            match sub {
                MarkersCommand::Create(args) => markers::create(name, d, ds, args).await,
                MarkersCommand::List => markers::list(name, d, ds).await,
                MarkersCommand::Update(args) => markers::update(name, d, ds, args).await,
                MarkersCommand::Delete(args) => markers::delete(name, d, ds, args).await,
            }
        }

        Command::MarkerSettings {
            target,
            command: sub,
        } => {
            let ds = target.dataset.as_str();
            match sub {
                MarkerSettingsCommand::Create(args) => marker_settings::create(name, d, ds, args).await,
                MarkerSettingsCommand::Get => marker_settings::get(name, d, ds).await,
                MarkerSettingsCommand::Update(args) => marker_settings::update(name, d, ds, args).await,
                MarkerSettingsCommand::Delete(args) => marker_settings::delete(name, d, ds, args).await,
            }
        }

        Command::Queries {
            target,
            command: sub,
        } => {
            let ds = target.dataset.as_str();
            match sub {
                QueriesCommand::Create(args) => queries::create(name, d, ds, args).await,
                QueriesCommand::Get(args) => queries::get(name, d, ds, args).await,
                QueriesCommand::CreateQueryResult(args) => {
                    queries::create_result(name, d, ds, args).await
                }
                QueriesCommand::GetQueryResult(args) => queries::get_result(name, d, ds, args).await,
            }
        }
    }
}

pub fn command_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Auth {
            command: AuthCommand::List,
        } => "auth.list",
        Command::Boards { command: sub } => match sub {
            BoardsCommand::Create(_) => "boards.create",
            BoardsCommand::List => "boards.list",
            BoardsCommand::Get(_) => "boards.get",
            BoardsCommand::Update(_) => "boards.update",
            BoardsCommand::Delete(_) => "boards.delete",
            BoardsCommand::AddQuery(_) => "boards.add_query",
        },
        Command::Datasets { command: sub } => match sub {
            DatasetsCommand::Create(_) => "datasets.create",
            DatasetsCommand::List => "datasets.list",
            DatasetsCommand::Get(_) => "datasets.get",
            DatasetsCommand::Update(_) => "datasets.update",
            DatasetsCommand::Delete(_) => "datasets.delete",
        },
        Command::DatasetDefinitions { command: sub } => match sub {
            DatasetDefinitionsCommand::Update(_) => "dataset_definitions.update",
            DatasetDefinitionsCommand::Get(_) => "dataset_definitions.get",
        },
        Command::Markers { command: sub, .. } => match sub {
            MarkersCommand::Create(_) => "markers.create",
            MarkersCommand::List => "markers.list",
            MarkersCommand::Update(_) => "markers.update",
            MarkersCommand::Delete(_) => "markers.delete",
        },
        Command::MarkerSettings { command: sub, .. } => match sub {
            MarkerSettingsCommand::Create(_) => "marker_settings.create",
            MarkerSettingsCommand::Get => "marker_settings.get",
            MarkerSettingsCommand::Update(_) => "marker_settings.update",
            MarkerSettingsCommand::Delete(_) => "marker_settings.delete",
        },
        Command::Queries { command: sub, .. } => match sub {
            QueriesCommand::Create(_) => "queries.create",
            QueriesCommand::Get(_) => "queries.get",
            QueriesCommand::CreateQueryResult(_) => "queries.create-query-result",
            QueriesCommand::GetQueryResult(_) => "queries.get-query-result",
        },
    }
}

/// Sends `req`, decodes the body as `T`, and hands it back as JSON for printing.
pub(crate) async fn run<T>(command: &str, d: &Dispatcher, req: DispatchRequest) -> Outcome
where
    T: DeserializeOwned + Serialize,
{
    let reply = d
        .send::<T>(&req)
        .await
        .map_err(|e| Failure::new(command, e, &req))?;
    into_json_reply(reply).map_err(|e| Failure::new(command, e, &req))
}

pub(crate) fn into_json_reply<T: Serialize>(reply: Reply<T>) -> Result<Reply<Value>, HoneyError> {
    match reply {
        Reply::Decoded(v) => serde_json::to_value(v)
            .map(Reply::Decoded)
            .map_err(|e| HoneyError::serialization(format!("failed to encode response: {e}"))),
        Reply::Empty => Ok(Reply::Empty),
        Reply::DryRun(s) => Ok(Reply::DryRun(s)),
    }
}

pub(crate) fn with_body<T: Serialize>(
    command: &str,
    req: DispatchRequest,
    body: &T,
) -> Result<DispatchRequest, Failure> {
    req.json_body(body).map_err(|e| Failure::bare(command, e))
}
