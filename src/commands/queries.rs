use std::fs;

use crate::cli::{QueriesCreateArgs, QueryIdArgs, QueryResultCreateArgs, QueryResultGetArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::error::HoneyError;
use crate::models::queries::{QueryResult, QueryResultRequest, QuerySpec};

use super::{Failure, Outcome, run, with_body};

/// Inline JSON, or `@path` to read it from a file.
pub(crate) fn read_json_arg(value: &str) -> Result<String, HoneyError> {
    if let Some(path) = value.strip_prefix('@') {
        fs::read_to_string(path)
            .map_err(|e| HoneyError::validation(format!("failed to read json file {path}: {e}")))
    } else {
        Ok(value.to_string())
    }
}

pub(crate) fn parse_query_spec(value: &str) -> Result<QuerySpec, HoneyError> {
    let text = read_json_arg(value)?;
    serde_json::from_str(&text)
        .map_err(|e| HoneyError::validation(format!("invalid query spec: {e}")))
}

pub async fn create(command: &str, d: &Dispatcher, dataset: &str, args: &QueriesCreateArgs) -> Outcome {
    let spec = parse_query_spec(&args.spec).map_err(|e| Failure::bare(command, e))?;
    let req = with_body(command, DispatchRequest::post(api_path(["1", "queries", dataset])), &spec)?;
    run::<QuerySpec>(command, d, req).await
}

pub async fn get(command: &str, d: &Dispatcher, dataset: &str, args: &QueryIdArgs) -> Outcome {
    run::<QuerySpec>(
        command,
        d,
        DispatchRequest::get(api_path(["1", "queries", dataset, &args.id])),
    )
    .await
}

/// Starts a query run. The result is fetched later with `get_result`.
pub async fn create_result(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &QueryResultCreateArgs,
) -> Outcome {
    let body = QueryResultRequest {
        query_id: args.query_id.clone(),
        disable_series: args.disable_series,
        limit: args.limit,
    };
    let req = with_body(
        command,
        DispatchRequest::post(api_path(["1", "query_results", dataset])),
        &body,
    )?;
    run::<QueryResult>(command, d, req).await
}

pub async fn get_result(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &QueryResultGetArgs,
) -> Outcome {
    run::<QueryResult>(
        command,
        d,
        DispatchRequest::get(api_path(["1", "query_results", dataset, &args.query_result_id])),
    )
    .await
}
