use crate::cli::{DatasetDefinitionsGetArgs, DatasetDefinitionsUpdateArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::error::HoneyError;
use crate::models::dataset_definitions::{DatasetDefinition, DefinitionColumn};

use super::{Failure, Outcome, run, with_body};

fn definitions_path(slug: &str) -> String {
    api_path(["1", "dataset_definitions", slug])
}

fn column(value: &Option<String>) -> Option<DefinitionColumn> {
    value.as_deref().map(DefinitionColumn::named)
}

pub(crate) fn definition_from_args(args: &DatasetDefinitionsUpdateArgs) -> DatasetDefinition {
    DatasetDefinition {
        span_id: column(&args.span_id),
        trace_id: column(&args.trace_id),
        parent_id: column(&args.parent_id),
        name: column(&args.name),
        service_name: column(&args.service_name),
        duration_ms: column(&args.duration_ms),
        span_kind: column(&args.span_kind),
        annotation_type: column(&args.annotation_type),
        link_span_id: column(&args.link_span_id),
        link_trace_id: column(&args.link_trace_id),
        error: column(&args.error),
        status: column(&args.status),
        route: column(&args.route),
        user: column(&args.user),
    }
}

pub async fn update(command: &str, d: &Dispatcher, args: &DatasetDefinitionsUpdateArgs) -> Outcome {
    let body = definition_from_args(args);
    if body.is_empty() {
        return Err(Failure::bare(
            command,
            HoneyError::validation("nothing to update: pass at least one definition flag"),
        ));
    }
    let req = with_body(command, DispatchRequest::patch(definitions_path(&args.slug)), &body)?;
    run::<DatasetDefinition>(command, d, req).await
}

pub async fn get(command: &str, d: &Dispatcher, args: &DatasetDefinitionsGetArgs) -> Outcome {
    run::<DatasetDefinition>(command, d, DispatchRequest::get(definitions_path(&args.slug))).await
}
