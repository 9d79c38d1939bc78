use crate::cli::{MarkerFields, MarkerIdArgs, MarkersUpdateArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::models::markers::Marker;

use super::{Outcome, run, with_body};

fn marker_from_fields(fields: &MarkerFields) -> Marker {
    Marker {
        start_time: fields.start_time,
        end_time: fields.end_time,
        message: fields.msg.clone(),
        kind: fields.kind.clone(),
        url: fields.url.clone(),
        ..Marker::default()
    }
}

pub async fn create(command: &str, d: &Dispatcher, dataset: &str, args: &MarkerFields) -> Outcome {
    let body = marker_from_fields(args);
    let req = with_body(command, DispatchRequest::post(api_path(["1", "markers", dataset])), &body)?;
    run::<Marker>(command, d, req).await
}

pub async fn list(command: &str, d: &Dispatcher, dataset: &str) -> Outcome {
    run::<Vec<Marker>>(command, d, DispatchRequest::get(api_path(["1", "markers", dataset]))).await
}

pub async fn update(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &MarkersUpdateArgs,
) -> Outcome {
    let body = Marker {
        id: args.id.clone(),
        ..marker_from_fields(&args.fields)
    };
    let req = with_body(
        command,
        DispatchRequest::put(api_path(["1", "markers", dataset, &args.id])),
        &body,
    )?;
    run::<Marker>(command, d, req).await
}

pub async fn delete(command: &str, d: &Dispatcher, dataset: &str, args: &MarkerIdArgs) -> Outcome {
    run::<Marker>(
        command,
        d,
        DispatchRequest::delete(api_path(["1", "markers", dataset, &args.id])),
    )
    .await
}
