use serde_json::Value;

use crate::cli::{DatasetSlugArgs, DatasetsCreateArgs, DatasetsUpdateArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::models::datasets::Dataset;

use super::{Outcome, run, with_body};

fn dataset_path(slug: &str) -> String {
    api_path(["1", "datasets", slug])
}

/// The API answers 200 with the existing dataset when the name is taken.
pub async fn create(command: &str, d: &Dispatcher, args: &DatasetsCreateArgs) -> Outcome {
    let body = Dataset {
        name: args.name.clone(),
        description: args.description.clone(),
        expand_json_depth: args.expand_json_depth,
        ..Dataset::default()
    };
    let req = with_body(command, DispatchRequest::post(api_path(["1", "datasets"])), &body)?;
    run::<Dataset>(command, d, req).await
}

pub async fn list(command: &str, d: &Dispatcher) -> Outcome {
    run::<Vec<Dataset>>(command, d, DispatchRequest::get(api_path(["1", "datasets"]))).await
}

pub async fn get(command: &str, d: &Dispatcher, args: &DatasetSlugArgs) -> Outcome {
    run::<Dataset>(command, d, DispatchRequest::get(dataset_path(&args.slug))).await
}

pub async fn update(command: &str, d: &Dispatcher, args: &DatasetsUpdateArgs) -> Outcome {
    let body = Dataset {
        description: args.description.clone(),
        expand_json_depth: args.expand_json_depth,
        ..Dataset::default()
    };
    let req = with_body(command, DispatchRequest::put(dataset_path(&args.slug)), &body)?;
    run::<Dataset>(command, d, req).await
}

pub async fn delete(command: &str, d: &Dispatcher, args: &DatasetSlugArgs) -> Outcome {
    run::<Value>(command, d, DispatchRequest::delete(dataset_path(&args.slug))).await
}
