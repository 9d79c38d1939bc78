use serde_json::Value;

use crate::cli::{MarkerSettingFields, MarkerSettingIdArgs, MarkerSettingsUpdateArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::models::marker_settings::MarkerSetting;

use super::{Outcome, run, with_body};

pub async fn create(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &MarkerSettingFields,
) -> Outcome {
    let body = MarkerSetting {
        kind: args.kind.clone(),
        color: args.color.clone(),
        ..MarkerSetting::default()
    };
    let req = with_body(
        command,
        DispatchRequest::post(api_path(["1", "marker_settings", dataset])),
        &body,
    )?;
    run::<MarkerSetting>(command, d, req).await
}

pub async fn get(command: &str, d: &Dispatcher, dataset: &str) -> Outcome {
    run::<Vec<MarkerSetting>>(
        command,
        d,
        DispatchRequest::get(api_path(["1", "marker_settings", dataset])),
    )
    .await
}

pub async fn update(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &MarkerSettingsUpdateArgs,
) -> Outcome {
    let body = MarkerSetting {
        id: args.id.clone(),
        kind: args.fields.kind.clone(),
        color: args.fields.color.clone(),
        ..MarkerSetting::default()
    };
    let req = with_body(
        command,
        DispatchRequest::put(api_path(["1", "marker_settings", dataset, &args.id])),
        &body,
    )?;
    run::<MarkerSetting>(command, d, req).await
}

pub async fn delete(
    command: &str,
    d: &Dispatcher,
    dataset: &str,
    args: &MarkerSettingIdArgs,
) -> Outcome {
    run::<Value>(
        command,
        d,
        DispatchRequest::delete(api_path(["1", "marker_settings", dataset, &args.id])),
    )
    .await
}
