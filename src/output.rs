use serde_json::Value;

use crate::commands::Failure;
use crate::dispatch::Reply;
use crate::error::HoneyError;

/// Text for stdout. `None` means print nothing (2xx without a body).
pub fn render(reply: &Reply<Value>) -> Result<Option<String>, HoneyError> {
    match reply {
        Reply::Decoded(v) => serde_json::to_string_pretty(v)
            .map(Some)
            .map_err(|e| HoneyError::serialization(format!("failed to print response: {e}"))),
        Reply::Empty => Ok(None),
        Reply::DryRun(text) => Ok(Some(text.clone())),
    }
}

/// One structured error record on stderr.
pub fn report_failure(f: &Failure) {
    let http = f
        .error
        .http
        .as_ref()
        .map(Value::to_string)
        .unwrap_or_default();
    let kind = serde_json::to_value(&f.error.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();

    tracing::error!(
        function = %f.command,
        kind = %kind,
        status = f.error.status(),
        error = %f.error.message,
        http = %http,
        payload = %f.payload,
        "command failed"
    );
}
