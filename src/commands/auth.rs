use crate::dispatch::{DispatchRequest, Dispatcher, api_path};
use crate::models::auth::Authorization;

use super::{Outcome, run};

pub async fn list(command: &str, d: &Dispatcher) -> Outcome {
    run::<Authorization>(command, d, DispatchRequest::get(api_path(["1", "auth"]))).await
}
