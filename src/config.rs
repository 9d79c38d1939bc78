use std::fmt;
use std::time::Duration;

use url::Url;

use crate::app_config::{self, AppConfig};
use crate::cli::GlobalArgs;
use crate::error::HoneyError;

pub const ENV_PREFIX: &str = "HONEYBADGER";
pub const DEFAULT_API_HOST: &str = "https://api.honeycomb.io/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings shared by every command, resolved once per invocation.
#[derive(Clone)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub api_host: Url,
    pub dry_run: bool,
    pub timeout: Duration,
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("api_host", &self.api_host.as_str())
            .field("dry_run", &self.dry_run)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// `--favorite-color` binds to `HONEYBADGER_FAVORITE_COLOR`.
pub fn env_var_for_flag(flag: &str) -> String {
    format!("{ENV_PREFIX}_{}", flag.replace('-', "_").to_uppercase())
}

pub fn parse_api_host(raw: &str) -> Result<Url, HoneyError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| HoneyError::config(format!("Failed to parse URL {raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(HoneyError::config(format!(
            "Failed to parse URL {raw}: expected an http(s) origin"
        ))),
    }
}

/// Flag/env values (already merged by clap) win over the config file, which
/// wins over defaults.
pub fn resolve(args: &GlobalArgs, file: Option<&AppConfig>) -> Result<RuntimeConfig, HoneyError> {
    let api_key = args
        .configkey
        .clone()
        .or_else(|| file.and_then(|f| f.configkey.clone()))
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            HoneyError::config(format!(
                "required flag \"configkey\" not set (or set {})",
                env_var_for_flag("configkey")
            ))
        })?;

    let api_host = args
        .api_host
        .clone()
        .or_else(|| file.and_then(|f| f.api_host.clone()))
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
    let api_host = parse_api_host(&api_host)?;

    let dry_run = args
        .dry_run
        .or_else(|| file.and_then(|f| f.dry_run))
        .unwrap_or(false);

    let timeout_secs = args
        .timeout
        .or_else(|| file.and_then(|f| f.timeout))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(HoneyError::config("timeout must be at least 1 second"));
    }

    Ok(RuntimeConfig {
        api_key,
        api_host,
        dry_run,
        timeout: Duration::from_secs(timeout_secs),
    })
}

pub fn resolve_runtime_config(args: &GlobalArgs) -> Result<RuntimeConfig, HoneyError> {
    let file = app_config::read_config()?;
    if let Some((_, path)) = &file {
        tracing::debug!(path = %path.display(), "using config file");
    }
    resolve(args, file.as_ref().map(|(cfg, _)| cfg))
}
