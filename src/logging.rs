use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::EventWorkerError;

/// Selects the output format; `json` switches to JSON lines.
pub const LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to stdout.
///
/// Verbosity follows `RUST_LOG`, falling back to `info` when it is unset,
/// blank or unparsable.
pub fn init() -> Result<(), EventWorkerError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = env_filter(rust_log.as_deref())?;
    let json = use_json(std::env::var(LOG_FORMAT).ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };

    result.map_err(|e| EventWorkerError::Logging(e.to_string()))
}

/// True when the `LOG_FORMAT` value asks for JSON output.
pub fn use_json(format: Option<&str>) -> bool {
    format.is_some_and(|format| format.trim().eq_ignore_ascii_case("json"))
}

fn env_filter(directives: Option<&str>) -> Result<EnvFilter, EventWorkerError> {
    if let Some(filter) = directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(DEFAULT_FILTER).map_err(|e| EventWorkerError::Logging(e.to_string()))
}
