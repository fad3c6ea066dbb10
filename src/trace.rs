use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::error::TraceError;

const DEFAULT_FILTER: &str = "info";

/// Registry with a `fmt` layer, filtered by `RUST_LOG` (`info` when unset or invalid).
pub fn default_subscriber() -> impl Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    Registry::default().with(filter).with(fmt::layer())
}

/// Installs `subscriber` globally and forwards `log` records to it.
///
/// Fails if either a logger or a global subscriber is already set.
pub fn init(subscriber: impl Subscriber + Send + Sync) -> Result<(), TraceError> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
