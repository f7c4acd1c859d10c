//! crates/logging/src/tracing_bridge.rs
//! Subscriber construction for the tracing ecosystem.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(1));
//! tracing::info!(target: "signature::sign", "computing HMAC");
//! ```

use std::env;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Environment variable holding `EnvFilter` directives that replace the
/// verbosity flags, for example `HMACGEN_LOG=signature=trace`.
pub const LOG_ENV_VAR: &str = "HMACGEN_LOG";

/// Build the event filter for `config`.
///
/// A non-empty `env_override` that parses as `EnvFilter` directives takes
/// precedence. Malformed overrides are ignored.
#[must_use]
pub fn build_filter(config: &VerbosityConfig, env_override: Option<&str>) -> EnvFilter {
    if let Some(directives) = env_override.map(str::trim).filter(|d| !d.is_empty())
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }
    EnvFilter::new(config.level_filter().to_string())
}

/// Assemble a registry with `filter` and a plain-text formatter writing to
/// `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(layer)
}

/// Install the global subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let env_override = env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(&config, env_override.as_deref());

    subscriber(filter, std::io::stderr).try_init().is_ok()
}
