#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the `-v`/`-q` command-line flags into a tracing filter and
//! installs the process-wide subscriber that renders diagnostics on stderr.
//!
//! # Design
//!
//! [`VerbosityConfig`] records how many `-v` flags were given and whether
//! `--quiet` was requested. [`build_filter`] maps that onto an
//! [`EnvFilter`](tracing_subscriber::EnvFilter), unless the
//! [`LOG_ENV_VAR`] environment variable supplies a valid directive string, in
//! which case the variable wins. [`init_tracing`] wires the filter and a
//! plain-text `fmt` layer into a registry.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//! use tracing::level_filters::LevelFilter;
//!
//! assert_eq!(VerbosityConfig::from_verbose_level(0).level_filter(), LevelFilter::WARN);
//! assert_eq!(VerbosityConfig::from_verbose_level(2).level_filter(), LevelFilter::DEBUG);
//! assert_eq!(VerbosityConfig::quiet().level_filter(), LevelFilter::ERROR);
//! ```

mod config;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use tracing_bridge::{LOG_ENV_VAR, build_filter, init_tracing, subscriber};
