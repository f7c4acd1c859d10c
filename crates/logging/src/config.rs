//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v` and `--quiet`.

use tracing::level_filters::LevelFilter;

/// Requested diagnostic verbosity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    /// Number of `-v` flags.
    pub verbose: u8,
    /// `--quiet` was given. Overrides `verbose`.
    pub quiet: bool,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level.
    ///
    /// Level 0 shows warnings and errors, 1 adds info, 2 adds debug and 3 or
    /// more enables trace output.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self {
            verbose: level,
            quiet: false,
        }
    }

    /// Configuration that only reports errors.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            verbose: 0,
            quiet: true,
        }
    }

    /// Most verbose level that passes the filter.
    #[must_use]
    pub const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
