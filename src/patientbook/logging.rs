//! Diagnostic logging setup.
//!
//! Core modules log through `tracing` macros and never install anything
//! themselves; a client calls [`init`] once at startup. Output goes to stderr
//! so it never mixes with command feedback on stdout.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "PATIENTBOOK_LOG";

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Held by the client for the life of the program.
#[derive(Debug)]
#[must_use]
pub struct LoggingGuard {
    _private: (),
}

/// Installs the global subscriber. Later calls leave the first one in place.
///
/// `PATIENTBOOK_LOG` wins over `default_filter` when set and valid.
pub fn init(default_filter: &str) -> LoggingGuard {
    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
    LoggingGuard { _private: () }
}
