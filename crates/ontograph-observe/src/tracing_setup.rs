//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! use ontograph_types::config::LogFormat;
//!
//! // Human-readable output, `warn` unless RUST_LOG says otherwise
//! ontograph_observe::tracing_setup::init_tracing("warn", LogFormat::Pretty).unwrap();
//! ```

use ontograph_types::config::LogFormat;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the level filter: `RUST_LOG` when set and valid, else `default_filter`.
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize the global tracing subscriber.
///
/// - `LogFormat::Pretty` installs a compact `fmt` layer without targets.
/// - `LogFormat::Json` installs the JSON formatter with targets, one object
///   per line.
/// - Logs go to stderr so command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(
    default_filter: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(build_filter(default_filter));

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_falls_back_to_default() {
        // Only meaningful when RUST_LOG is unset, which is the test default.
        if std::env::var("RUST_LOG").is_err() {
            let filter = build_filter("warn");
            assert_eq!(filter.to_string(), "warn");
        }
    }
}
