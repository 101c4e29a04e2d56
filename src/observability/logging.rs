//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Resolve the log filter from environment, CLI and route file
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Writes to stderr so stdout carries only batch output
//! - `RUST_LOG` wins over every other source

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: explicit level first, then the fallback.
pub fn filter_directive(cli_level: Option<&str>, config_level: Option<&str>) -> String {
    cli_level
        .or(config_level)
        .unwrap_or(DEFAULT_LEVEL)
        .to_ascii_lowercase()
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_precedence() {
        assert_eq!(filter_directive(Some("DEBUG"), Some("info")), "debug");
        assert_eq!(filter_directive(None, Some("info")), "info");
        assert_eq!(filter_directive(None, None), DEFAULT_LEVEL);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("error");
        init("error");
    }
}
