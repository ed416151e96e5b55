//! Tracing subscriber setup.
//!
//! The subscriber is only installed when `DECOMMENT_LOG` (or `RUST_LOG`) is
//! set. `DECOMMENT_LOG_FORMAT=json` switches to one JSON object per event.
//!
//! ```bash
//! DECOMMENT_LOG=debug decomment strip src/
//! DECOMMENT_LOG=decomment_core=debug DECOMMENT_LOG_FORMAT=json decomment check .
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// `DECOMMENT_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("DECOMMENT_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays clean for
/// JSON reports and `print` output.
pub(crate) fn init() {
    let requested =
        std::env::var_os("DECOMMENT_LOG").is_some() || std::env::var_os("RUST_LOG").is_some();
    if !requested {
        return;
    }

    let filter = build_filter();
    let format = LogFormat::parse(&std::env::var("DECOMMENT_LOG_FORMAT").unwrap_or_default());

    match format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("tree"), LogFormat::Text);
    }
}
