//! Log output for the `autoimport` binary.
//!
//! Nothing is installed unless `AUTOIMPORT_LOG` or `RUST_LOG` is set.
//! `AUTOIMPORT_LOG` wins when both are present and uses the same directive
//! syntax (`debug`, `autoimport_resolver=trace`, ...).
//!
//! `AUTOIMPORT_LOG_FORMAT` picks the output shape:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented spans via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! AUTOIMPORT_LOG=trace AUTOIMPORT_LOG_FORMAT=tree autoimport src/
//! ```
//!
//! Everything is written to stderr; stdout carries rewritten files.

use std::str::FromStr;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "AUTOIMPORT_LOG";
pub const LOG_FORMAT_ENV: &str = "AUTOIMPORT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to [`LogFormat::Text`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        })
    }
}

/// Filter directives from the environment, if logging was requested.
fn env_filter() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(directives));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Install the global subscriber. Returns `false` when logging is off.
pub fn init_tracing() -> bool {
    let Some(filter) = env_filter() else {
        return false;
    };
    let format: LogFormat = std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();

    match format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
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
    true
}
