//! Diagnostics for the parser and the diagram generators
//!
//! Events are emitted with `tracing` and always written to stderr, so a
//! diagram piped from stdout never picks up log lines.
//!
//! ```rust,no_run
//! use tfmermaid::core::logging::init_logging;
//!
//! init_logging(Some("debug"), Some("pretty")).unwrap();
//! ```
//!
//! Levels used by the crate:
//!
//! - `trace`: dropped dangling dependencies, individual inferred edges
//! - `debug`: resources found per module, sections built per diagram
//! - `info`: parse and generation summaries (the default)
//! - `warn`: a document that yielded no managed resources
//!
//! Settings come from the arguments first, then `TFMERMAID_LOG_LEVEL` /
//! `TFMERMAID_LOG_FORMAT`, then `RUST_LOG`. A full `RUST_LOG` directive
//! string still wins for per-module filtering:
//!
//! ```bash
//! RUST_LOG="tfmermaid::parser=trace" tfmermaid generate terraform.tfstate
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_FORMAT: &str = "compact";

/// How log events are laid out on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, no source locations
    Compact,
    /// Multi-line, coloured, with file and line
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Accepted names, in the order shown in help text
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_level(true);
        match self {
            LogFormat::Compact => base
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .boxed(),
            LogFormat::Pretty => base
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => base
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .json()
                .boxed(),
        }
    }
}

/// Pick the effective level and format strings
///
/// Explicit arguments win over `TFMERMAID_LOG_*`, which win over
/// `RUST_LOG`; anything still unset falls back to `info` / `compact`.
pub fn resolve_settings(level: Option<&str>, format: Option<&str>) -> (String, String) {
    let level = level
        .map(str::to_string)
        .or_else(|| std::env::var("TFMERMAID_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

    let format = format
        .map(str::to_string)
        .or_else(|| std::env::var("TFMERMAID_LOG_FORMAT").ok())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    (level, format)
}

/// Install the global tracing subscriber
///
/// Fails if `format` is not one of [`LogFormat::variants`] or a global
/// subscriber has already been installed. An unparseable level falls back
/// to `info`; `off` silences everything regardless of `RUST_LOG`.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (level, format) = resolve_settings(level, format);

    let format = LogFormat::from_str(&format).map_err(|e| format!("Invalid log format: {}", e))?;

    let filter = if level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    };

    Registry::default()
        .with(format.layer().with_filter(filter))
        .try_init()?;

    Ok(())
}
