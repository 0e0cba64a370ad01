//! Tracing subscriber setup
//!
//! Hosts embedding the solvers call [`init_logging`] once at startup. The
//! subscriber is layered the same way regardless of destination:
//!
//! 1. **Filter**: `EnvFilter` honouring `RUST_LOG`, falling back to the
//!    configured level
//! 2. **Format**: [`CompactFormatter`], which omits the `INFO` prefix and adds
//!    `target file:line` only to warnings and errors
//!
//! Output goes to stdout by default. Set `logging.output: stderr` when stdout
//! carries machine-readable data such as a JSON conformance report.
//!
//! ```rust,no_run
//! use multisum::{init_logging, Config};
//!
//! let config = Config::load().unwrap_or_default();
//! init_logging(&config.logging).expect("logging already initialized");
//! ```

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogOutput, LoggingConfig};

/// Formatter that shows file:line only for ERROR and WARN levels
/// and omits the INFO prefix
pub struct CompactFormatter;

impl<S, N> FormatEvent<S, N> for CompactFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = metadata.level();

        if *level != Level::INFO {
            write!(writer, "{}", level)?;

            if matches!(*level, Level::ERROR | Level::WARN) {
                write!(writer, " {}", metadata.target())?;
                if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                    write!(writer, " {}:{}", file, line)?;
                }
            }

            write!(writer, ": ")?;
        }

        if let Some(scope) = ctx.event_scope() {
            let names: Vec<_> = scope.from_root().map(|span| span.name()).collect();
            if !names.is_empty() {
                write!(writer, "{} ", names.join(":"))?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Build the base filter from RUST_LOG, or from `default_level` when unset
pub fn create_base_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = create_base_env_filter(&config.level);
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.output {
        LogOutput::Stderr => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .event_format(CompactFormatter),
            )
            .try_init(),
        LogOutput::Stdout => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stdout)
                    .event_format(CompactFormatter),
            )
            .try_init(),
    }
    .context("Failed to initialize tracing subscriber")
}
