//! `tracing` integration: a library-scoped fmt layer, filter helpers, and the
//! event emitted whenever a guard raises one of this crate's errors.
//!
//! Only events whose target starts with [`TARGET_PREFIX`] are rendered by the
//! layer; logs from other crates are left to the host's own layers.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::{Level, warn};
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

use crate::error_handler::Describe;

/// Crate target prefix used to filter only library-originated logs.
pub const TARGET_PREFIX: &str = "agent_errors";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build a **library-scoped** formatting layer that renders ONLY events emitted by this crate.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with target and `file:line`
/// - ANSI colors only when stdout is a terminal
///
/// Compose it in the binary together with your global subscriber; events from
/// other crates pass through untouched.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    build_layer(io::stdout, io::stdout().is_terminal())
}

/// Same as [`layer`], but writes plain (non-ANSI) lines to `writer`.
pub fn layer_with_writer<S, W>(writer: W) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    build_layer(writer, false)
}

fn build_layer<S, W>(writer: W, use_ansi: bool) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let only_this_crate = filter::filter_fn(|meta| meta.target().starts_with(TARGET_PREFIX));

    // The event format owns timer/level/target settings; set them here, not on the layer.
    let format = fmt::format()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_source_location(true)
        .with_ansi(use_ansi);

    fmt::layer()
        .with_writer(writer)
        .with_ansi(use_ansi)
        .event_format(format)
        .with_filter(only_this_crate)
}

/// Level directive for **this** library only, e.g. `agent_errors=debug`.
pub fn level_directive(level: Level) -> Result<Directive, ParseError> {
    let s = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    Directive::from_str(&s)
}

/// `EnvFilter` from `RUST_LOG`, or `default` when unset/invalid, with this
/// crate raised to `level`.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    match level_directive(level) {
        Ok(directive) => base.add_directive(directive),
        Err(_) => base,
    }
}

/// Emits one `warn` event for an error about to be returned.
///
/// `detail` is the Debug form of the message, so `None` and `Some("")` differ.
pub fn record<E: Describe + ?Sized>(err: &E) {
    let kind = err.kind();
    warn!(
        kind = %kind,
        code = kind.code(),
        detail = ?err.message(),
        "raising {}",
        kind.type_name()
    );
}
