//! OpenTelemetry-based observability with file-based trace export.
//!
//! Traces are written as OTLP JSON lines for offline analysis; Zellij's WASM
//! sandbox has no network, so a custom file exporter stands in for the usual
//! collector endpoint:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Traces land in `glyphpick-otlp.json` under the plugin data directory,
//! rotated at 8 MB with two backups retained. The trace level comes from the
//! `trace_level` plugin configuration option (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
