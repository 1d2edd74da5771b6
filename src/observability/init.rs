//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Builds the pipeline `tracing` macros → OpenTelemetry layer → file span
/// exporter, filtered by `config.trace_level` (default `"info"`). Traces land
/// in `glyphpick-otlp.json` under the plugin data directory.
///
/// Failures are swallowed: the picker must keep working when the data
/// directory cannot be created or a subscriber is already installed.
/// Idempotent, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "glyphpick",
    )]);

    let trace_file = data_dir.join("glyphpick-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("glyphpick");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
