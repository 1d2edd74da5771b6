//! OTLP JSON span serialization.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON
//! documents suitable for line-oriented file export. The output is compatible
//! with OTLP trace collectors and analysis tools.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;

/// Instrumentation scope name reported in every OTLP document.
const SCOPE_NAME: &str = "glyphpick";

/// Formats span batches into complete OTLP JSON documents.
///
/// Each document carries the resource attributes (service name and friends),
/// a single instrumentation scope, and the batch's spans.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    ///
    /// The returned value serializes to a single line with `.to_string()`:
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": { "attributes": [...] },
    ///     "scopeSpans": [{ "scope": {"name": "glyphpick"}, "spans": [...] }]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| {
                serde_json::json!({
                    "key": k.to_string(),
                    "value": Self::format_attribute_value(v)
                })
            })
            .collect();

        let spans_json: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        serde_json::json!({
            "resourceSpans": [{
                "resource": {
                    "attributes": resource_attrs
                },
                "scopeSpans": [{
                    "scope": {
                        "name": SCOPE_NAME,
                    },
                    "spans": spans_json
                }]
            }]
        })
    }

    /// Formats a single span: hex IDs, nanosecond timestamps, attributes,
    /// events, links, and status.
    fn format_span(span: &SpanData) -> JsonValue {
        let kind = Self::span_kind_to_int(&span.span_kind);
        let attributes = Self::format_attributes(&span.attributes);
        let events = Self::format_events(&span.events);
        let links = Self::format_links(&span.links);
        let (status_code, status_message) = Self::format_status(&span.status);

        serde_json::json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
                String::new()
            } else {
                format!("{:016x}", span.parent_span_id)
            },
            "name": span.name,
            "kind": kind,
            "startTimeUnixNano": format!("{}", Self::unix_nanos(span.start_time)),
            "endTimeUnixNano": format!("{}", Self::unix_nanos(span.end_time)),
            "attributes": attributes,
            "events": events,
            "links": links,
            "status": {
                "code": status_code,
                "message": status_message,
            },
        })
    }

    fn unix_nanos(time: std::time::SystemTime) -> u128 {
        time.duration_since(std::time::SystemTime::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_nanos()
    }

    /// OTLP span kind codes: Internal=1, Server=2, Client=3, Producer=4,
    /// Consumer=5.
    const fn span_kind_to_int(kind: &opentelemetry::trace::SpanKind) -> u8 {
        match kind {
            opentelemetry::trace::SpanKind::Internal => 1,
            opentelemetry::trace::SpanKind::Server => 2,
            opentelemetry::trace::SpanKind::Client => 3,
            opentelemetry::trace::SpanKind::Producer => 4,
            opentelemetry::trace::SpanKind::Consumer => 5,
        }
    }

    fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| {
                serde_json::json!({
                    "key": kv.key.to_string(),
                    "value": Self::format_attribute_value(&kv.value)
                })
            })
            .collect()
    }

    /// Maps OpenTelemetry value types to the OTLP value envelope. Integers
    /// become strings per the OTLP JSON encoding; arrays fall back to their
    /// debug rendering.
    fn format_attribute_value(value: &opentelemetry::Value) -> JsonValue {
        use opentelemetry::Value;

        match value {
            Value::Bool(b) => serde_json::json!({ "boolValue": b }),
            Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
            Value::F64(f) => serde_json::json!({ "doubleValue": f }),
            Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
            Value::Array(_) => serde_json::json!({ "stringValue": format!("{:?}", value) }),
        }
    }

    fn format_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "timeUnixNano": format!("{}", Self::unix_nanos(event.timestamp)),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    fn format_links(links: &[opentelemetry::trace::Link]) -> Vec<JsonValue> {
        links
            .iter()
            .map(|link| {
                serde_json::json!({
                    "traceId": format!("{:032x}", link.span_context.trace_id()),
                    "spanId": format!("{:016x}", link.span_context.span_id()),
                    "attributes": Self::format_attributes(&link.attributes),
                })
            })
            .collect()
    }

    /// OTLP status: Unset=(0, ""), Ok=(1, ""), Error=(2, description).
    fn format_status(status: &opentelemetry::trace::Status) -> (u8, String) {
        match status {
            opentelemetry::trace::Status::Unset => (0, String::new()),
            opentelemetry::trace::Status::Ok => (1, String::new()),
            opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish()
    }
}
