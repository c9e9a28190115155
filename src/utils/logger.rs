//! Tracing subscriber setup.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Collects event fields as JSON values.
#[derive(Default)]
struct FieldCollector {
    fields: Map<String, Value>,
}

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}

#[derive(Serialize)]
struct Resource<'a> {
    #[serde(rename = "service.name")]
    service_name: &'a str,
    #[serde(rename = "service.version")]
    service_version: &'a str,
}

/// One log line in the OTel log data model.
#[derive(Serialize)]
struct LogRecord<'a> {
    timestamp: String,
    severity_text: &'a str,
    severity_number: u8,
    body: String,
    resource: Resource<'a>,
    attributes: Map<String, Value>,
}

#[derive(Clone)]
struct JsonLogFormatter {
    service_name: String,
    service_version: String,
}

fn severity_number(level: &Level) -> u8 {
    match *level {
        Level::TRACE => 1,
        Level::DEBUG => 5,
        Level::INFO => 9,
        Level::WARN => 13,
        Level::ERROR => 17,
    }
}

impl<S, N> FormatEvent<S, N> for JsonLogFormatter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let mut attributes = collector.fields;

        let body = match attributes.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => metadata.name().to_string(),
        };

        attributes.insert("code.target".to_string(), metadata.target().into());
        if let Some(file) = metadata.file() {
            attributes.insert("code.filepath".to_string(), file.into());
        }
        if let Some(line) = metadata.line() {
            attributes.insert("code.lineno".to_string(), line.into());
        }
        if let Some(span) = ctx.lookup_current() {
            attributes.insert("span.name".to_string(), span.name().into());
        }

        let record = LogRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            severity_text: metadata.level().as_str(),
            severity_number: severity_number(metadata.level()),
            body,
            resource: Resource {
                service_name: &self.service_name,
                service_version: &self.service_version,
            },
            attributes,
        };

        let line = serde_json::to_string(&record).map_err(|_| std::fmt::Error)?;
        writer.write_str(&line)?;
        writer.write_char('\n')
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives, when set, are layered on top of the configured level.
pub fn init_logging(logging_config: &LoggingConfig) {
    let level_filter: LevelFilter = logging_config.level.into();
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env_lossy();

    match logging_config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().event_format(JsonLogFormatter {
                    service_name: logging_config.service_name.clone(),
                    service_version: logging_config.service_version.clone(),
                }))
                .init();
        }
        LogFormat::Console => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}
