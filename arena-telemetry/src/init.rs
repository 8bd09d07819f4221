//! Telemetry initialization and configuration

use std::fmt;
use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to install subscriber: {0}")]
    Subscriber(String),

    #[error("failed to install OTLP pipeline: {0}")]
    Otlp(String),
}

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}', expected 'pretty' or 'json'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

fn env_filter() -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| TelemetryError::Filter(e.to_string()))
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().with_current_span(true).boxed(),
    }
}

/// Initialize basic telemetry with console logging
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Example
/// ```
/// use arena_telemetry::init_telemetry;
/// init_telemetry("agent-arena").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), TelemetryError> {
    init_with_format(service_name, LogFormat::Pretty)
}

/// Initialize console logging in the given format.
pub fn init_with_format(service_name: &str, format: LogFormat) -> Result<(), TelemetryError> {
    if INIT.is_completed() {
        return Ok(());
    }
    let filter = env_filter()?;

    let mut result = Ok(());
    INIT.call_once(|| {
        result = tracing_subscriber::registry()
            .with(fmt_layer(format))
            .with(filter)
            .try_init()
            .map_err(|e| TelemetryError::Subscriber(e.to_string()));

        tracing::info!(service.name = service_name, log.format = %format, "Telemetry initialized");
    });
    result
}

/// Initialize telemetry with OpenTelemetry OTLP export
///
/// Exports spans to an OTLP collector in addition to console logging.
/// Must be called from within a Tokio runtime.
///
/// # Example
/// ```no_run
/// use arena_telemetry::{LogFormat, init_with_otlp};
/// # #[tokio::main]
/// # async fn main() {
/// init_with_otlp("agent-arena", "http://localhost:4317", LogFormat::Pretty)
///     .expect("Failed to initialize telemetry");
/// # }
/// ```
pub fn init_with_otlp(
    service_name: &str,
    endpoint: &str,
    format: LogFormat,
) -> Result<(), TelemetryError> {
    use opentelemetry_otlp::WithExportConfig;
    use tracing_opentelemetry::OpenTelemetryLayer;

    if INIT.is_completed() {
        return Ok(());
    }
    let filter = env_filter()?;

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint))
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
            opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                service_name.to_string(),
            )]),
        ))
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .map_err(|e| TelemetryError::Otlp(e.to_string()))?;

    let mut result = Ok(());
    INIT.call_once(|| {
        result = tracing_subscriber::registry()
            .with(fmt_layer(format))
            .with(filter)
            .with(OpenTelemetryLayer::new(tracer))
            .try_init()
            .map_err(|e| TelemetryError::Subscriber(e.to_string()));

        tracing::info!(
            service.name = service_name,
            otlp.endpoint = endpoint,
            "Telemetry initialized with OpenTelemetry"
        );
    });
    result
}

/// Shutdown telemetry and flush any pending spans
///
/// Should be called before application exit to ensure all telemetry data is sent.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
