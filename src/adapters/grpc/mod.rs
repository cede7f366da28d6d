//! gRPC adapter for the metrics-collector.

mod metric_server;

pub use metric_server::MetricsCollectorService;

/// Generated protobuf types and service stubs.
pub mod proto {
    tonic::include_proto!("metrics_collector");
}
