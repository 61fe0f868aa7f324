//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{
    CATALOG_DEFINITIONS, DISPATCH_LATENCY, NOTIFICATIONS_REJECTED_TOTAL, NOTIFICATIONS_SENT_TOTAL,
    SENDER_FAILURES_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording dispatch metrics
pub struct DispatchMetrics;

impl DispatchMetrics {
    /// Record a notification forwarded in the given payload mode
    pub fn record_sent(mode: &str) {
        NOTIFICATIONS_SENT_TOTAL.with_label_values(&[mode]).inc();
    }

    /// Record a request rejected during composition
    pub fn record_rejected(code: &str) {
        NOTIFICATIONS_REJECTED_TOTAL.with_label_values(&[code]).inc();
    }

    /// Record a sender error
    pub fn record_sender_failure() {
        SENDER_FAILURES_TOTAL.inc();
    }

    /// Record dispatch latency
    pub fn observe_latency(seconds: f64) {
        DISPATCH_LATENCY.observe(seconds);
    }
}

/// Helper struct for catalog metrics
pub struct CatalogMetrics;

impl CatalogMetrics {
    pub fn set_definitions(count: usize) {
        CATALOG_DEFINITIONS.set(count as i64);
    }
}
