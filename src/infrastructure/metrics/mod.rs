//! Prometheus metrics for the notification service.
//!
//! - Dispatch metrics (forwarded by payload mode, rejected by error code)
//! - Sender failures
//! - Dispatch latency
//! - Catalog size

mod helpers;

pub use helpers::{encode_metrics, CatalogMetrics, DispatchMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge,
    Histogram, IntCounter, IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "notify";

lazy_static! {
    /// Notifications forwarded to the sender, by payload mode
    pub static ref NOTIFICATIONS_SENT_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_notifications_sent_total", METRIC_PREFIX),
        "Total notifications forwarded to the sender",
        &["mode"]
    ).unwrap();

    /// Requests rejected before forwarding, by error code
    pub static ref NOTIFICATIONS_REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_notifications_rejected_total", METRIC_PREFIX),
        "Total send requests rejected during composition",
        &["reason"]
    ).unwrap();

    /// Sender errors
    pub static ref SENDER_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_sender_failures_total", METRIC_PREFIX),
        "Total sender invocations that returned an error"
    ).unwrap();

    /// Time from request to sender completion
    pub static ref DISPATCH_LATENCY: Histogram = register_histogram!(
        format!("{}_dispatch_latency_seconds", METRIC_PREFIX),
        "Dispatch latency in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    ).unwrap();

    /// Registered notification definitions
    pub static ref CATALOG_DEFINITIONS: IntGauge = register_int_gauge!(
        format!("{}_catalog_definitions", METRIC_PREFIX),
        "Number of registered notification definitions"
    ).unwrap();
}
