use std::net::SocketAddr;

use crate::model::Category;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings created.
pub const BOOKINGS_CREATED_TOTAL: &str = "lendpool_bookings_created_total";

/// Counter: owner decisions on bookings. Labels: decision.
pub const BOOKING_DECISIONS_TOTAL: &str = "lendpool_booking_decisions_total";

/// Counter: list queries executed. Labels: scope, category.
pub const BOOKING_QUERIES_TOTAL: &str = "lendpool_booking_queries_total";

/// Histogram: list query latency in seconds. Labels: scope.
pub const QUERY_DURATION_SECONDS: &str = "lendpool_booking_query_duration_seconds";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map a Category to a short label for metrics.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::All => "all",
        Category::Current => "current",
        Category::Past => "past",
        Category::Future => "future",
        Category::Waiting => "waiting",
        Category::Rejected => "rejected",
    }
}
