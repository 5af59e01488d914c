//! # EPGStation Exporter
//!
//! Publishes the number of reserves of every EPGStation recording rule as the
//! Prometheus gauge `epgstation_rule_reserves{rule_id, is_time_specification}`.
//!
//! ## Architecture
//!
//! - **`collector`**: the `Collector` trait and `RuleReservesCollector`, which
//!   fetches the rules (with retries) on every scrape
//! - **`metrics`**: descriptors, samples, the registry and text exposition
//! - **`router`**: the axum routes `/metrics` and `/healthz`
//! - **`app`**: wires configuration, collector, registry and server together

#[macro_use]
extern crate tracing;

mod app;
pub mod collector;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod router;

pub use app::App;
pub use collector::{
    Collector,
    RuleReservesCollector,
    RuleSource,
    RULE_RESERVES,
};
pub use error::ExporterError;
pub use logging::{
    init_errors,
    init_logging,
};
pub use metrics::{
    MetricDesc,
    MetricSample,
    Registry,
    Sink,
};
