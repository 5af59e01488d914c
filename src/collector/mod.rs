//! # Collectors Module
//!
//! - **`Collector` trait**: what the registry calls on every scrape
//! - **`RuleSource` trait**: where rules come from, implemented by the EPGStation API client
//! - **`RuleReservesCollector`**: fetches the rules with retries and publishes
//!   `epgstation_rule_reserves`

mod rule_reserves;
mod source;

use crate::metrics::{
    MetricDesc,
    Sink,
};
pub use rule_reserves::{
    RuleReservesCollector,
    RULE_RESERVES,
};
pub use source::RuleSource;
use std::{
    future::Future,
    pin::Pin,
};

/// Produces the samples of one or more metric families on demand.
pub trait Collector: Send + Sync {
    /// The families this collector emits. Must not perform I/O and must return
    /// the same descriptors every time.
    fn describe(&self) -> Vec<&'static MetricDesc>;

    /// Run one collection cycle and push its samples into `sink`. Failures are
    /// handled (logged) by the collector itself, a failed cycle emits nothing.
    fn collect<'a>(&'a self, sink: &'a mut (dyn Sink + Send)) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

    /// Get the name of this collector
    fn name(&self) -> &'static str;
}
