//! # Metrics Module
//!
//! The metric model shared by collectors and the `/metrics` endpoint.
//!
//! - **`MetricDesc`**: static name, help text, label names and type of a family
//! - **`MetricSample`**: one labelled value, created fresh on every scrape
//! - **`Sink`**: where a collector pushes its samples
//! - **`Registry`**: the registered collectors, gathered on every scrape
//! - **`exposition`**: rendering of gathered families as Prometheus text

mod desc;
pub mod exposition;
mod registry;
mod sample;

pub use desc::{
    MetricDesc,
    MetricType,
};
pub use registry::{
    MetricFamily,
    Registry,
};
pub use sample::{
    MetricSample,
    Sink,
};
