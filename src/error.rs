#[derive(thiserror::Error, Debug)]
pub enum ExporterError {
    #[error("invalid exporter configuration: {0}")]
    Configuration(String),
    #[error("failed to initialize EPGStation API client: {0}")]
    Client(#[from] epgstation_client::Error),
    #[error("metric {metric} expects {expected} label values, got {got}")]
    LabelCardinality {
        metric: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("metric {0} is already registered")]
    DuplicateMetric(&'static str),
}
