use super::{
    MetricDesc,
    MetricSample,
};
use crate::{
    collector::Collector,
    error::ExporterError,
};

/// The samples collected for one descriptor during a gather.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub desc: &'static MetricDesc,
    pub samples: Vec<MetricSample>,
}

/// The collectors rendered on every scrape.
#[derive(Default)]
pub struct Registry {
    collectors: Vec<Box<dyn Collector>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collector. Fails if one of its metric names is already
    /// described by a registered collector or repeated in its own descriptors.
    pub fn register(&mut self, collector: impl Collector + 'static) -> Result<(), ExporterError> {
        let mut known: Vec<&'static str> = self
            .collectors
            .iter()
            .flat_map(|c| c.describe())
            .map(MetricDesc::name)
            .collect();

        for desc in collector.describe() {
            if known.contains(&desc.name()) {
                return Err(ExporterError::DuplicateMetric(desc.name()));
            }
            known.push(desc.name());
        }

        debug!(collector = collector.name(), "Registered collector");
        self.collectors.push(Box::new(collector));
        Ok(())
    }

    /// Run every collector once, in registration order, and group their
    /// samples by descriptor.
    pub async fn gather(&self) -> Vec<MetricFamily> {
        let mut families = Vec::new();

        for collector in &self.collectors {
            let first = families.len();
            families.extend(collector.describe().into_iter().map(|desc| MetricFamily {
                desc,
                samples: Vec::new(),
            }));

            let name = collector.name();
            let own = &mut families[first..];
            let mut sink = |sample: MetricSample| match own.iter_mut().find(|f| f.desc.name() == sample.desc().name()) {
                Some(family) => family.samples.push(sample),
                None => warn!(
                    collector = name,
                    metric = sample.desc().name(),
                    "Dropping sample of a metric the collector does not describe"
                ),
            };
            collector.collect(&mut sink).await;
        }

        families
    }
}
