use super::MetricDesc;
use crate::error::ExporterError;

/// One value of a metric family, identified by its label values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    desc: &'static MetricDesc,
    value: f64,
    label_values: Vec<String>,
}

impl MetricSample {
    /// Label values are given in the order of [`MetricDesc::label_names`].
    pub fn new(desc: &'static MetricDesc, value: f64, label_values: Vec<String>) -> Result<Self, ExporterError> {
        if label_values.len() != desc.label_names().len() {
            return Err(ExporterError::LabelCardinality {
                metric: desc.name(),
                expected: desc.label_names().len(),
                got: label_values.len(),
            });
        }
        Ok(Self {
            desc,
            value,
            label_values,
        })
    }

    pub fn desc(&self) -> &'static MetricDesc {
        self.desc
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.desc
            .label_names()
            .iter()
            .copied()
            .zip(self.label_values.iter().map(String::as_str))
    }

    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// Receives the samples of one collect call, in emission order.
pub trait Sink {
    fn emit(&mut self, sample: MetricSample);
}

impl Sink for Vec<MetricSample> {
    fn emit(&mut self, sample: MetricSample) {
        self.push(sample);
    }
}

impl<F: FnMut(MetricSample)> Sink for F {
    fn emit(&mut self, sample: MetricSample) {
        self(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static REQUESTS: MetricDesc = MetricDesc::gauge("test_requests", "Requests in flight", &["method", "path"]);

    #[test]
    fn label_values_must_match_names() {
        let err = MetricSample::new(&REQUESTS, 1.0, vec!["GET".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            ExporterError::LabelCardinality {
                metric: "test_requests",
                expected: 2,
                got: 1,
            }
        ));
    }

    #[test]
    fn labels_pair_names_with_values() {
        let sample = MetricSample::new(&REQUESTS, 3.0, vec!["GET".to_string(), "/rules".to_string()]).unwrap();
        assert_eq!(sample.labels().collect::<Vec<_>>(), vec![("method", "GET"), ("path", "/rules")]);
        assert_eq!(sample.label("path"), Some("/rules"));
        assert_eq!(sample.label("status"), None);
    }

    #[test]
    fn closure_sink_sees_samples_in_order() {
        let mut values = Vec::new();
        let mut sink = |sample: MetricSample| values.push(sample.value());
        for value in [1.0, 2.0] {
            sink.emit(MetricSample::new(&REQUESTS, value, vec!["GET".to_string(), "/".to_string()]).unwrap());
        }
        assert_eq!(values, vec![1.0, 2.0]);
    }
}
