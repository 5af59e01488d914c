use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Gauge,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a metric family: its name, help text, variable label
/// names and type. Samples point back to the descriptor they belong to.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDesc {
    name: &'static str,
    help: &'static str,
    label_names: &'static [&'static str],
    metric_type: MetricType,
}

impl MetricDesc {
    pub const fn gauge(name: &'static str, help: &'static str, label_names: &'static [&'static str]) -> Self {
        Self {
            name,
            help,
            label_names,
            metric_type: MetricType::Gauge,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn label_names(&self) -> &'static [&'static str] {
        self.label_names
    }

    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }
}
