//! Prometheus text exposition format, version 0.0.4.

use super::MetricFamily;
use std::fmt::Write;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub fn render(families: &[MetricFamily]) -> String {
    let mut out = String::with_capacity(256);
    for family in families {
        write_family(&mut out, family);
    }
    out
}

fn write_family(out: &mut String, family: &MetricFamily) {
    let desc = family.desc;
    let _ = writeln!(out, "# HELP {} {}", desc.name(), escape_help(desc.help()));
    let _ = writeln!(out, "# TYPE {} {}", desc.name(), desc.metric_type());

    for sample in &family.samples {
        let label_str = sample
            .labels()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",");
        if label_str.is_empty() {
            let _ = writeln!(out, "{} {}", desc.name(), format_value(sample.value()));
        } else {
            let _ = writeln!(out, "{}{{{}}} {}", desc.name(), label_str, format_value(sample.value()));
        }
    }
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{
        MetricDesc,
        MetricSample,
    };
    use pretty_assertions::assert_eq;

    static QUEUE: MetricDesc = MetricDesc::gauge("test_queue_depth", "Depth of a queue\nper shard", &["queue"]);
    static UP: MetricDesc = MetricDesc::gauge("test_up", "Whether the test is up", &[]);

    #[test]
    fn renders_help_type_and_samples() {
        let families = vec![
            MetricFamily {
                desc: &QUEUE,
                samples: vec![
                    MetricSample::new(&QUEUE, 2.0, vec!["a".to_string()]).unwrap(),
                    MetricSample::new(&QUEUE, 0.5, vec!["say \"hi\"\\now".to_string()]).unwrap(),
                ],
            },
            MetricFamily {
                desc: &UP,
                samples: vec![MetricSample::new(&UP, 1.0, vec![]).unwrap()],
            },
        ];

        assert_eq!(
            render(&families),
            "# HELP test_queue_depth Depth of a queue\\nper shard\n\
             # TYPE test_queue_depth gauge\n\
             test_queue_depth{queue=\"a\"} 2\n\
             test_queue_depth{queue=\"say \\\"hi\\\"\\\\now\"} 0.5\n\
             # HELP test_up Whether the test is up\n\
             # TYPE test_up gauge\n\
             test_up 1\n"
        );
    }

    #[test]
    fn empty_family_keeps_its_header() {
        let families = vec![MetricFamily {
            desc: &UP,
            samples: vec![],
        }];
        assert_eq!(
            render(&families),
            "# HELP test_up Whether the test is up\n# TYPE test_up gauge\n"
        );
    }

    #[test]
    fn special_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "+Inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-3.25), "-3.25");
    }
}
