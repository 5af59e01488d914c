use super::{
    Collector,
    RuleSource,
};
use crate::{
    error::ExporterError,
    metrics::{
        MetricDesc,
        MetricSample,
        Sink,
    },
};
use epgstation_client::{
    Client,
    Rule,
};
use epgstation_exporter_config::ExporterConfig;
use std::{
    future::Future,
    pin::Pin,
};
use tracing::{
    instrument::WithSubscriber as _,
    Dispatch,
};

pub static RULE_RESERVES: MetricDesc = MetricDesc::gauge(
    "epgstation_rule_reserves",
    "The number of reserves by rule",
    &["rule_id", "is_time_specification"],
);

/// Publishes the number of reserves of every EPGStation rule.
///
/// Every collect requests all rules, retrying up to `max_retry` times without
/// delay, and emits one `epgstation_rule_reserves` sample per rule. If no
/// attempt succeeds the error is logged and nothing is emitted.
///
/// All events are recorded through the dispatcher given at construction.
pub struct RuleReservesCollector<S = Client> {
    source: S,
    max_retry: u32,
    logger: Dispatch,
}

impl RuleReservesCollector<Client> {
    /// Build the EPGStation API client for `config.base_url`. Fails if the
    /// config does not validate or the URL is unusable.
    pub fn new(config: &ExporterConfig, logger: Dispatch) -> Result<Self, ExporterError> {
        config
            .validate()
            .map_err(|e| ExporterError::Configuration(e.to_string()))?;
        let client = Client::with_timeout(&config.base_url, config.timeout)?;
        Self::with_source(client, config.max_retry, logger)
    }
}

impl<S: RuleSource> RuleReservesCollector<S> {
    pub fn with_source(source: S, max_retry: u32, logger: Dispatch) -> Result<Self, ExporterError> {
        if max_retry == 0 {
            return Err(ExporterError::Configuration("max_retry must be at least 1".to_string()));
        }
        Ok(Self {
            source,
            max_retry,
            logger,
        })
    }

    pub fn max_retry(&self) -> u32 {
        self.max_retry
    }

    async fn collect_rules(&self, sink: &mut (dyn Sink + Send)) {
        let rules = match self.fetch_rules_with_retry().await {
            Ok(rules) => rules,
            Err(error) => {
                error!(%error, attempts = self.max_retry, "Failed to get rules from EPGStation");
                return;
            }
        };
        debug!(rules = rules.len(), "Got rules from EPGStation");

        // Build everything first so that a bad rule cannot leave a partial set behind.
        let samples = match rules.iter().map(rule_reserves_sample).collect::<Result<Vec<_>, _>>() {
            Ok(samples) => samples,
            Err(error) => {
                error!(%error, "Failed to build rule samples");
                return;
            }
        };

        for sample in samples {
            sink.emit(sample);
        }
    }

    /// Stops at the first successful attempt. When all attempts fail, the error
    /// of the last one is returned.
    async fn fetch_rules_with_retry(&self) -> epgstation_client::Result<Vec<Rule>> {
        let mut attempt = 1;
        loop {
            debug!(attempt, max_retry = self.max_retry, "Getting rules from EPGStation");
            match self.source.fetch_rules().await {
                Ok(rules) => return Ok(rules),
                Err(error) if attempt < self.max_retry => {
                    warn!(attempt, %error, "Failed to get rules from EPGStation, retrying");
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

fn rule_reserves_sample(rule: &Rule) -> Result<MetricSample, ExporterError> {
    trace!(rule_id = rule.id, reserves = ?rule.reserves_cnt, "Collecting metrics for rule");
    MetricSample::new(
        &RULE_RESERVES,
        rule.reserves_cnt.unwrap_or(0) as f64,
        vec![rule.id.to_string(), rule.is_time_specification.to_string()],
    )
}

impl<S: RuleSource> Collector for RuleReservesCollector<S> {
    fn describe(&self) -> Vec<&'static MetricDesc> {
        vec![&RULE_RESERVES]
    }

    fn collect<'a>(&'a self, sink: &'a mut (dyn Sink + Send)) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(
            async move {
                info!("Collecting metrics");
                self.collect_rules(sink).await;
                info!("Collected metrics");
            }
            .with_subscriber(self.logger.clone()),
        )
    }

    fn name(&self) -> &'static str {
        "rule_reserves"
    }
}
