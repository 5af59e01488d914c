use crate::listen_address;
use clap::Parser;
use std::{
    net::SocketAddr,
    path::PathBuf,
    time::Duration,
};

/// Prometheus exporter for EPGStation recording rules
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the EPGStation API [default: http://localhost:8888/api]
    #[arg(long, env = "EPGSTATION_EXPORTER_BASE_URL")]
    pub base_url: Option<String>,

    /// How many times the rules are requested per scrape before giving up [default: 3]
    #[arg(long, env = "EPGSTATION_EXPORTER_MAX_RETRY")]
    pub max_retry: Option<u32>,

    /// Timeout of a single request to EPGStation, e.g. "5s" or "1500ms" [default: 5s]
    #[arg(long, env = "EPGSTATION_EXPORTER_TIMEOUT", value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Address the metrics endpoint listens on. ":2112" listens on all interfaces [default: 0.0.0.0:2112]
    #[arg(long, env = "EPGSTATION_EXPORTER_LISTEN_ADDRESS", value_parser = listen_address::parse)]
    pub listen_address: Option<SocketAddr>,

    /// Optional YAML configuration file. Flags take precedence over its values.
    #[arg(long, short = 'c', env = "EPGSTATION_EXPORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl config::Source for Args {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut cache = config::Map::<String, config::Value>::new();
        if let Some(listen_address) = &self.listen_address {
            cache.insert("listen_address".to_string(), listen_address.to_string().into());
        }
        if let Some(base_url) = &self.base_url {
            cache.insert("exporter.base_url".to_string(), base_url.clone().into());
        }
        if let Some(max_retry) = self.max_retry {
            cache.insert("exporter.max_retry".to_string(), u64::from(max_retry).into());
        }
        if let Some(timeout) = self.timeout {
            cache.insert(
                "exporter.timeout".to_string(),
                humantime::format_duration(timeout).to_string().into(),
            );
        }
        Ok(cache)
    }
}
