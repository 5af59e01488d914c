#[macro_use]
extern crate tracing;

mod args;
mod exporter_config;
pub mod listen_address;

pub use args::Args;
pub use exporter_config::{
    ExporterConfig,
    DEFAULT_BASE_URL,
    DEFAULT_MAX_RETRY,
    DEFAULT_TIMEOUT,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::net::{
    Ipv4Addr,
    SocketAddr,
};

pub const DEFAULT_LISTEN_PORT: u16 = 2112;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "listen_address::deserialize")]
    pub listen_address: SocketAddr,
    pub exporter: ExporterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_LISTEN_PORT)),
            exporter: ExporterConfig::default(),
        }
    }
}

impl config::Source for Config {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut cache = config::Map::<String, config::Value>::new();
        cache.insert("listen_address".to_string(), self.listen_address.to_string().into());
        cache.insert("exporter.base_url".to_string(), self.exporter.base_url.clone().into());
        cache.insert("exporter.max_retry".to_string(), u64::from(self.exporter.max_retry).into());
        cache.insert(
            "exporter.timeout".to_string(),
            humantime::format_duration(self.exporter.timeout).to_string().into(),
        );
        Ok(cache)
    }
}

impl Config {
    /// Layer the built-in defaults, the optional YAML file and the command line
    /// (in that order of precedence) and validate the result.
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder().add_source(Config::default());

        if let Some(path) = &args.config {
            debug!(?path, "Reading configuration file");
            let source = config::File::from(path.clone())
                .format(config::FileFormat::Yaml)
                .required(true);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;

        debug!(?cfg, "Loaded configuration");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.exporter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;
    use std::time::Duration;

    /// Parses like the binary does, so `EPGSTATION_EXPORTER_*` variables set
    /// in the test environment fill any flag left out. Tests that must not see
    /// them build `Args` directly.
    fn args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("epgstation-exporter").chain(flags.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cfg = Config::new(Args::default()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.listen_address.to_string(), "0.0.0.0:2112");
        assert_eq!(cfg.exporter.base_url, "http://localhost:8888/api");
        assert_eq!(cfg.exporter.max_retry, 3);
        assert_eq!(cfg.exporter.timeout, Duration::from_secs(5));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::new(args(&[
            "--base-url",
            "http://epgstation.local:8888/api",
            "--max-retry",
            "5",
            "--timeout",
            "1500ms",
            "--listen-address",
            ":9100",
        ]))
        .unwrap();

        assert_eq!(cfg.exporter.base_url, "http://epgstation.local:8888/api");
        assert_eq!(cfg.exporter.max_retry, 5);
        assert_eq!(cfg.exporter.timeout, Duration::from_millis(1500));
        assert_eq!(cfg.listen_address, SocketAddr::from(([0, 0, 0, 0], 9100)));
    }

    #[test]
    fn file_is_layered_below_flags() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("exporter.yaml");
        std::fs::write(
            &path,
            "listen_address: \":9200\"\nexporter:\n  base_url: http://recorder:8888/api\n  max_retry: 7\n",
        )
        .unwrap();

        let cfg = Config::new(Args {
            config: Some(path),
            max_retry: Some(2),
            ..Args::default()
        })
        .unwrap();

        assert_eq!(cfg.listen_address.port(), 9200);
        assert_eq!(cfg.exporter.base_url, "http://recorder:8888/api");
        assert_eq!(cfg.exporter.max_retry, 2);
        assert_eq!(cfg.exporter.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("missing.yaml");
        assert!(Config::new(Args {
            config: Some(path),
            ..Args::default()
        })
        .is_err());
    }

    #[test]
    fn zero_retries_are_rejected() {
        let err = Config::new(Args {
            max_retry: Some(0),
            ..Args::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("max_retry"), "{err}");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::new(Args {
            timeout: Some(Duration::ZERO),
            ..Args::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("timeout"), "{err}");
    }
}
