//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::api::{DEFAULT_API_BASE, DEFAULT_PROXY, Endpoints};

/// Lithuania Weather - pick a place, see its forecast
#[derive(Parser, Debug, Clone)]
#[command(name = "lt-weather")]
#[command(about = "Terminal viewer for long-term forecasts of Lithuanian places")]
pub struct Args {
    /// Base URL of the meteo API (places and forecasts live under it)
    #[arg(long, env = "LT_WEATHER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Relay prefix put in front of every forecast URL
    #[arg(long, env = "LT_WEATHER_PROXY", default_value = DEFAULT_PROXY)]
    pub proxy: String,

    /// Call the forecast endpoint directly instead of through the relay
    #[arg(long)]
    pub no_proxy: bool,

    /// HTTP timeout in seconds; requests wait indefinitely when unset
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, env = "LT_WEATHER_LOG")]
    pub log_file: Option<PathBuf>,

    /// Spinner animation tick in milliseconds
    #[arg(long, default_value = "120", value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid --{flag} URL '{value}': {source}")]
    InvalidUrl {
        flag: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl Args {
    /// Validate the URLs and build the endpoint set.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        check_url("api-base", &self.api_base)?;

        let proxy = if self.no_proxy {
            None
        } else {
            check_url("proxy", &self.proxy)?;
            Some(self.proxy.clone())
        };

        Ok(Endpoints::new(self.api_base.as_str(), proxy))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn check_url(flag: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl {
            flag,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lt-weather"]).unwrap();
        let endpoints = args.endpoints().unwrap();

        assert_eq!(endpoints, Endpoints::default());
        assert_eq!(args.timeout(), None);
        assert_eq!(args.tick_interval(), Duration::from_millis(120));
    }

    #[test]
    fn test_no_proxy() {
        let args = Args::try_parse_from([
            "lt-weather",
            "--no-proxy",
            "--api-base",
            "http://localhost:9000/v1",
        ])
        .unwrap();
        let endpoints = args.endpoints().unwrap();

        assert_eq!(endpoints.proxy(), None);
        assert_eq!(
            endpoints.forecast_url("VLN"),
            "http://localhost:9000/v1/places/VLN/forecasts/long-term"
        );
    }

    #[test]
    fn test_invalid_proxy_is_rejected() {
        let args = Args::try_parse_from(["lt-weather", "--proxy", "not a url"]).unwrap();
        let err = args.endpoints().unwrap_err();
        assert!(err.to_string().contains("--proxy"));
    }

    #[test]
    fn test_timeout_is_opt_in() {
        let args = Args::try_parse_from(["lt-weather", "--timeout", "15"]).unwrap();
        assert_eq!(args.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["lt-weather", "--timeout", "0"]).is_err());
    }
}
