//! Meteo API client
//!
//! Two read-only calls: the place directory, and the long-term forecast for
//! one place. Forecast requests go through an optional relay prefix that is
//! glued in front of the target URL.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::{Forecast, Place};

pub const DEFAULT_API_BASE: &str = "https://meteoapi.vercel.app/v1";
pub const DEFAULT_PROXY: &str = "https://thingproxy.freeboard.io/fetch/";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure; the message is shown as-is
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch {resource}")]
    Status {
        resource: &'static str,
        status: StatusCode,
    },

    #[error("Invalid {resource} payload: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the two endpoints live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    proxy: Option<String>,
}

impl Endpoints {
    /// `api_base` without the trailing slash; `proxy` is used verbatim as a prefix.
    pub fn new(api_base: impl Into<String>, proxy: Option<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { api_base, proxy }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn places_url(&self) -> String {
        format!("{}/places", self.api_base)
    }

    /// Forecast URL for `code`, percent-encoded and relay-prefixed.
    pub fn forecast_url(&self, code: &str) -> String {
        let target = format!(
            "{}/places/{}/forecasts/long-term",
            self.api_base,
            urlencoding::encode(code)
        );
        match &self.proxy {
            Some(proxy) => format!("{proxy}{target}"),
            None => target,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, Some(DEFAULT_PROXY.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct MeteoClient {
    http: Client,
    endpoints: Endpoints,
}

impl MeteoClient {
    /// Without a `timeout` a request waits until the server or transport gives up.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the place directory.
    pub async fn fetch_places(&self) -> Result<Vec<Place>, ApiError> {
        self.get_json("places", &self.endpoints.places_url()).await
    }

    /// Fetch the long-term forecast for a place.
    pub async fn fetch_forecast(&self, code: &str) -> Result<Forecast, ApiError> {
        self.get_json("forecast", &self.endpoints.forecast_url(code))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, resource, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "Non-success response");
            return Err(ApiError::Status { resource, status });
        }

        let body = response.bytes().await?;
        tracing::trace!(resource, body = %String::from_utf8_lossy(&body), "Raw response");
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { resource, source })
    }
}
