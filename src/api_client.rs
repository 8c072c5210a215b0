use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::warn;

use crate::config::ProviderConfig;
use crate::error::AnalysisError;

const API_KEY_HEADER: &str = "x-apisports-key";

/// Blocking client for the football-data provider. Owns the credential and
/// the request timeout; one instance is built at startup and shared by
/// reference across requests.
pub struct ApiClient {
    http: Client,
    config: ProviderConfig,
}

impl ApiClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build http client")?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// GET `{base_url}{path}` with the provider auth header. Returns the raw
    /// body on 2xx; transport and HTTP-status failures both surface as
    /// `ProviderCommunication`.
    pub fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<String, AnalysisError> {
        let url = format!("{}{}", self.config.base_url, path);
        let resp = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            let snippet = body
                .trim()
                .replace(['\n', '\r'], " ")
                .chars()
                .take(220)
                .collect::<String>();
            warn!(%status, %url, "provider request rejected");
            return Err(AnalysisError::ProviderCommunication(format!(
                "http {status}: {snippet}"
            )));
        }
        Ok(body)
    }
}
