use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config;

/// Chyba při dotazu na Elasticsearch
#[derive(Debug, Error)]
pub enum EsError {
    #[error("request to elasticsearch failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("elasticsearch error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Výsledek liveness pingu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Alive,
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct EsClient {
    base_url: String,
    client: Client,
}

impl EsClient {
    pub fn new(base_url: String) -> Result<Self, EsError> {
        // Ořízni trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(config::QUERY_TIMEOUT)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Ping na root endpoint clusteru. Nikdy nevrací chybu - timeout,
    /// odmítnuté spojení i ne-2xx status znamenají Unavailable.
    pub async fn ping(&self, timeout: Duration) -> Liveness {
        let request = self.client.get(&self.base_url).timeout(timeout);

        match request.send().await {
            Ok(response) if response.status().is_success() => Liveness::Alive,
            Ok(response) => {
                tracing::warn!("Cluster ping returned status {}", response.status());
                Liveness::Unavailable
            }
            Err(e) => {
                tracing::warn!("Cluster ping failed: {}", e);
                Liveness::Unavailable
            }
        }
    }

    /// Univerzální GET request
    pub async fn get<T>(&self, path: &str) -> Result<T, EsError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(EsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
