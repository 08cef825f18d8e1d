//! HTTP client for the order service.

use reqwest::{Client, Url};
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::order::{self, Order};

/// Reads the order collection from the configured endpoint.
///
/// Cheap to clone; every fetch runs on its own clone so the returned future
/// owns everything it touches.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: Client,
    endpoint: Url,
}

impl OrdersClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One unauthenticated `GET`, parsed as a JSON array of orders.
    /// Elements that are not orders are dropped, not reported.
    pub async fn fetch_all(self) -> Result<Vec<Order>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting orders");

        let response = self.http.get(self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(order::decode_collection(&body)?)
    }
}
