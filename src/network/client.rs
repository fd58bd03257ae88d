//! HTTP client wrapper - fetches and decodes the items collection

use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::Item;

/// GET `url` and decode the body as a JSON array of items.
///
/// Any non-2xx status is a [`FetchError::Request`]; transport and decode
/// failures are [`FetchError::Network`].
pub async fn fetch_items(client: &reqwest::Client, url: &str) -> Result<Vec<Item>, FetchError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Request {
            status: status.as_u16(),
        });
    }

    let items = resp.json::<Vec<Item>>().await?;
    Ok(items)
}

/// Run one fetch and wrap the outcome with its request id and timing
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_items(client, url).await;
    let elapsed = start.elapsed().as_millis() as u64;
    NetworkResponse::from_result(request_id, result, elapsed)
}

/// Create an HTTP client with the given total timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
