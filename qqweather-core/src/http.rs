use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::WeatherError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

pub fn build_client(timeout: Duration) -> Result<Client, WeatherError> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// GET `url` with `query` and decode the JSON body into `T`.
///
/// Transport failures and non-2xx statuses are `Network`; a body of the wrong
/// shape is `MalformedResponse`.
pub async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, WeatherError> {
    debug!(url, ?query, "sending request");

    let res = http.get(url).query(query).send().await?.error_for_status()?;
    let body = res.text().await?;

    debug!(url, body = %truncate_body(&body), "received response");

    serde_json::from_str(&body).map_err(|e| {
        WeatherError::MalformedResponse(format!("{e} in body: {}", truncate_body(&body)))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
