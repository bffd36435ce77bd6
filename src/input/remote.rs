use std::time::Duration;

use reqwest::blocking::Client;

use crate::input::InputError;

pub fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, InputError> {
    tracing::info!(url, timeout_secs = timeout.as_secs(), "fetching remote dataset");
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    Ok(bytes.to_vec())
}
