//! Shared RPC utilities for probing the configured JSON-RPC endpoints.

use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::NetworkDescriptor;

/// Default timeout for RPC requests.
const RPC_TIMEOUT: Duration = Duration::from_secs(5);

/// Create an HTTP client configured for JSON-RPC requests.
pub fn create_client() -> Result<reqwest::Client, anyhow::Error> {
    reqwest::Client::builder()
        .timeout(RPC_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}

/// Make a JSON-RPC call and deserialize the result.
///
/// Fails when the request cannot be sent, the endpoint returns an error
/// response, or the result does not deserialize as `T`.
pub async fn json_rpc_call<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    method: &str,
    params: Vec<Value>,
) -> Result<T, anyhow::Error> {
    let response = client
        .post(url)
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        }))
        .send()
        .await
        .with_context(|| format!("Failed to send {} request", method))?;

    let result: Value = response
        .json()
        .await
        .with_context(|| format!("Failed to parse {} response", method))?;

    if let Some(error) = result.get("error") {
        anyhow::bail!(
            "RPC error: {}",
            error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown")
        );
    }

    let result_value = result
        .get("result")
        .context("No result in response")?
        .clone();

    serde_json::from_value(result_value)
        .with_context(|| format!("Failed to deserialize {} result", method))
}

/// Ask an endpoint which chain it serves.
pub async fn fetch_chain_id(
    client: &reqwest::Client,
    url: &str,
) -> Result<u64, anyhow::Error> {
    let raw: String = json_rpc_call(client, url, "eth_chainId", Vec::new()).await?;
    parse_quantity(&raw)
}

/// Check that a descriptor's endpoint actually serves its pinned chain.
pub async fn verify_chain_id(
    client: &reqwest::Client,
    descriptor: &NetworkDescriptor,
) -> Result<(), anyhow::Error> {
    let live = fetch_chain_id(client, descriptor.rpc_url.as_str())
        .await
        .with_context(|| format!("Endpoint unreachable for {}", descriptor.network))?;

    if live != *descriptor.chain_id {
        anyhow::bail!(
            "Chain id mismatch for {}: endpoint reports {}, registry pins {}",
            descriptor.network,
            live,
            descriptor.chain_id
        );
    }

    tracing::debug!(network = %descriptor.network, chain_id = live, "Endpoint verified");
    Ok(())
}

/// Parse a JSON-RPC hex quantity such as `0xaa36a7`.
fn parse_quantity(raw: &str) -> Result<u64, anyhow::Error> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16).with_context(|| format!("Invalid hex quantity: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x1").unwrap(), 1);
        assert_eq!(parse_quantity("0xaa36a7").unwrap(), 11155111);
        assert_eq!(parse_quantity("7a69").unwrap(), 31337);
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(parse_quantity("latest").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("0x").is_err());
    }
}
