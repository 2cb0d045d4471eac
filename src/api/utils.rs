use anyhow::{Error, Result};
use reqwest::Client;
use serde_json::Value;

pub async fn make_request(client: &Client, url: &str) -> Result<Value> {
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}
