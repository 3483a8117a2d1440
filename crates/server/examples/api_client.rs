//! Example client for the vectorizer server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:9876";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Readiness and store details
    println!("2. Readiness:");
    let resp = client.get(format!("{SERVER_URL}/ready")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Aggregate two queries into one vector
    println!("3. Vectorize:");
    let resp = client
        .post(format!("{SERVER_URL}/vectorize"))
        .json(&json!({
            "query": ["The cat sat on the mat", "a Dog barked"]
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    let dims = body["vector"].as_array().map(|v| v.len()).unwrap_or(0);
    println!("Vector dimension: {dims}");
    println!();

    // Example 4: Only stopwords, nothing to aggregate
    println!("4. Stopwords only:");
    let resp = client
        .post(format!("{SERVER_URL}/vectorize"))
        .json(&json!({ "query": ["the of and"] }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
