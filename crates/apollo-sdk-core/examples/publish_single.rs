//! Publish one item against a live portal and read it back.
//!
//! Portal location and token come from APOLLO_PORTAL_URL and APOLLO_TOKEN.

use apollo_sdk_core::{ApolloConfigService, ApolloSdkSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = ApolloSdkSettings {
        portal_url: std::env::var("APOLLO_PORTAL_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8070".to_string()),
        token: std::env::var("APOLLO_TOKEN").unwrap_or_default(),
        app_id: "SampleApp".to_string(),
        env: "DEV".to_string(),
        ..Default::default()
    };

    let service = ApolloConfigService::from_settings(&settings)?;

    service
        .publish_single("sample.timeout", "100", "set request timeout")
        .await?;

    let value = service.get_item("sample.timeout").await?;
    println!("sample.timeout = {value}");

    for item in service.list_items().await? {
        println!("{} = {}", item.key, item.value);
    }

    Ok(())
}
