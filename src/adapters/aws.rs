//! Shared AWS SDK configuration

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load SDK configuration for `region` from the default credential chain
///
/// `endpoint_url` points both clients at a non-AWS endpoint such as
/// DynamoDB Local or MinIO.
pub async fn load_sdk_config(region: &str, endpoint_url: Option<&str>) -> SdkConfig {
    let mut config_builder =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

    if let Some(endpoint) = endpoint_url {
        config_builder = config_builder.endpoint_url(endpoint);
    }

    let config = config_builder.load().await;

    tracing::debug!(region = %region, endpoint_url = ?endpoint_url, "AWS SDK configuration loaded");

    config
}
