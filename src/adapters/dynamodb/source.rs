//! DynamoDB scan source
//!
//! Issues `Scan` requests with `ReturnConsumedCapacity=TOTAL` so the
//! adaptive scanner gets a cost figure for every page.

use super::convert::{from_sdk_item, to_sdk_item};
use crate::adapters::traits::{ScanPage, ScanRequest, TableSource};
use crate::domain::{BackupError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::ReturnConsumedCapacity;
use aws_sdk_dynamodb::Client as DynamoDbClient;

/// [`TableSource`] backed by the AWS SDK DynamoDB client
#[derive(Clone)]
pub struct DynamoDbSource {
    client: DynamoDbClient,
}

impl DynamoDbSource {
    /// Create a source from loaded SDK configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(DynamoDbClient::new(config))
    }

    /// Wrap an existing SDK client
    pub fn from_client(client: DynamoDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableSource for DynamoDbSource {
    async fn scan_page(&self, request: ScanRequest) -> Result<ScanPage> {
        let start_key = request
            .exclusive_start_key
            .as_ref()
            .map(to_sdk_item)
            .transpose()?;

        let output = self
            .client
            .scan()
            .table_name(&request.table_name)
            .consistent_read(request.consistent_read)
            .limit(request.limit)
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(|e| BackupError::Scan(format!("{}", DisplayErrorContext(&e))))?;

        let consumed_capacity_units = output
            .consumed_capacity
            .as_ref()
            .and_then(|capacity| capacity.capacity_units)
            .ok_or_else(|| {
                BackupError::Scan("scan response did not report consumed capacity".to_string())
            })?;

        let rows = output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(from_sdk_item)
            .collect();

        let next_cursor = output
            .last_evaluated_key
            .filter(|key| !key.is_empty())
            .map(from_sdk_item);

        Ok(ScanPage {
            rows,
            consumed_capacity_units,
            next_cursor,
        })
    }
}
