//! S3 object store
//!
//! Bodies up to [`MULTIPART_PART_SIZE`] go out as a single `PutObject`;
//! larger ones are sent as a multipart upload in parts of that size, which
//! lifts the 5 GB single-request ceiling.

use crate::adapters::traits::ObjectStore;
use crate::domain::{BackupError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use aws_sdk_s3::Client as S3Client;
use std::ops::Range;

/// Part size for multipart uploads, also the single-request threshold
///
/// At 10,000 parts this allows objects up to 625 GiB.
pub const MULTIPART_PART_SIZE: usize = 64 * 1024 * 1024;

/// Maximum number of parts S3 accepts in one multipart upload
const MAX_PARTS: usize = 10_000;

/// [`ObjectStore`] backed by the AWS SDK S3 client
#[derive(Clone)]
pub struct S3ObjectStore {
    client: S3Client,
    part_size: usize,
}

impl S3ObjectStore {
    /// Create a store from loaded SDK configuration
    ///
    /// `path_style` is needed by S3-compatible servers such as MinIO.
    pub fn new(config: &SdkConfig, path_style: bool) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .force_path_style(path_style)
            .build();

        Self::from_client(S3Client::from_conf(s3_config))
    }

    /// Wrap an existing SDK client
    pub fn from_client(client: S3Client) -> Self {
        Self {
            client,
            part_size: MULTIPART_PART_SIZE,
        }
    }

    async fn put_single(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let size = body.len();

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| BackupError::upload(key, format!("{}", DisplayErrorContext(&e))))?;

        tracing::debug!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            e_tag = ?output.e_tag(),
            "PutObject succeeded"
        );

        Ok(())
    }

    async fn put_multipart(&self, bucket: &str, key: &str, body: &[u8]) -> Result<()> {
        let ranges = part_ranges(body.len(), self.part_size);
        if ranges.len() > MAX_PARTS {
            return Err(BackupError::upload(
                key,
                format!(
                    "{} bytes needs {} parts, more than the {MAX_PARTS} S3 allows",
                    body.len(),
                    ranges.len()
                ),
            ));
        }

        let created = self
            .client
            .create_multipart_upload()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| BackupError::upload(key, format!("{}", DisplayErrorContext(&e))))?;
        let upload_id = created
            .upload_id()
            .ok_or_else(|| BackupError::upload(key, "multipart upload returned no upload id"))?
            .to_string();

        tracing::debug!(
            bucket = %bucket,
            key = %key,
            size_bytes = body.len(),
            parts = ranges.len(),
            "Started multipart upload"
        );

        let result = self
            .upload_parts(bucket, key, &upload_id, body, ranges)
            .await;

        if let Err(e) = &result {
            if let Err(abort) = self
                .client
                .abort_multipart_upload()
                .bucket(bucket)
                .key(key)
                .upload_id(&upload_id)
                .send()
                .await
            {
                tracing::warn!(
                    key = %key,
                    upload_id = %upload_id,
                    error = %DisplayErrorContext(&abort),
                    "Failed to abort multipart upload"
                );
            }
            tracing::debug!(key = %key, error = %e, "Multipart upload aborted");
        }

        result
    }

    async fn upload_parts(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        body: &[u8],
        ranges: Vec<Range<usize>>,
    ) -> Result<()> {
        let mut parts = Vec::with_capacity(ranges.len());

        for (index, range) in ranges.into_iter().enumerate() {
            let part_number = index as i32 + 1;
            let output = self
                .client
                .upload_part()
                .bucket(bucket)
                .key(key)
                .upload_id(upload_id)
                .part_number(part_number)
                .body(ByteStream::from(body[range].to_vec()))
                .send()
                .await
                .map_err(|e| {
                    BackupError::upload(
                        key,
                        format!("part {part_number}: {}", DisplayErrorContext(&e)),
                    )
                })?;

            parts.push(
                CompletedPart::builder()
                    .part_number(part_number)
                    .set_e_tag(output.e_tag().map(str::to_string))
                    .build(),
            );
        }

        self.client
            .complete_multipart_upload()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .multipart_upload(
                CompletedMultipartUpload::builder()
                    .set_parts(Some(parts))
                    .build(),
            )
            .send()
            .await
            .map_err(|e| BackupError::upload(key, format!("{}", DisplayErrorContext(&e))))?;

        Ok(())
    }
}

/// Split `len` bytes into consecutive parts of `part_size`, the last one
/// possibly shorter
fn part_ranges(len: usize, part_size: usize) -> Vec<Range<usize>> {
    (0..len)
        .step_by(part_size.max(1))
        .map(|start| start..(start + part_size).min(len))
        .collect()
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<String> {
        if body.len() > self.part_size {
            self.put_multipart(bucket, key, &body).await?;
        } else {
            self.put_single(bucket, key, body).await?;
        }

        Ok(format!("s3://{bucket}/{key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_ranges_cover_body() {
        assert_eq!(part_ranges(10, 4), vec![0..4, 4..8, 8..10]);
        assert_eq!(part_ranges(8, 4), vec![0..4, 4..8]);
        assert!(part_ranges(0, 4).is_empty());
    }

    #[test]
    fn test_part_count_at_default_size() {
        let six_gib = 6 * 1024 * 1024 * 1024;
        let ranges = part_ranges(six_gib, MULTIPART_PART_SIZE);
        assert_eq!(ranges.len(), 96);
        assert_eq!(ranges.last().map(|r| r.end), Some(six_gib));
        assert!(ranges.len() <= MAX_PARTS);
    }
}
