//! Thin client for an S3-compatible endpoint.
//!
//! - `list_buckets` issues `ListBuckets` and returns the bucket names.
//! - `create_bucket` issues `CreateBucket` in the configured region.
//! - `put_object` uploads bytes, optionally with a public-read ACL.
use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::storage::ObjectStore;

#[derive(Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(
        endpoint_url: &str,
        access_key: &str,
        secret: &str,
        region: &str,
        force_path_style: bool,
    ) -> Self {
        let credentials = Credentials::new(access_key, secret, None, None, "title-card-bot");
        let conf = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(endpoint_url)
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .force_path_style(force_path_style)
            .build();
        S3Store { client: Client::from_conf(conf) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.storage_url,
            &config.storage_key,
            &config.storage_secret,
            &config.storage_region,
            config.storage_force_path_style,
        )
    }
}

fn storage_error<E: std::error::Error>(context: &str, e: E) -> AppError {
    AppError::Storage(format!("{}: {}", context, DisplayErrorContext(&e)))
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_buckets(&self) -> AppResult<Vec<String>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| storage_error("Failed to list buckets", e))?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(String::from))
            .collect())
    }

    async fn create_bucket(&self, name: &str) -> AppResult<()> {
        tracing::info!("Creating bucket {}", name);
        self.client
            .create_bucket()
            .bucket(name)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| storage_error(&format!("Failed to create bucket {}", name), e))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        public_read: bool,
    ) -> AppResult<()> {
        tracing::debug!(bucket, key, size = bytes.len(), "Uploading object");
        let mut request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes));
        if public_read {
            request = request.acl(ObjectCannedAcl::PublicRead);
        }

        request
            .send()
            .await
            .map(|_| ())
            .map_err(|e| storage_error(&format!("Failed to upload {}/{}", bucket, key), e))
    }
}
