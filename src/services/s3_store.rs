//! S3 adapter for [`ObjectStore`].

use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, retry::RetryConfig, timeout::TimeoutConfig};
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};
use bytes::Bytes;
use tracing::{debug, info};

use super::object_store::{ObjectStore, StoreError, StoreResult};

const MAX_ATTEMPTS: u32 = 3;
const OPERATION_TIMEOUT_SECS: u64 = 30;
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Object store backed by a single S3 bucket.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the default AWS provider chain.
    ///
    /// `endpoint_url` points the client at an S3-compatible service
    /// (LocalStack, MinIO); those need path-style addressing.
    pub async fn connect(bucket: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(MAX_ATTEMPTS)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(OPERATION_TIMEOUT_SECS))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(url) = endpoint_url {
            config_builder = config_builder.endpoint_url(url);
        }

        let sdk_config = config_builder.build();
        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if endpoint_url.is_some() {
            s3_config.set_force_path_style(Some(true));
        }

        let store = Self::new(Client::from_conf(s3_config.build()), bucket);
        info!(
            "Initialized S3 object store for bucket: {} with {} max attempts",
            store.bucket, MAX_ATTEMPTS
        );
        store
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Bytes) -> StoreResult<()> {
        debug!("Putting object {} into {}", key, self.bucket);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(TEXT_CONTENT_TYPE)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::Put {
                key: key.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        debug!("Listing objects in {}", self.bucket);

        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| StoreError::List {
                bucket: self.bucket.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;
            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|object| object.key())
                    .map(str::to_string),
            );
        }

        debug!("Listed {} objects in {}", keys.len(), self.bucket);
        Ok(keys)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
