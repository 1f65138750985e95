//! Object storage for rendered cards.
//!
//! `ObjectStore` is the seam the handlers and bootstrap depend on; `S3Store`
//! is the S3-compatible implementation used in production.
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;

pub mod s3;

pub use s3::S3Store;

pub const PNG_CONTENT_TYPE: &str = "image/png";

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn list_buckets(&self) -> AppResult<Vec<String>>;

    async fn create_bucket(&self, name: &str) -> AppResult<()>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        public_read: bool,
    ) -> AppResult<()>;
}

/// Short random object key with a `.png` extension. Collisions are not checked.
pub fn random_key() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}.png", &id[..12])
}

/// Plain (unsigned) URL of an object in a public bucket.
pub fn public_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), bucket, key)
}
