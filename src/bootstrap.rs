//! Startup check against the object store.
use crate::error::AppResult;
use crate::storage::ObjectStore;

/// List buckets and create `bucket` when the account has none.
///
/// A listing failure is returned to the caller (the store is unreachable);
/// a creation failure is only logged.
pub async fn ensure_bucket(store: &dyn ObjectStore, bucket: &str) -> AppResult<Vec<String>> {
    let buckets = store.list_buckets().await?;

    if buckets.is_empty() {
        tracing::warn!("No buckets found");
        if let Err(e) = store.create_bucket(bucket).await {
            tracing::error!("Unable to create bucket {}: {}", bucket, e);
        }
    } else {
        tracing::info!("Buckets found!");
        for name in &buckets {
            tracing::info!("Name: {}", name);
        }
    }
    Ok(buckets)
}
