use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::value_objects::storage::StorageBucket;

/// Upload-only object store handle. Uploads are write-once: an existing
/// object key must make the upload fail instead of being overwritten.
#[async_trait]
#[automock]
pub trait SongStorageClient {
    /// Stores the blob under `object_key` and returns the stored path.
    async fn upload_object(
        &self,
        bucket: StorageBucket,
        object_key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String>;
}
