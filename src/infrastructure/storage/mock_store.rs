use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// Accepts and discards everything. For tests that do not care about the
/// staging lifecycle.
pub struct MockStagingStore;

#[async_trait::async_trait]
impl StagingStore for MockStagingStore {
    async fn store(&self, _path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError> {
        Ok(data.len() as u64)
    }

    async fn delete(&self, _path: &StoragePath) -> Result<(), StagingStoreError> {
        Ok(())
    }
}
