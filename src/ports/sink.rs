use crate::domain::keys::ParsedRecord;
use crate::error::StoreError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Write one parsed record for `bucket_name`
    async fn insert(&self, record: &ParsedRecord, bucket_name: &str) -> Result<(), StoreError>;
}
