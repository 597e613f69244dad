use crate::domain::listing::ListingPage;
use crate::error::ServiceError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// Fetch one page of object keys under `prefix`.
    /// `continuation_token`: None for the first page, otherwise the token from the previous page
    async fn fetch_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<ListingPage, ServiceError>;
}
