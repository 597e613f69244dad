use super::load_session;
use crate::domain::listing::ListingPage;
use crate::error::ServiceError;
use crate::ports::listing::ObjectLister;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::Client;
use tracing::debug;

/// Returns an S3 client and the session it was built from.
pub async fn s3_conn(region: &str) -> (Client, SdkConfig) {
    let session = load_session(region).await;
    debug!(region, "S3 client ready");
    (Client::new(&session), session)
}

/// S3Lister implements ObjectLister with ListObjectsV2.
#[derive(Clone)]
pub struct S3Lister {
    client: Client,
}

impl S3Lister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn fetch_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<ListingPage, ServiceError> {
        let mut req = self.client.list_objects_v2().bucket(bucket);

        if !prefix.is_empty() {
            req = req.prefix(prefix);
        }

        if let Some(token) = continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req.send().await.map_err(|e| ServiceError::ListObjects {
            bucket: bucket.to_string(),
            message: DisplayErrorContext(&e).to_string(),
        })?;

        Ok(page_from_output(resp))
    }
}

fn page_from_output(resp: ListObjectsV2Output) -> ListingPage {
    let keys = resp
        .contents()
        .iter()
        .filter_map(|obj| obj.key().map(String::from))
        .collect();

    ListingPage {
        keys,
        continuation_token: resp.next_continuation_token().map(String::from),
        is_truncated: resp.is_truncated().unwrap_or(false),
    }
}
