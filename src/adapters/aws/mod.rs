//! AWS adapters.
//!
//! Credentials come from the standard provider chain: AWS_ACCESS_KEY_ID and
//! AWS_SECRET_ACCESS_KEY, or the shared credentials file.

pub mod dynamodb;
pub mod s3;
pub mod sqs;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load shared AWS configuration pinned to `region`.
pub async fn load_session(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .load()
        .await
}
