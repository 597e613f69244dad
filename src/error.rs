//! Error taxonomy for the ingest walk and the connection helpers.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why an object key could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("object key is empty")]
    EmptyKey,

    #[error("prefix format error: key {key:?} has fewer than {} segments", .offset + 1)]
    MalformedPrefix { key: String, offset: usize },
}

/// A listing call failed. Fatal to the walk.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("list objects failed for bucket {bucket}: {message}")]
    ListObjects { bucket: String, message: String },
}

/// A single row could not be written. The walk skips the row.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("insert failed: {0}")]
    Insert(#[source] BoxError),
}

/// Startup connection or ping failure. Fatal.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("MySQL connection error: {0}")]
    MySql(#[source] BoxError),

    #[error("Redis connection error: {0}")]
    Redis(#[source] BoxError),

    #[error("invalid {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },
}
