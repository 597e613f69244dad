//! Bucketeer - S3 bucket browsing and cloud connection helpers
//!
//! Hexagonal Architecture:
//! - domain/: Pure logic (key parsing, listing pages, video metadata)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (AWS, MySQL, Redis, YouTube)
//! - application/: The pagination driver
//! - config: CLI and environment configuration
//!
//! # Features
//! - `aws`: S3 listing plus S3/SQS/DynamoDB connection factories
//! - `mysql`: MySQL ingest sink
//! - `redis`: Redis connection factory
//! - `youtube`: YouTube Data API wrapper
//! - `full`: All features

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use application::ingest::{IngestReport, IngestService};
pub use config::IngestConfig;
pub use domain::keys::{parse_key, ParsedRecord};
pub use error::{ConnectionError, ParseError, ServiceError, StoreError};
