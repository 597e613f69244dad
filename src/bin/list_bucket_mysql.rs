//! Bucket Listing Binary
//!
//! Utility to browse large S3 buckets. Lists the bucket page by page, parses
//! every key into a prefix and a video id, and inserts one row per key into
//! the `scraped_videos` MySQL table.
//!
//! Environment Variables:
//! - DB_NAME, DB_USER, DB_PASSWORD: MySQL connection (DB_HOST, DB_PORT optional)
//! - AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY: or the shared credentials file

use bucketeer::adapters::aws::s3::{s3_conn, S3Lister};
use bucketeer::adapters::mysql::MySqlSink;
use bucketeer::config::{Cli, DbConfig};
use bucketeer::IngestService;
use clap::Parser;
use tracing::{error, info, Level};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    let config = Cli::parse().into_config();

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 1. Relational store
    let db_config = match DbConfig::from_env() {
        Ok(db_config) => db_config,
        Err(e) => {
            error!("Bad MySQL settings: {}", e);
            std::process::exit(1);
        }
    };
    let sink = match MySqlSink::connect(&db_config).await {
        Ok(sink) => sink,
        Err(e) => {
            error!("Failed to connect to MySQL: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Listing service
    let (s3_client, _session) = s3_conn(&config.region).await;
    let lister = S3Lister::new(s3_client);

    // 3. Walk the bucket
    info!(
        bucket = %config.bucket_name,
        prefix = %config.prefix,
        max_pages = config.max_pages,
        "Listing bucket"
    );
    let service = IngestService::new(lister, sink.clone(), config);
    let result = service.run().await;
    sink.close().await;

    match result {
        Ok(report) => {
            info!(
                pages = report.pages,
                keys = report.keys_seen,
                inserted = report.inserted,
                parse_failures = report.parse_failures,
                insert_failures = report.insert_failures,
                next_token = report.last_continuation_token.as_deref().unwrap_or(""),
                "Done"
            );
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
