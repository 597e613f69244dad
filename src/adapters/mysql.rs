//! MySQL ingest sink.

use crate::config::DbConfig;
use crate::domain::keys::ParsedRecord;
use crate::error::{ConnectionError, StoreError};
use crate::ports::sink::RecordSink;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Connection;
use tracing::info;

pub const INSERT_SCRAPED_VIDEO: &str = r#"
    INSERT INTO scraped_videos (
        video_id,
        bucket_name,
        prefix,
        s3_key
    )
    VALUES (?, ?, ?, ?)
"#;

/// MySqlSink implements RecordSink over a single pooled connection.
#[derive(Clone)]
pub struct MySqlSink {
    pool: MySqlPool,
}

impl MySqlSink {
    /// Connect and ping the database.
    pub async fn connect(config: &DbConfig) -> Result<Self, ConnectionError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options(config))
            .await
            .map_err(|e| ConnectionError::MySql(e.into()))?;

        info!("testing db-ping");
        let mut conn = pool
            .acquire()
            .await
            .map_err(|e| ConnectionError::MySql(e.into()))?;
        conn.ping()
            .await
            .map_err(|e| ConnectionError::MySql(e.into()))?;
        info!(database = %config.name, "Successfully connected");

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .charset("utf8mb4")
}

#[async_trait]
impl RecordSink for MySqlSink {
    async fn insert(&self, record: &ParsedRecord, bucket_name: &str) -> Result<(), StoreError> {
        sqlx::query(INSERT_SCRAPED_VIDEO)
            .bind(&record.identifier)
            .bind(bucket_name)
            .bind(&record.prefix)
            .bind(&record.source_key)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Insert(e.into()))?;
        Ok(())
    }
}
