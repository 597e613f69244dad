//! Redis connection pool.

use crate::config::RedisConfig;
use crate::error::ConnectionError;
use deadpool_redis::redis::{cmd, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use deadpool_redis::{Config, Connection, Pool, Runtime};
use tracing::{debug, error};

/// Pooled Redis connections, verified with a PING on creation.
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl RedisPool {
    /// Create the pool and ping the server.
    pub async fn connect(config: &RedisConfig) -> Result<Self, ConnectionError> {
        let redis = Self::from_connection_info(connection_info(config))?;
        if let Err(e) = redis.ping().await {
            error!(server = %config.server, db = config.db, error = %e, "Error in accessing redis");
            return Err(e);
        }
        Ok(redis)
    }

    /// Create the pool from a `redis://` URL without touching the server.
    pub fn new(redis_url: &str) -> Result<Self, ConnectionError> {
        Self::build(Config::from_url(redis_url))
    }

    /// Create the pool from structured settings without touching the server.
    pub fn from_connection_info(info: ConnectionInfo) -> Result<Self, ConnectionError> {
        Self::build(Config::from_connection_info(info))
    }

    fn build(cfg: Config) -> Result<Self, ConnectionError> {
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| ConnectionError::Redis(format!("{}", e).into()))?;
        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), ConnectionError> {
        let mut conn = self.get().await?;
        let reply: String = cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ConnectionError::Redis(e.into()))?;
        debug!(reply = %reply, "Redis ping");
        Ok(())
    }

    /// Check out a connection.
    pub async fn get(&self) -> Result<Connection, ConnectionError> {
        self.pool
            .get()
            .await
            .map_err(|e| ConnectionError::Redis(e.into()))
    }
}

/// Connection settings for `config`. The password is passed as-is, never
/// spliced into a URL.
pub fn connection_info(config: &RedisConfig) -> ConnectionInfo {
    let password = if config.password.is_empty() {
        None
    } else {
        Some(config.password.clone())
    };
    ConnectionInfo {
        addr: ConnectionAddr::Tcp(config.host().to_string(), 6379),
        redis: RedisConnectionInfo {
            db: config.db,
            password,
            ..Default::default()
        },
    }
}
