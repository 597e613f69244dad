//! Configuration for the bucket walk and the external services.

use crate::error::ConnectionError;
use clap::Parser;
use std::env;

/// Value of an environment variable, or `fallback` when it is unset or empty.
pub fn getenv(key: &str, fallback: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Browse a large S3 bucket page by page and record every object key in MySQL.
///
/// MySQL settings come from DB_NAME, DB_USER and DB_PASSWORD; AWS credentials
/// from the usual environment variables or the shared credentials file.
#[derive(Parser, Debug, Clone)]
#[command(name = "list-bucket-mysql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input bucket
    #[arg(long = "bucket_name", default_value = "scrape-bucket")]
    pub bucket_name: String,

    /// AWS region
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Maximum number of listing pages to scan
    #[arg(long = "maxPages", default_value_t = 10)]
    pub max_pages: usize,

    /// Verbose output (y/n)
    #[arg(long, default_value = "n")]
    pub verbose: String,

    /// Bucket prefix folder
    #[arg(long)]
    pub prefix: Option<String>,

    /// Position of the video id in the key, counted in `/` segments
    #[arg(long = "s3key_offset", default_value_t = 1)]
    pub s3key_offset: usize,

    /// Log a progress line every N keys (0 disables)
    #[arg(long = "progress_every", default_value_t = 1000)]
    pub progress_every: u64,
}

impl Cli {
    pub fn into_config(self) -> IngestConfig {
        IngestConfig {
            verbose: self.verbose.eq_ignore_ascii_case("y"),
            bucket_name: self.bucket_name,
            region: self.region,
            max_pages: self.max_pages,
            prefix: self.prefix.unwrap_or_default(),
            key_offset: self.s3key_offset,
            progress_every: self.progress_every,
        }
    }
}

/// Options for one pagination walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestConfig {
    pub bucket_name: String,
    pub region: String,
    /// Upper bound on listing calls
    pub max_pages: usize,
    /// Only keys under this prefix are listed
    pub prefix: String,
    /// Number of leading `/` segments treated as the prefix
    pub key_offset: usize,
    pub verbose: bool,
    pub progress_every: u64,
}

/// MySQL connection settings.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when DB_PORT is set to something that is not a port number.
    pub fn from_env() -> Result<Self, ConnectionError> {
        dotenv::dotenv().ok();

        Ok(Self {
            host: getenv("DB_HOST", "localhost"),
            port: parse_port("DB_PORT", &getenv("DB_PORT", "3306"))?,
            name: getenv("DB_NAME", ""),
            user: getenv("DB_USER", ""),
            password: getenv("DB_PASSWORD", ""),
        })
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConnectionError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConnectionError::InvalidSetting {
            name,
            value: value.to_string(),
        })
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Redis connection settings.
#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// Redis host, port 6379 is implied
    pub server: String,
    pub password: String,
    /// Logical database index
    pub db: i64,
}

impl RedisConfig {
    pub fn from_env(db: i64) -> Self {
        dotenv::dotenv().ok();

        Self {
            server: getenv("REDIS_SERVER", ""),
            password: getenv("REDIS_PWD", ""),
            db,
        }
    }

    /// Host to connect to, `127.0.0.1` when REDIS_SERVER is unset.
    pub fn host(&self) -> &str {
        if self.server.is_empty() {
            "127.0.0.1"
        } else {
            &self.server
        }
    }
}

/// YouTube Data API settings.
#[derive(Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl YouTubeConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_key: getenv("GOOGLE_API_KEY", ""),
            base_url: String::from("https://www.googleapis.com/youtube/v3/"),
        }
    }
}
