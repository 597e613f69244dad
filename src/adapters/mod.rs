//! Adapters - Concrete implementations of ports and connection factories.

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "redis")]
pub mod redis;

#[cfg(feature = "youtube")]
pub mod youtube;
