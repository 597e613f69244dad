//! Application layer - Services written against the ports.

pub mod ingest;
