//! Ports - Traits the application layer is written against.

pub mod listing;
pub mod sink;
