//! Domain layer - Pure logic.

// Object key parsing and listing pages (always available)
pub mod keys;
pub mod listing;

// Video metadata records
pub mod video;
