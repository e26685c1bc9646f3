//! Cache Module
//!
//! Bounded in-memory key-value store with LRU eviction and lazy TTL expiry.

mod entry;
mod list;
mod store;


pub use store::BoundedCache;
