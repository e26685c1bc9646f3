//! docgen-cache - In-process bounded caches for the document service
//!
//! Provides a bounded LRU key-value store with lazy per-entry TTL expiry,
//! a non-cryptographic fingerprint helper for keying large free-text
//! inputs, and a registry of purpose-named shared cache instances.

pub mod cache;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod registry;

pub use cache::BoundedCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use fingerprint::fingerprint;
pub use registry::{filter_key, CacheRegistry, SharedCache};
