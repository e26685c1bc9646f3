//! Cache Registry Module
//!
//! The pre-configured, purpose-named cache instances the application shares
//! for its process lifetime. Built once at start-up and handed by reference
//! to whichever component needs a cache, rather than reached through
//! module-level globals, so every call site's dependency is visible at its
//! construction.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cache::BoundedCache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::fingerprint::fingerprint;

/// One shared cache instance behind a coarse lock.
///
/// Every operation is O(1) and runs to completion without suspension
/// points, so a single mutex over the whole instance keeps hold times
/// negligible while making multi-threaded hosts safe.
pub type SharedCache = Mutex<BoundedCache<String, Value>>;

// == Cache Registry ==
/// The application's cache instances, one per purpose.
///
/// Keys are caller-built strings (typically [`fingerprint`] output); values
/// are JSON payloads, the narrow shape the host application exchanges with
/// the core. A miss is always an expected outcome: each collaborator
/// recomputes and re-caches, never treating a cache as a source of truth.
#[derive(Debug)]
pub struct CacheRegistry {
    /// Free-text classification results, keyed by input fingerprint
    pub classification: SharedCache,
    /// Rules/listing query results, keyed by serialized filter description
    pub listing: SharedCache,
    /// Document extraction results, keyed by content fingerprint
    pub extraction: SharedCache,
}

impl CacheRegistry {
    // == Constructor ==
    /// Builds the registry from explicit configuration.
    ///
    /// # Errors
    /// Fails fast if any configured capacity is zero.
    pub fn new(config: &CacheConfig) -> Result<Self> {
        let registry = Self {
            classification: Mutex::new(BoundedCache::new(
                config.classification_max_entries,
                config.classification_ttl,
            )?),
            listing: Mutex::new(BoundedCache::new(
                config.listing_max_entries,
                config.listing_ttl,
            )?),
            extraction: Mutex::new(BoundedCache::new(
                config.extraction_max_entries,
                config.extraction_ttl,
            )?),
        };
        info!(
            classification_entries = config.classification_max_entries,
            listing_entries = config.listing_max_entries,
            extraction_entries = config.extraction_max_entries,
            "cache registry initialized"
        );
        Ok(registry)
    }

    /// Builds the registry from environment variables, with defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(&CacheConfig::from_env())
    }
}

// == Filter Key ==
/// Derives the listing-cache key for a filter description.
///
/// Serializes the filter with `serde_json` and fingerprints the result, so
/// structurally equal filters share a short, stable key.
///
/// # Errors
/// Propagates serialization failures (e.g. a map with non-string keys).
pub fn filter_key<F: Serialize>(filter: &F) -> serde_json::Result<String> {
    Ok(fingerprint(&serde_json::to_string(filter)?))
}
