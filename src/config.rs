//! Configuration Module
//!
//! Capacity and TTL knobs for the pre-configured application caches, loaded
//! from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

// == Cache Config ==
/// Per-purpose cache sizing.
///
/// Each named cache gets its own capacity and default TTL: classification
/// results live for minutes, listing queries for seconds, and extraction
/// results, which stand in for expensive external-API calls, for hours.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum entries in the classification cache
    pub classification_max_entries: usize,
    /// Default TTL for classification results
    pub classification_ttl: Duration,
    /// Maximum entries in the listing cache
    pub listing_max_entries: usize,
    /// Default TTL for listing query results
    pub listing_ttl: Duration,
    /// Maximum entries in the extraction cache
    pub extraction_max_entries: usize,
    /// Default TTL for document extraction results
    pub extraction_ttl: Duration,
}

impl CacheConfig {
    /// Creates a CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLASSIFICATION_CACHE_ENTRIES` / `CLASSIFICATION_CACHE_TTL_SECS`
    ///   (default: 512 entries, 600 s)
    /// - `LISTING_CACHE_ENTRIES` / `LISTING_CACHE_TTL_SECS`
    ///   (default: 256 entries, 60 s)
    /// - `EXTRACTION_CACHE_ENTRIES` / `EXTRACTION_CACHE_TTL_SECS`
    ///   (default: 128 entries, 21600 s)
    pub fn from_env() -> Self {
        Self {
            classification_max_entries: env_parse("CLASSIFICATION_CACHE_ENTRIES", 512),
            classification_ttl: Duration::from_secs(env_parse(
                "CLASSIFICATION_CACHE_TTL_SECS",
                600,
            )),
            listing_max_entries: env_parse("LISTING_CACHE_ENTRIES", 256),
            listing_ttl: Duration::from_secs(env_parse("LISTING_CACHE_TTL_SECS", 60)),
            extraction_max_entries: env_parse("EXTRACTION_CACHE_ENTRIES", 128),
            extraction_ttl: Duration::from_secs(env_parse("EXTRACTION_CACHE_TTL_SECS", 21_600)),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            classification_max_entries: 512,
            classification_ttl: Duration::from_secs(600),
            listing_max_entries: 256,
            listing_ttl: Duration::from_secs(60),
            extraction_max_entries: 128,
            extraction_ttl: Duration::from_secs(21_600),
        }
    }
}

/// Reads an env var and parses it, falling back to `default` when the
/// variable is unset or malformed.
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
