//! Error types for the caching core
//!
//! The taxonomy is deliberately small: a miss is an expected outcome and is
//! reported through `Option`/`bool` return values, never as an error. The
//! only failure the core can produce is an invalid configuration at
//! construction time.

use thiserror::Error;

// == Cache Error Enum ==
/// Failures raised by cache construction.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity must be at least one entry; a zero-capacity cache could
    /// never hold anything
    #[error("invalid cache capacity: max_size must be positive, got {0}")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the caching core.
pub type Result<T> = std::result::Result<T, CacheError>;
