//! Cache Entry Module
//!
//! Defines the record stored per key: the value plus its absolute expiry.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached record: the payload and the instant it stops being valid.
///
/// Structural links to neighboring records live in the recency list, not
/// here; the store owns every entry through its slot arena.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored payload
    pub(crate) value: V,
    /// Absolute expiry; `None` only when `now + ttl` overflows `Instant`,
    /// which is treated as never expiring
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry expiring `ttl` from now.
    ///
    /// A zero `ttl` produces an entry that is already expired for any later
    /// access: it can be inserted (and can evict), but the next touch sees
    /// it as dead.
    pub(crate) fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is dead as of `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`.
    /// Using `>=` rather than `>` guarantees that a zero-TTL entry misses on
    /// the very next access even when the clock has not advanced.
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime as of `now`.
    ///
    /// Zero once expired; `None` for the (overflow-only) never-expiring case.
    pub(crate) fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
