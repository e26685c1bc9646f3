//! Integration scenarios for the caching core
//!
//! Exercises the public crate surface the way the host application does:
//! purpose-named shared caches, fingerprint-derived keys, and misses
//! answered by recomputation.

use std::time::Duration;

use serde_json::json;

use docgen_cache::{fingerprint, BoundedCache, CacheConfig, CacheRegistry};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn end_to_end_lru_scenario() {
    init_tracing();
    let mut cache = BoundedCache::new(2, Duration::from_millis(1000)).unwrap();

    cache.set("a".to_string(), 1, None);
    cache.set("b".to_string(), 2, None);

    // Promotes "a", leaving "b" least recently used
    assert_eq!(cache.get(&"a".to_string()), Some(&1));

    // Over capacity: "b" goes
    cache.set("c".to_string(), 3, None);

    assert_eq!(cache.get(&"b".to_string()), None);
    assert_eq!(cache.get(&"a".to_string()), Some(&1));
    assert_eq!(cache.get(&"c".to_string()), Some(&3));
    assert_eq!(cache.len(), 2);
}

#[test]
fn expiry_is_observed_by_get_and_has() {
    init_tracing();
    let mut cache = BoundedCache::new(8, Duration::from_millis(30)).unwrap();

    cache.set("short".to_string(), "v".to_string(), None);
    cache.set(
        "long".to_string(),
        "v".to_string(),
        Some(Duration::from_secs(60)),
    );

    assert!(cache.contains_key(&"short".to_string()));

    std::thread::sleep(Duration::from_millis(60));

    assert!(!cache.contains_key(&"short".to_string()));
    assert_eq!(cache.get(&"short".to_string()), None);
    // The per-call override outlives the instance default
    assert_eq!(cache.get(&"long".to_string()), Some(&"v".to_string()));
}

#[test]
fn classification_flow_through_registry() {
    init_tracing();
    let registry = CacheRegistry::new(&CacheConfig::default()).unwrap();

    let body = "Please draft a non-disclosure agreement for ACME Corp covering \
                the evaluation of prototype hardware.";
    let key = fingerprint(body);

    // First pass: miss, so the collaborator classifies and caches
    {
        let mut cache = registry.classification.lock().unwrap();
        assert_eq!(cache.get(&key), None);
        cache.set(key.clone(), json!({"category": "nda", "confidence": 0.93}), None);
    }

    // Second pass from another call site: same fingerprint, warm hit
    {
        let mut cache = registry.classification.lock().unwrap();
        let hit = cache.get(&fingerprint(body)).cloned().unwrap();
        assert_eq!(hit["category"], "nda");
    }
}

#[test]
fn listing_flow_uses_filter_keys() {
    init_tracing();
    let registry = CacheRegistry::new(&CacheConfig::default()).unwrap();

    #[derive(serde::Serialize)]
    struct ListingFilter<'a> {
        status: &'a str,
        owner: &'a str,
        page: u32,
    }

    let filter = ListingFilter { status: "draft", owner: "legal", page: 1 };
    let key = docgen_cache::registry::filter_key(&filter).unwrap();

    let mut cache = registry.listing.lock().unwrap();
    cache.set(key.clone(), json!(["doc-12", "doc-57"]), None);

    let other = ListingFilter { status: "draft", owner: "legal", page: 2 };
    let other_key = docgen_cache::registry::filter_key(&other).unwrap();

    assert!(cache.contains_key(&key));
    assert!(!cache.contains_key(&other_key));
}

#[test]
fn clear_resets_a_shared_instance() {
    init_tracing();
    let registry = CacheRegistry::new(&CacheConfig::default()).unwrap();

    {
        let mut cache = registry.extraction.lock().unwrap();
        cache.set(fingerprint("upload-1"), json!({"pages": 4}), None);
        cache.set(fingerprint("upload-2"), json!({"pages": 9}), None);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&fingerprint("upload-1")), None);
    }

    // The instance survives the reset and keeps its configuration
    let mut cache = registry.extraction.lock().unwrap();
    cache.set(fingerprint("upload-3"), json!({"pages": 2}), None);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.default_ttl(), Duration::from_secs(21_600));
}

#[test]
fn construction_rejects_zero_capacity() {
    let result = BoundedCache::<String, String>::new(0, Duration::from_secs(1));
    assert!(result.is_err());
}
