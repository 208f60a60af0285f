//! Hash utilities for registries and the render cache
//!
//! ahash-backed helpers: `DoS`-resistant, fast on short keys (function
//! names, dotted paths), and consistent across platforms.

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Create a `HashMap` with the engine's standard hasher.
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a `HashMap` with the engine's standard hasher and capacity.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

/// Hash one value under a caller-held state.
///
/// The render cache keeps its own [`RandomState`] so keys stay comparable
/// for the cache's lifetime while remaining unpredictable across processes.
#[must_use]
pub fn hash_with<T: Hash>(state: &RandomState, value: &T) -> u64 {
    state.hash_one(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_construction() {
        let mut map = create_hash_map::<String, i32>();
        map.insert("radius".to_string(), 4);
        assert_eq!(map.get("radius"), Some(&4));

        let map = create_hash_map_with_capacity::<String, i32>(16);
        assert!(map.capacity() >= 16);
    }

    #[test]
    fn hashing_is_stable_within_one_state() {
        let state = RandomState::new();
        assert_eq!(hash_with(&state, &"icon"), hash_with(&state, &"icon"));
        assert_ne!(hash_with(&state, &"icon"), hash_with(&state, &"radius"));
    }
}
