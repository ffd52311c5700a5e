//! Hash function utilities for consistent performance across platforms
//!
//! Provides ahash-based hashers for panelscript-core use cases with `DoS`
//! resistance and consistent performance across platforms.
//!
//! # Features
//!
//! - DoS-resistant hashing via ahash with random seeds
//! - `nostd` support via hashbrown when needed

use ahash::RandomState;

#[cfg(feature = "nostd")]
use hashbrown::HashMap;
#[cfg(not(feature = "nostd"))]
use std::collections::HashMap;

/// Create a new `HashMap` with optimized hasher
///
/// Uses ahash for consistent performance across platforms with `DoS`
/// resistance. Automatically handles `nostd` vs std `HashMap` selection.
///
/// # Example
///
/// ```rust
/// use panelscript_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and optimized hasher
///
/// Pre-allocates the specified capacity to avoid rehashing during
/// construction. Useful when the approximate size is known in advance.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_basic_operations() {
        let mut map = create_hash_map::<&str, usize>();
        map.insert("panels", 6);
        assert_eq!(map.get("panels"), Some(&6));
    }

    #[test]
    fn hash_map_with_capacity_holds_entries() {
        let mut map = create_hash_map_with_capacity::<u32, u32>(16);
        for i in 0..16 {
            map.insert(i, i * 2);
        }
        assert_eq!(map.len(), 16);
    }
}
