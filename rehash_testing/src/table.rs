//! Utilities for testing hash table implementations.
use rehash_core::{HashTable, Key, RehashError};
use std::collections::HashSet;
use std::hash::Hash;

/// Tests that every inserted key is found and absent keys are not.
pub fn test_round_trip<K, T>(mut table: T, keys: &[K], absent: &[K])
where
    K: Key + Hash,
    T: HashTable<K>,
{
    for &key in keys {
        table.insert(key).unwrap();
    }
    assert_eq!(table.len(), keys.len());

    for &key in keys {
        assert_eq!(table.find(key), Some(key), "Key: {:?}", key);
    }

    let stored: HashSet<K> = keys.iter().copied().collect();
    for &key in absent.iter().filter(|k| !stored.contains(k)) {
        assert_eq!(table.find(key), None, "Key: {:?}", key);
        assert!(!table.contains(key), "Key: {:?}", key);
    }
}

/// Tests that removed keys disappear while the rest stay reachable.
pub fn test_remove<K, T>(mut table: T, keys: &[K])
where
    K: Key + Hash,
    T: HashTable<K>,
{
    for &key in keys {
        table.insert(key).unwrap();
    }

    let (removed, kept) = keys.split_at(keys.len() / 2);
    for &key in removed {
        assert!(table.remove(key), "Key: {:?}", key);
        assert_eq!(table.find(key), None, "Key: {:?}", key);
    }
    assert_eq!(table.len(), kept.len());

    for &key in removed {
        assert!(!table.remove(key), "Key: {:?}", key);
    }
    for &key in kept {
        assert_eq!(table.find(key), Some(key), "Key: {:?}", key);
    }
}

/// Tests that inserting `keys` into an empty table does amortized constant work per key.
pub fn test_amortized_growth<K, T>(mut table: T, keys: &[K])
where
    K: Key,
    T: HashTable<K>,
{
    let num_keys = keys.len() as u64;
    for &key in keys {
        table.insert(key).unwrap();
    }

    let stats = table.stats();
    // Every rebuild doubles the length, so the rehashed keys form a geometric series.
    assert!(
        stats.rehashed() <= 2 * num_keys,
        "Rehashed {} keys for {} inserts",
        stats.rehashed(),
        num_keys
    );
    assert!(
        stats.probes() <= 16 * num_keys,
        "Spent {} probes on {} inserts",
        stats.probes(),
        num_keys
    );
    assert_eq!(stats.shrinks(), 0);
    assert!(table.load_factor() <= 1.0);
}

/// Tests that alternating an insert and a remove next to a threshold doesn't keep rebuilding.
///
/// `keys` must hold enough keys for three grows.
pub fn test_hysteresis<K, T>(mut table: T, keys: &[K])
where
    K: Key,
    T: HashTable<K>,
{
    const NUM_ROUNDS: usize = 1000;

    let mut inserted = Vec::new();
    for &key in keys {
        table.insert(key).unwrap();
        inserted.push(key);
        if table.stats().grows() >= 3 {
            break;
        }
    }
    assert!(table.stats().grows() >= 3, "Not enough keys to grow 3 times");

    // Right above the grow threshold.
    let last = inserted[inserted.len() - 1];
    let rebuilds = table.stats().rebuilds();
    for _ in 0..NUM_ROUNDS {
        assert!(table.remove(last));
        table.insert(last).unwrap();
    }
    assert!(
        table.stats().rebuilds() - rebuilds <= 2,
        "Rebuilt {} times next to the grow threshold",
        table.stats().rebuilds() - rebuilds
    );

    // Right below the shrink threshold, if the minimum length allows to reach it.
    let shrinks = table.stats().shrinks();
    let mut last_removed = None;
    while let Some(key) = inserted.pop() {
        assert!(table.remove(key));
        if table.stats().shrinks() > shrinks {
            last_removed = Some(key);
            break;
        }
    }
    if let Some(key) = last_removed {
        let rebuilds = table.stats().rebuilds();
        for _ in 0..NUM_ROUNDS {
            table.insert(key).unwrap();
            assert!(table.remove(key));
        }
        assert!(
            table.stats().rebuilds() - rebuilds <= 2,
            "Rebuilt {} times next to the shrink threshold",
            table.stats().rebuilds() - rebuilds
        );
    }
}

/// Tests that a table emptied after growing returns close to its initial length.
pub fn test_shrink_back<K, T>(mut table: T, keys: &[K])
where
    K: Key,
    T: HashTable<K>,
{
    let initial_capacity = table.capacity();
    for &key in keys {
        table.insert(key).unwrap();
    }
    let peak_capacity = table.capacity();

    for &key in keys {
        assert!(table.remove(key), "Key: {:?}", key);
    }
    assert!(table.is_empty());
    assert!(
        table.capacity() < peak_capacity,
        "Length stayed at {}",
        peak_capacity
    );
    // A shrink may be blocked by the minimum length one step above it.
    assert!(
        table.capacity() <= 2 * initial_capacity,
        "Length {} did not return to {}",
        table.capacity(),
        initial_capacity
    );
    for &key in keys {
        assert_eq!(table.find(key), None, "Key: {:?}", key);
    }
}

/// Tests that the reserved key can't be inserted and doesn't alter a table holding `key`.
pub fn test_reserved_key<K, T>(mut table: T, key: K)
where
    K: Key,
    T: HashTable<K>,
{
    table.insert(key).unwrap();
    assert_eq!(
        table.insert(K::RESERVED),
        Err(RehashError::ReservedKey(K::RESERVED.to_u64()))
    );
    assert_eq!(table.len(), 1);
    assert_eq!(table.find(K::RESERVED), None);
    assert!(!table.remove(K::RESERVED));
}

/// Generates conformance tests for a [`HashTable`] implementation.
///
/// # Parameters
///
/// - `name`: Suffix of the generated test functions.
/// - `key_type`: The key type to test (e.g., `u32`).
/// - `factory`: A closure that creates an empty table with the default configuration.
///
/// # Example
///
/// ```ignore
/// generate_table_tests!(chain_division_u32, u32, || {
///     ChainTable::<u32, Division<u32>>::with_config(&ChainConfig::default()).unwrap()
/// });
/// ```
#[macro_export]
macro_rules! generate_table_tests {
    ($name:ident, $key_type:ty, $factory:expr$(,)?) => {
        $crate::compose_idents::compose_idents!(test_fn = concat(test_round_trip_, $name), {
            #[test]
            fn test_fn() {
                let mut rng = $crate::seeded_rng(1);
                let keys: Vec<$key_type> = $crate::generate_keys(&mut rng, 5000);
                let absent: Vec<$key_type> = $crate::generate_keys(&mut rng, 1000);
                $crate::test_round_trip(($factory)(), &keys, &absent);
            }
        });

        $crate::compose_idents::compose_idents!(
            test_fn = concat(test_sequential_round_trip_, $name),
            {
                #[test]
                fn test_fn() {
                    let keys: Vec<$key_type> = (0..5000).collect();
                    let absent: Vec<$key_type> = (5000..6000).collect();
                    $crate::test_round_trip(($factory)(), &keys, &absent);
                }
            }
        );

        $crate::compose_idents::compose_idents!(test_fn = concat(test_remove_, $name), {
            #[test]
            fn test_fn() {
                let mut rng = $crate::seeded_rng(2);
                let keys: Vec<$key_type> = $crate::generate_keys(&mut rng, 5000);
                $crate::test_remove(($factory)(), &keys);
            }
        });

        $crate::compose_idents::compose_idents!(test_fn = concat(test_amortized_growth_, $name), {
            #[test]
            fn test_fn() {
                let mut rng = $crate::seeded_rng(3);
                let keys: Vec<$key_type> = $crate::generate_keys(&mut rng, 10000);
                $crate::test_amortized_growth(($factory)(), &keys);
            }
        });

        $crate::compose_idents::compose_idents!(test_fn = concat(test_hysteresis_, $name), {
            #[test]
            fn test_fn() {
                let mut rng = $crate::seeded_rng(4);
                let keys: Vec<$key_type> = $crate::generate_keys(&mut rng, 1000);
                $crate::test_hysteresis(($factory)(), &keys);
            }
        });

        $crate::compose_idents::compose_idents!(test_fn = concat(test_shrink_back_, $name), {
            #[test]
            fn test_fn() {
                let mut rng = $crate::seeded_rng(5);
                let keys: Vec<$key_type> = $crate::generate_keys(&mut rng, 1000);
                $crate::test_shrink_back(($factory)(), &keys);
            }
        });

        $crate::compose_idents::compose_idents!(test_fn = concat(test_reserved_key_, $name), {
            #[test]
            fn test_fn() {
                $crate::test_reserved_key::<$key_type, _>(($factory)(), 0);
            }
        });
    };
}
pub use generate_table_tests;
