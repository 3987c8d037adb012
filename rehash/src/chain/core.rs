//! Declares core types for [`ChainTable`].
use crate::config::ResizePolicy;
use crate::hashing::DynHash;
use rehash_core::{HashStrategy, Key, TableStats};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// Dynamic hash table based on separate chaining.
///
/// Duplicate keys are kept: inserting a key twice stores two occurrences, and each
/// [`rehash_core::HashTable::remove`] erases one of them.
///
/// # Guarantees
///
/// - Expected O(1) time for every operation, amortized over rebuilds.
/// - The length is always a power of two and never drops below the configured minimum.
///
/// # Examples
///
/// ```rust
/// use rehash::{ChainTable, HashTable};
///
/// let mut table = ChainTable::<u32>::new().unwrap();
/// for key in 0..9 {
///     table.insert(key).unwrap();
/// }
/// // The 9th insert found the table full and doubled it.
/// assert_eq!(table.capacity(), 16);
/// assert_eq!(table.find(3), Some(3));
/// ```
pub struct ChainTable<K: Key, H: HashStrategy<K> = DynHash<K>> {
    pub(crate) hasher: H,
    pub(crate) buckets: Vec<Vec<K>>,
    pub(crate) num_entries: usize,
    pub(crate) policy: ResizePolicy,
    pub(crate) stats: TableStats,
    pub(crate) key_type: PhantomData<K>,
}

impl<K: Key, H: HashStrategy<K>> Debug for ChainTable<K, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainTable")
            .field("hasher", &self.hasher)
            .field("length", &self.buckets.len())
            .field("num_entries", &self.num_entries)
            .field("stats", &self.stats)
            .finish()
    }
}
