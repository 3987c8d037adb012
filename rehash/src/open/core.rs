//! Declares core types for [`OpenTable`].
use crate::config::ResizePolicy;
use crate::probing::DynProbe;
use rehash_core::{Key, ProbeStrategy, TableStats};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// State of a single slot of an [`OpenTable`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Slot<K> {
    /// Never held a key since the last rebuild. Terminates searches.
    #[default]
    Empty,
    /// Held a key that was removed. Searches continue past it, inserts may reuse it.
    Tombstone,
    Occupied(K),
}

impl<K: Copy> Slot<K> {
    /// Get the stored key, if the slot is occupied.
    #[inline]
    pub fn key(&self) -> Option<K> {
        match self {
            Slot::Occupied(key) => Some(*key),
            _ => None,
        }
    }
}

/// Dynamic hash table based on open addressing.
///
/// Every key is stored at most once: inserting a key that is already present leaves the table
/// unchanged.
///
/// Removed keys leave a [`Slot::Tombstone`] behind so that probe sequences passing through the
/// slot stay intact. Tombstones are purged only by a rebuild.
///
/// # Guarantees
///
/// - The load never reaches the grow threshold, so every probe sequence meets a free slot.
/// - The length is always a power of two and never drops below the configured minimum.
///
/// # Examples
///
/// ```rust
/// use rehash::{HashKind, HashTable, OpenConfig, OpenTable, ProbeKind};
///
/// let config = OpenConfig::default().with_probe(ProbeKind::Linear(HashKind::Division));
/// let mut table = OpenTable::<u32>::from_config(&config).unwrap();
/// for key in [5, 13, 21, 29] {
///     table.insert(key).unwrap();
/// }
/// // 4 keys in 8 slots reached the grow threshold, the 5th insert doubles the table.
/// table.insert(37).unwrap();
/// assert_eq!(table.capacity(), 16);
/// ```
pub struct OpenTable<K: Key, P: ProbeStrategy<K> = DynProbe<K>> {
    pub(crate) prober: P,
    pub(crate) slots: Vec<Slot<K>>,
    pub(crate) num_entries: usize,
    pub(crate) num_tombstones: usize,
    pub(crate) policy: ResizePolicy,
    pub(crate) stats: TableStats,
    pub(crate) key_type: PhantomData<K>,
}

impl<K: Key, P: ProbeStrategy<K>> Debug for OpenTable<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTable")
            .field("prober", &self.prober)
            .field("length", &self.slots.len())
            .field("num_entries", &self.num_entries)
            .field("num_tombstones", &self.num_tombstones)
            .field("stats", &self.stats)
            .finish()
    }
}
