//! Implements [`HashTable`] for [`ChainTable`].
use crate::chain::ChainTable;
use rehash_core::{HashStrategy, HashTable, Key, RehashError, TableStats};
use std::fmt;
use tracing::{debug, warn};

impl<K: Key, H: HashStrategy<K>> ChainTable<K, H> {
    /// Get the hash strategy.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Count the stored occurrences of `key`.
    pub fn count(&self, key: K) -> usize {
        let bucket = &self.buckets[self.hasher.hash(key) as usize];
        self.stats.record_probes(bucket.len().max(1) as u64);
        bucket.iter().filter(|&&k| k == key).count()
    }

    /// Get the length of the longest chain.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get the number of keys that share their slot with a key stored before them.
    pub fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| b.len().saturating_sub(1))
            .sum()
    }

    /// Iterate over all stored keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.buckets.iter().flatten().copied()
    }

    /// Iterate over non-empty slots as `(index, chain)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &[K])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(idx, bucket)| (idx, bucket.as_slice()))
    }

    /// Write one `[index] : key key ...` line per non-empty slot.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (idx, chain) in self.occupied() {
            write!(out, "[{}] :", idx)?;
            for key in chain {
                write!(out, " {:?}", key)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Remove every key and return to the minimum length.
    pub fn clear(&mut self) {
        let length = self.policy.min_length;
        self.hasher.on_resize(length);
        self.buckets = vec![Vec::new(); length as usize];
        self.num_entries = 0;
    }

    /// Reset the operation counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Move every key into a new array of `new_length` slots.
    ///
    /// The hasher adopts the new length before any key is rehashed.
    fn rebuild(&mut self, new_length: u32) {
        let old_length = self.buckets.len();
        debug!(
            old_length,
            new_length,
            num_entries = self.num_entries,
            "rebuilding chain table"
        );

        self.hasher.on_resize(new_length);

        let old_buckets =
            std::mem::replace(&mut self.buckets, vec![Vec::new(); new_length as usize]);
        for key in old_buckets.into_iter().flatten() {
            self.buckets[self.hasher.hash(key) as usize].push(key);
        }

        self.stats.record_probes(self.num_entries as u64);
        self.stats
            .record_rebuild(old_length, new_length as usize, self.num_entries);
    }
}

impl<K: Key, H: HashStrategy<K>> HashTable<K> for ChainTable<K, H> {
    fn insert(&mut self, key: K) -> Result<(), RehashError> {
        if key == K::RESERVED {
            warn!(key = ?key, "rejected reserved key");
            return Err(RehashError::ReservedKey(key.to_u64()));
        }

        if self.policy.should_grow(self.num_entries, self.buckets.len()) {
            let new_length = self.policy.grown_length(self.buckets.len())?;
            self.rebuild(new_length);
        }

        self.buckets[self.hasher.hash(key) as usize].push(key);
        self.num_entries += 1;
        self.stats.record_probes(1);
        Ok(())
    }

    fn find(&self, key: K) -> Option<K> {
        let bucket = &self.buckets[self.hasher.hash(key) as usize];
        let position = bucket.iter().position(|&k| k == key);
        self.stats
            .record_probes(position.map_or(bucket.len(), |p| p + 1).max(1) as u64);

        position.map(|p| bucket[p])
    }

    fn remove(&mut self, key: K) -> bool {
        let idx = self.hasher.hash(key) as usize;
        let bucket = &mut self.buckets[idx];
        let Some(position) = bucket.iter().position(|&k| k == key) else {
            self.stats.record_probes(bucket.len().max(1) as u64);
            return false;
        };
        self.stats.record_probes(position as u64 + 1);

        bucket.swap_remove(position);
        self.num_entries -= 1;

        if let Some(new_length) = self
            .policy
            .shrunk_length(self.num_entries, self.buckets.len())
        {
            self.rebuild(new_length);
        }
        true
    }

    fn len(&self) -> usize {
        self.num_entries
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn stats(&self) -> &TableStats {
        &self.stats
    }
}
