//! Implements [`HashTable`] for [`OpenTable`].
use crate::open::{OpenTable, Slot};
use rehash_core::{HashTable, Key, ProbeStrategy, RehashError, TableStats};
use std::fmt;
use tracing::{debug, warn};

/// Outcome of a probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is stored at the index.
    Hit(usize),
    /// The key is absent, the index is the first free slot of the sequence.
    Vacant(usize),
    /// The key is absent and the sequence met no free slot.
    Exhausted,
}

impl<K: Key, P: ProbeStrategy<K>> OpenTable<K, P> {
    /// Get the probe strategy.
    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Get the number of tombstones left behind by removals since the last rebuild.
    pub fn num_tombstones(&self) -> usize {
        self.num_tombstones
    }

    /// Get the number of trials a lookup of `key` takes.
    pub fn probe_length(&self, key: K) -> u32 {
        self.search(key).1
    }

    /// Iterate over all stored keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.slots.iter().filter_map(Slot::key)
    }

    /// Iterate over occupied slots as `(index, key)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, K)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.key().map(|key| (idx, key)))
    }

    /// Get the state of the slot at `idx`.
    pub fn slot(&self, idx: usize) -> Option<&Slot<K>> {
        self.slots.get(idx)
    }

    /// Write one `[index] : key` line per occupied slot.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (idx, key) in self.occupied() {
            writeln!(out, "[{}] : {:?}", idx, key)?;
        }
        Ok(())
    }

    /// Remove every key and return to the minimum length.
    pub fn clear(&mut self) {
        let length = self.policy.min_length;
        self.prober.on_resize(length);
        self.slots = vec![Slot::Empty; length as usize];
        self.num_entries = 0;
        self.num_tombstones = 0;
    }

    /// Reset the operation counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Walk the probe sequence of `key` and report where it ends and how many trials it took.
    ///
    /// Tombstones don't terminate the walk, but the first one met is remembered as the vacancy.
    fn search(&self, key: K) -> (Probe, u32) {
        let length = self.slots.len() as u32;
        let mut vacancy = None;

        for trial in 0..length {
            let idx = self.prober.probe(key, trial) as usize;
            match self.slots[idx] {
                Slot::Occupied(k) if k == key => return (Probe::Hit(idx), trial + 1),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    vacancy.get_or_insert(idx);
                }
                Slot::Empty => {
                    return (Probe::Vacant(vacancy.unwrap_or(idx)), trial + 1);
                }
            }
        }

        match vacancy {
            Some(idx) => (Probe::Vacant(idx), length),
            None => (Probe::Exhausted, length),
        }
    }

    /// Move every key into a new array of `new_length` slots, dropping the tombstones.
    fn rebuild(&mut self, new_length: u32) {
        let old_length = self.slots.len();
        debug!(
            old_length,
            new_length,
            num_entries = self.num_entries,
            num_tombstones = self.num_tombstones,
            "rebuilding open addressing table"
        );

        self.prober.on_resize(new_length);

        let old_slots =
            std::mem::replace(&mut self.slots, vec![Slot::Empty; new_length as usize]);
        let mut trials = 0;
        for key in old_slots.iter().filter_map(Slot::key) {
            // The new array has no tombstones and no duplicates, the first empty slot wins.
            let (probe, count) = self.search(key);
            trials += count as u64;
            match probe {
                Probe::Vacant(idx) => self.slots[idx] = Slot::Occupied(key),
                Probe::Hit(_) | Probe::Exhausted => {
                    panic!("rebuild found no free slot for {:?}", key)
                }
            }
        }
        self.num_tombstones = 0;

        self.stats.record_probes(trials);
        self.stats
            .record_rebuild(old_length, new_length as usize, self.num_entries);
    }
}

impl<K: Key, P: ProbeStrategy<K>> HashTable<K> for OpenTable<K, P> {
    fn insert(&mut self, key: K) -> Result<(), RehashError> {
        if key == K::RESERVED {
            warn!(key = ?key, "rejected reserved key");
            return Err(RehashError::ReservedKey(key.to_u64()));
        }

        if self.policy.should_grow(self.num_entries, self.slots.len()) {
            let new_length = self.policy.grown_length(self.slots.len())?;
            self.rebuild(new_length);
        }

        let (probe, trials) = self.search(key);
        self.stats.record_probes(trials as u64);
        match probe {
            Probe::Hit(_) => {}
            Probe::Vacant(idx) => {
                if self.slots[idx] == Slot::Tombstone {
                    self.num_tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied(key);
                self.num_entries += 1;
            }
            Probe::Exhausted => panic!(
                "probe sequence of {:?} visited no free slot in {} trials",
                key,
                self.slots.len()
            ),
        }
        Ok(())
    }

    fn find(&self, key: K) -> Option<K> {
        let (probe, trials) = self.search(key);
        self.stats.record_probes(trials as u64);
        match probe {
            Probe::Hit(idx) => self.slots[idx].key(),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    fn remove(&mut self, key: K) -> bool {
        let (probe, trials) = self.search(key);
        self.stats.record_probes(trials as u64);
        let Probe::Hit(idx) = probe else {
            return false;
        };

        self.slots[idx] = Slot::Tombstone;
        self.num_entries -= 1;
        self.num_tombstones += 1;

        if let Some(new_length) = self
            .policy
            .shrunk_length(self.num_entries, self.slots.len())
        {
            self.rebuild(new_length);
        }
        true
    }

    fn len(&self) -> usize {
        self.num_entries
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn stats(&self) -> &TableStats {
        &self.stats
    }
}
