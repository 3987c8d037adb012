//! Operation counters shared by the table implementations.
use std::cell::Cell;

/// Counters of the work a table performed.
///
/// Lookups take `&self`, so the counters use interior mutability.
#[derive(Debug, Default, Clone)]
pub struct TableStats {
    probes: Cell<u64>,
    rebuilds: Cell<u64>,
    grows: Cell<u64>,
    shrinks: Cell<u64>,
    rehashed: Cell<u64>,
}

impl TableStats {
    /// Number of slots inspected (open addressing) or bucket entries scanned (chaining),
    /// including the work done while rehashing.
    pub fn probes(&self) -> u64 {
        self.probes.get()
    }

    /// Number of full rebuilds.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds.get()
    }

    /// Number of rebuilds that increased the table length.
    pub fn grows(&self) -> u64 {
        self.grows.get()
    }

    /// Number of rebuilds that decreased the table length.
    pub fn shrinks(&self) -> u64 {
        self.shrinks.get()
    }

    /// Number of keys moved into a new backing array by rebuilds.
    pub fn rehashed(&self) -> u64 {
        self.rehashed.get()
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        self.probes.set(0);
        self.rebuilds.set(0);
        self.grows.set(0);
        self.shrinks.set(0);
        self.rehashed.set(0);
    }

    /// Add `count` inspected slots or scanned entries.
    #[inline]
    pub fn record_probes(&self, count: u64) {
        self.probes.set(self.probes.get() + count);
    }

    /// Record a rebuild from `old_length` to `new_length` that moved `num_keys` keys.
    pub fn record_rebuild(&self, old_length: usize, new_length: usize, num_keys: usize) {
        self.rebuilds.set(self.rebuilds.get() + 1);
        if new_length > old_length {
            self.grows.set(self.grows.get() + 1);
        } else if new_length < old_length {
            self.shrinks.set(self.shrinks.get() + 1);
        }
        self.rehashed.set(self.rehashed.get() + num_keys as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_rebuild_classifies_direction() {
        let stats = TableStats::default();
        stats.record_rebuild(8, 16, 8);
        stats.record_rebuild(16, 4, 1);
        stats.record_rebuild(8, 8, 0);
        stats.record_probes(5);

        assert_eq!(stats.rebuilds(), 3);
        assert_eq!(stats.grows(), 1);
        assert_eq!(stats.shrinks(), 1);
        assert_eq!(stats.rehashed(), 9);
        assert_eq!(stats.probes(), 5);

        stats.reset();
        assert_eq!(stats.rebuilds(), 0);
        assert_eq!(stats.probes(), 0);
    }
}
