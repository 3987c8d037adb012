//! Implements constructors for [`OpenTable`].
use crate::config::OpenConfig;
use crate::open::{OpenTable, Slot};
use crate::probing::DynProbe;
use rehash_core::{FromSeed, Key, ProbeStrategy, RehashError, TableStats};
use std::marker::PhantomData;

impl<K: Key> OpenTable<K, DynProbe<K>> {
    /// Creates an empty table of the minimum length with the default configuration.
    pub fn new() -> Result<Self, RehashError> {
        Self::from_config(&OpenConfig::default())
    }

    /// Creates an empty table that holds `capacity` keys without growing.
    pub fn with_capacity(capacity: usize) -> Result<Self, RehashError> {
        Self::from_config(&OpenConfig::default().with_capacity(capacity))
    }

    /// Creates an empty table with the probe strategy selected by `config.probe`.
    pub fn from_config(config: &OpenConfig) -> Result<Self, RehashError> {
        let length = config.policy()?.initial_length(config.initial_capacity)?;
        let prober = config.probe.build::<K>(config.seed, length)?;
        Self::with_prober(prober, config)
    }
}

impl<K: Key, P: ProbeStrategy<K> + FromSeed> OpenTable<K, P> {
    /// Creates an empty table building `P` from `config.seed`.
    ///
    /// `config.probe` is ignored.
    pub fn with_config(config: &OpenConfig) -> Result<Self, RehashError> {
        let length = config.policy()?.initial_length(config.initial_capacity)?;
        Self::with_prober(P::from_seed(config.seed, length)?, config)
    }
}

impl<K: Key, P: ProbeStrategy<K>> OpenTable<K, P> {
    /// Creates an empty table that uses the given `prober`.
    ///
    /// The prober is resized to the initial length of the table if its modulus differs.
    pub fn with_prober(mut prober: P, config: &OpenConfig) -> Result<Self, RehashError> {
        let policy = config.policy()?;
        let length = policy.initial_length(config.initial_capacity)?;

        if prober.modulus() != length {
            prober.on_resize(length);
        }

        Ok(Self {
            prober,
            slots: vec![Slot::Empty; length as usize],
            num_entries: 0,
            num_tombstones: 0,
            policy,
            stats: TableStats::default(),
            key_type: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{Division, HashKind, Universal};
    use crate::probing::{DoubleHashing, LinearProbing, ProbeKind};
    use rehash_core::{HashStrategy, HashTable};

    #[test]
    fn test_new_starts_at_min_length() {
        let table = OpenTable::<u64>::new().unwrap();
        assert_eq!(table.capacity(), 8);
        assert!(table.is_empty());
        assert_eq!(table.num_tombstones(), 0);
    }

    #[test]
    fn test_with_capacity_keeps_load_below_threshold() {
        // 100 keys at load < 0.5 need 256 slots.
        let table = OpenTable::<u32>::with_capacity(100).unwrap();
        assert_eq!(table.capacity(), 256);
    }

    #[test]
    fn test_with_config_builds_strategy_from_seed() {
        let config = OpenConfig::default().with_capacity(20);
        let table =
            OpenTable::<u32, DoubleHashing<u32, Universal<u32>, Division<u32>>>::with_config(
                &config,
            )
            .unwrap();
        assert_eq!(table.capacity(), 64);
        assert_eq!(table.prober().modulus(), 64);
        assert_eq!(table.prober().secondary().modulus(), 64);
    }

    #[test]
    fn test_with_prober_resyncs_modulus() {
        let prober = LinearProbing::new(Division::<u32>::new(5).unwrap());
        let table = OpenTable::with_prober(prober, &OpenConfig::default()).unwrap();
        assert_eq!(table.prober().modulus(), 8);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = OpenConfig::default()
            .with_probe(ProbeKind::Linear(HashKind::Division))
            .with_thresholds(1.0, 0.1);
        assert!(matches!(
            OpenTable::<u32>::from_config(&config),
            Err(RehashError::InvalidThresholds { .. })
        ));
    }
}
