//! Implements constructors for [`ChainTable`].
use crate::chain::ChainTable;
use crate::config::ChainConfig;
use crate::hashing::DynHash;
use rehash_core::{FromSeed, HashStrategy, Key, RehashError, TableStats};
use std::marker::PhantomData;

impl<K: Key> ChainTable<K, DynHash<K>> {
    /// Creates an empty table of the minimum length with the default configuration.
    pub fn new() -> Result<Self, RehashError> {
        Self::from_config(&ChainConfig::default())
    }

    /// Creates an empty table that holds `capacity` keys without growing.
    pub fn with_capacity(capacity: usize) -> Result<Self, RehashError> {
        Self::from_config(&ChainConfig::default().with_capacity(capacity))
    }

    /// Creates an empty table with the hash strategy selected by `config.hash`.
    pub fn from_config(config: &ChainConfig) -> Result<Self, RehashError> {
        let length = config.policy()?.initial_length(config.initial_capacity)?;
        let hasher = config.hash.build::<K>(config.seed, length)?;
        Self::with_hasher(hasher, config)
    }
}

impl<K: Key, H: HashStrategy<K> + FromSeed> ChainTable<K, H> {
    /// Creates an empty table building `H` from `config.seed`.
    ///
    /// `config.hash` is ignored, the strategy is determined by `H`.
    pub fn with_config(config: &ChainConfig) -> Result<Self, RehashError> {
        let length = config.policy()?.initial_length(config.initial_capacity)?;
        Self::with_hasher(H::from_seed(config.seed, length)?, config)
    }
}

impl<K: Key, H: HashStrategy<K>> ChainTable<K, H> {
    /// Creates an empty table that uses the given `hasher`.
    ///
    /// The hasher is resized to the initial length of the table if its modulus differs.
    ///
    /// # Parameters
    ///
    /// - `hasher`: The hash strategy. The table takes exclusive ownership of it.
    /// - `config`: Thresholds, minimum length and initial capacity. `config.hash` and
    ///             `config.seed` are ignored.
    pub fn with_hasher(mut hasher: H, config: &ChainConfig) -> Result<Self, RehashError> {
        let policy = config.policy()?;
        let length = policy.initial_length(config.initial_capacity)?;

        if hasher.modulus() != length {
            hasher.on_resize(length);
        }

        Ok(Self {
            hasher,
            buckets: vec![Vec::new(); length as usize],
            num_entries: 0,
            policy,
            stats: TableStats::default(),
            key_type: PhantomData,
        })
    }
}
